use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown type `{type_text}`")]
    UnknownType { type_text: String },

    #[error("malformed type grammar `{type_text}`: {reason}")]
    MalformedGrammar { type_text: String, reason: String },

    #[error(transparent)]
    Codec(#[from] abi_codec::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
