use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("schema error: {reason}")]
    SchemaError { reason: String },

    #[error("no function registered for selector {selector}")]
    Binding { selector: String },

    #[error(transparent)]
    Types(#[from] abi_types::Error),

    #[error(transparent)]
    Codec(#[from] abi_codec::Error),

    #[cfg(feature = "json")]
    #[error("malformed contract json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
