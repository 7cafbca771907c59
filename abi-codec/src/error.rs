use thiserror::Error;

/// Failure modes produced while constructing, encoding, or decoding a codec.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid integer bit width {bits}: must be a non-zero multiple of 8 up to 256")]
    InvalidBits { bits: u32 },

    #[error("invalid value for type {type_name}: {reason}")]
    InvalidValue { type_name: String, reason: String },

    #[error("truncated input: needed at least {needed} bytes, got {available}")]
    TruncatedInput { needed: usize, available: usize },

    #[error("invalid length for type {type_name}: {reason}")]
    InvalidLength { type_name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
