//! Rust-native building blocks for encoding and decoding smart-contract
//! ABI calls.
//!
//! This crate re-exports its constituent crates as nested modules so a
//! consumer depends on one thing:
//!
//! - [`codec`] — the word-aligned value and container codecs.
//! - [`crypto`] — the digest and function-selector primitives.
//! - [`types`] — the type-grammar parser and named-tuple binder.
//! - [`schema`] — the JSON contract loader, function descriptors, and the
//!   contract registry (requires the `json` feature, on by default).

pub use abi_codec as codec;
pub use abi_crypto as crypto;
pub use abi_types as types;

#[cfg(feature = "json")]
pub use abi_schema as schema;

pub use abi_codec::{Codec, Value};
pub use abi_crypto::{selector, Selector};
pub use abi_types::{parse_type, Binder, MemoryBinder, TypeParam};

#[cfg(feature = "json")]
pub use abi_schema::{load, Contract, FunctionDescriptor};

/// The union of every constituent crate's error type. Most callers use a
/// more specific `Result` from the crate whose operation they invoked;
/// this exists for call sites that bridge several of them (e.g. a loader
/// that both parses JSON and builds codecs).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] abi_codec::Error),
    #[error(transparent)]
    Types(#[from] abi_types::Error),
    #[cfg(feature = "json")]
    #[error(transparent)]
    Schema(#[from] abi_schema::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
