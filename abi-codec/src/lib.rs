//! Word-aligned value and container codecs for contract ABI encoding.
//!
//! [`Codec`] is a small closed set of kinds (integer, bool, fixed-point,
//! fixed bytes, fixed array, bytes, string, dynamic array, tuple) each
//! knowing its own static/dynamic classification and canonical byte
//! layout. [`Value`] is the host-side tree a codec marshals from and
//! unmarshals into.

pub mod codec;
pub mod error;
pub mod value;
pub mod word;

pub use codec::Codec;
pub use error::{Error, Result};
pub use value::Value;
pub use word::{ceil_words_len, pad_left, pad_right, WORD_SIZE};

pub use num_bigint::BigInt;
