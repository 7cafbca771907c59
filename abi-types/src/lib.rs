//! Type-grammar parsing and named-tuple binding for contract ABI schemas.

pub mod binder;
pub mod error;
pub mod parser;

pub use binder::{Binder, MemoryBinder, TupleField};
pub use error::{Error, Result};
pub use parser::{parse_type, TypeParam};
