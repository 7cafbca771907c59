//! JSON contract-schema loading, function descriptors, and the contract
//! registry, plus trait seams for the RPC/signing/code-generation
//! collaborators that sit outside this crate.

pub mod collaborators;
pub mod descriptor;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod registry;
pub mod state;

pub use collaborators::{CallOptions, Receipt, RpcProvider, Signer, Transaction, DEFAULT_GAS_LIMIT};
pub use descriptor::FunctionDescriptor;
pub use error::{Error, Result};
pub use registry::Contract;
pub use state::StateMutability;

#[cfg(feature = "json")]
pub use json::load;

pub use abi_types::{Binder, MemoryBinder};
