//! Seams for the external collaborators this core delegates to: a
//! JSON-RPC provider, a transaction signer, and the code generator that
//! reads the binder table. None of these are implemented here beyond a
//! trait definition (and, for the code generator's needs, the concrete
//! [`crate::Contract`]/[`abi_types::MemoryBinder`] data it walks); a real
//! deployment wires in its own provider and signer.

use crate::error::Result;
use num_bigint::BigInt;

/// Opaque transaction id returned by a provider after broadcast.
pub type TxId = String;

/// Minimal receipt shape a provider hands back for a submitted transaction.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub tx_id: TxId,
    pub success: bool,
    pub block_number: Option<u64>,
}

/// The call/send surface a contract function needs from a chain client.
/// The core only ever constructs the `to` address and `data` payload; it
/// never inspects provider internals.
pub trait RpcProvider {
    fn call(&self, to: &str, data: &[u8]) -> Result<Vec<u8>>;
    fn send_raw(&self, raw_tx: &[u8]) -> Result<TxId>;
    fn get_receipt(&self, tx_id: &TxId) -> Result<Option<Receipt>>;
    fn gas_price(&self) -> Result<BigInt>;
    fn nonce(&self, address: &str) -> Result<BigInt>;
}

/// A transaction ready for signing. Signature fields are populated by the
/// signer.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    pub nonce: BigInt,
    pub gas_price: BigInt,
    pub gas_limit: BigInt,
    pub to: String,
    pub amount: BigInt,
    pub data: Vec<u8>,
    pub r: Option<Vec<u8>>,
    pub s: Option<Vec<u8>>,
    pub v: Option<u64>,
}

pub trait Signer {
    fn address(&self) -> String;
    fn sign_transaction(&self, tx: &mut Transaction) -> Result<()>;
}

/// Per-call overrides; any field left `None` is filled from provider
/// defaults at call time (gas price/nonce from the provider, gas limit
/// defaulting to 21000, amount defaulting to zero).
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub gas_price: Option<BigInt>,
    pub gas_limit: Option<BigInt>,
    pub nonce: Option<BigInt>,
    pub amount: Option<BigInt>,
}

pub const DEFAULT_GAS_LIMIT: u64 = 21_000;
