//! A single callable function: its signature, selector, and input/output
//! tuple codecs.

use crate::error::Result;
use crate::state::StateMutability;
use abi_codec::{Codec, Value};
use abi_crypto::Selector;

/// A destination callback invoked with one decoded output value, in
/// declaration order, mirroring the "ordered list of destinations" an
/// unmarshal call is handed in the source this was distilled from.
pub type Destination<'a> = Box<dyn FnMut(Value) -> Result<()> + 'a>;

#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    pub signature: String,
    pub selector: Selector,
    /// Always a `Codec::Tuple`.
    pub inputs: Codec,
    /// Always a `Codec::Tuple`.
    pub outputs: Codec,
    pub state_mutability: Option<StateMutability>,
}

impl FunctionDescriptor {
    /// Encodes `args` (a `Value::Tuple` matching `self.inputs`) and
    /// prepends the 4-byte selector.
    pub fn encode_call(&self, args: &Value) -> Result<Vec<u8>> {
        let mut out = self.selector.as_bytes().to_vec();
        out.extend(self.inputs.encode(args)?);
        Ok(out)
    }

    /// Decodes a raw return payload into a `Value::Tuple` matching
    /// `self.outputs`, returning the value and the number of bytes
    /// consumed.
    pub fn decode_return(&self, data: &[u8]) -> Result<(Value, usize)> {
        Ok(self.outputs.decode(data)?)
    }

    /// Decodes a raw return payload, dispatching each top-level output
    /// value positionally to `destinations`.
    pub fn decode_return_into(&self, data: &[u8], mut destinations: Vec<Destination<'_>>) -> Result<usize> {
        let (value, consumed) = self.decode_return(data)?;
        let items = match value {
            Value::Tuple(items) => items,
            other => vec![other],
        };
        for (item, mut dest) in items.into_iter().zip(destinations.drain(..)) {
            dest(item)?;
        }
        Ok(consumed)
    }
}
