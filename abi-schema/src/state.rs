//! The four EVM-style mutability classes a function entry may declare.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}
