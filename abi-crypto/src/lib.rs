//! Digest and function-selector primitives.
//!
//! A contract call is addressed by a 4-byte selector derived from the
//! Keccak-256 digest of a canonical function signature. This crate owns
//! that derivation and the raw digest it is built from.

use sha3::{Digest, Keccak256};
use std::fmt;

/// Number of bytes carried by a function selector.
pub const SELECTOR_LEN: usize = 4;

/// A 4-byte function selector.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector([u8; SELECTOR_LEN]);

impl Selector {
    pub fn new(bytes: [u8; SELECTOR_LEN]) -> Self {
        Selector(bytes)
    }

    /// Derives the selector from a canonical signature string, e.g.
    /// `"transfer(address,uint256)"`.
    pub fn of_signature(signature: &str) -> Self {
        let digest = keccak256(signature.as_bytes());
        let mut out = [0u8; SELECTOR_LEN];
        out.copy_from_slice(&digest[..SELECTOR_LEN]);
        Selector(out)
    }

    pub fn as_bytes(&self) -> &[u8; SELECTOR_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; SELECTOR_LEN]> for Selector {
    fn from(bytes: [u8; SELECTOR_LEN]) -> Self {
        Selector(bytes)
    }
}

impl AsRef<[u8]> for Selector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::str::FromStr for Selector {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut out = [0u8; SELECTOR_LEN];
        hex::decode_to_slice(s, &mut out)?;
        Ok(Selector(out))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.to_hex())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Computes the Keccak-256 (legacy, pre-NIST-finalization padding) digest
/// of `data`. This is the digest used by EVM-style contract ABIs, not the
/// NIST SHA3-256 variant.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&out);
    buf
}

/// Derives the 4-byte selector for a canonical function signature.
pub fn selector(signature: &str) -> Selector {
    Selector::of_signature(signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_selector() {
        // keccak256("baz(uint32,bool)") = cdcd77c0...
        let sel = selector("baz(uint32,bool)");
        assert_eq!(sel.to_hex(), "cdcd77c0");
    }

    #[test]
    fn from_str_roundtrip() {
        let sel = selector("sam(bytes,bool,uint256[])");
        let text = sel.to_hex();
        let parsed: Selector = text.parse().unwrap();
        assert_eq!(sel, parsed);
    }

    #[test]
    fn from_str_with_0x_prefix() {
        let parsed: Selector = "0xa5643bf2".parse().unwrap();
        assert_eq!(parsed.to_hex(), "a5643bf2");
    }

    #[test]
    fn from_str_fail_bad_hex() {
        assert!("zzzzzzzz".parse::<Selector>().is_err());
    }

    #[test]
    fn keccak_known_vector() {
        // keccak256("") = c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470
        let digest = keccak256(b"");
        assert_eq!(
            hex::encode(digest),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
