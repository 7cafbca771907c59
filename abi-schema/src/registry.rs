//! A loaded contract: its functions indexed by selector, plus its optional
//! constructor.

use crate::descriptor::FunctionDescriptor;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Maps selector (hex, no `0x` prefix) to [`FunctionDescriptor`] and holds
/// at most one constructor. Immutable once a schema load completes.
#[derive(Debug, Clone, Default)]
pub struct Contract {
    pub functions: BTreeMap<String, FunctionDescriptor>,
    pub constructor: Option<FunctionDescriptor>,
}

impl Contract {
    pub fn lookup_by_selector(&self, selector_hex: &str) -> Option<&FunctionDescriptor> {
        self.functions.get(selector_hex)
    }

    pub fn lookup_by_signature(&self, signature: &str) -> Option<&FunctionDescriptor> {
        let sel = abi_crypto::selector(signature);
        self.lookup_by_selector(&sel.to_hex())
    }

    pub fn constructor(&self) -> Option<&FunctionDescriptor> {
        self.constructor.as_ref()
    }

    /// Like [`Contract::lookup_by_signature`], but fails loudly instead of
    /// returning `None` — convenient at a call site that already knows the
    /// function must exist.
    pub fn require_by_signature(&self, signature: &str) -> Result<&FunctionDescriptor> {
        self.lookup_by_signature(signature).ok_or_else(|| Error::Binding { selector: signature.to_string() })
    }
}
