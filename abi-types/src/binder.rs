//! The named-tuple binder table.
//!
//! A named tuple is a struct-shaped parameter whose schema carried an
//! `internalType` of the form `struct NAME`. The binder tracks the
//! insertion-ordered `(field name, child type name)` shape for each NAME
//! the first time it is seen, so that a downstream code generator can emit
//! one host-language type per NAME rather than one per occurrence.

use std::collections::BTreeMap;

/// One field of a registered named tuple: its declared name and the
/// canonical type name of its codec.
pub type TupleField = (String, String);

/// Registers and looks up named-tuple shapes during a single schema load.
pub trait Binder {
    /// Registers `name` with `fields` if not already present. Idempotent:
    /// a name already registered is left untouched, matching the
    /// "registered at most once, reused on every subsequent reference"
    /// rule.
    fn register_named_tuple(&mut self, name: &str, fields: &[TupleField]);

    /// Returns the previously registered shape for `name`, if any.
    fn lookup_named_tuple(&self, name: &str) -> Option<&[TupleField]>;
}

/// An in-memory binder backed by a sorted map. This is the concrete binder
/// the schema loader uses internally; external code generators implement
/// their own [`Binder`] over whatever storage they need.
#[derive(Debug, Default, Clone)]
pub struct MemoryBinder {
    records: BTreeMap<String, Vec<TupleField>>,
}

impl MemoryBinder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Binder for MemoryBinder {
    fn register_named_tuple(&mut self, name: &str, fields: &[TupleField]) {
        self.records
            .entry(name.to_string())
            .or_insert_with(|| fields.to_vec());
    }

    fn lookup_named_tuple(&self, name: &str) -> Option<&[TupleField]> {
        self.records.get(name).map(Vec::as_slice)
    }
}
