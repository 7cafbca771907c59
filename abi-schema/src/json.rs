//! Declarative JSON contract-schema structures and the loader that turns
//! them into a [`crate::Contract`].

use crate::descriptor::FunctionDescriptor;
use crate::error::{Error, Result};
use crate::state::StateMutability;
use crate::Contract;
use abi_crypto::selector;
use abi_types::{parse_type, Binder, MemoryBinder, TypeParam};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Function,
    Constructor,
    Receive,
    Fallback,
    Event,
    Error,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct JsonParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
    #[serde(default)]
    pub components: Vec<JsonParam>,
    #[serde(rename = "internalType", default)]
    pub internal_type: Option<String>,
    #[serde(default)]
    pub indexed: Option<bool>,
}

impl JsonParam {
    fn to_type_param(&self) -> TypeParam {
        let mut param = TypeParam::new(self.type_text.clone())
            .with_name(self.name.clone())
            .with_components(self.components.iter().map(JsonParam::to_type_param).collect());
        if let Some(internal) = &self.internal_type {
            param = param.with_internal_type(internal.clone());
        }
        param
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct JsonEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<JsonParam>,
    #[serde(default)]
    pub outputs: Vec<JsonParam>,
    #[serde(rename = "stateMutability", default)]
    pub state_mutability: Option<StateMutability>,
    #[serde(default)]
    pub anonymous: Option<bool>,
}

/// Loads a contract from a JSON document (a top-level array of entries).
pub fn load(source: &[u8]) -> Result<Contract> {
    let entries: Vec<JsonEntry> = serde_json::from_slice(source)?;
    load_entries(entries)
}

fn load_entries(entries: Vec<JsonEntry>) -> Result<Contract> {
    let mut binder = MemoryBinder::new();
    let mut contract = Contract::default();

    for entry in entries {
        match entry.entry_type {
            EntryType::Function => {
                if entry.name.is_empty() {
                    return Err(Error::SchemaError { reason: "function entry missing name".into() });
                }
                let descriptor = build_function(&entry, &mut binder)?;
                tracing::debug!(
                    signature = %descriptor.signature,
                    selector = %descriptor.selector,
                    "registered function"
                );
                contract.functions.insert(descriptor.selector.to_hex(), descriptor);
            }
            EntryType::Constructor => {
                if contract.constructor.is_some() {
                    return Err(Error::SchemaError { reason: "multiple constructor entries".into() });
                }
                contract.constructor = Some(build_constructor(&entry, &mut binder)?);
            }
            EntryType::Receive | EntryType::Fallback | EntryType::Event | EntryType::Error => {
                tracing::trace!(entry_type = ?entry.entry_type, name = %entry.name, "ignoring non-callable entry");
            }
        }
    }

    Ok(contract)
}

fn build_function(entry: &JsonEntry, binder: &mut dyn Binder) -> Result<FunctionDescriptor> {
    let input_codecs = entry
        .inputs
        .iter()
        .map(|p| parse_type(&p.to_type_param(), binder))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let output_codecs = entry
        .outputs
        .iter()
        .map(|p| parse_type(&p.to_type_param(), binder))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let type_names: Vec<String> = input_codecs.iter().map(|c| c.canonical_name()).collect();
    let signature = format!("{}({})", entry.name, type_names.join(","));
    let sel = selector(&signature);

    Ok(FunctionDescriptor {
        signature,
        selector: sel,
        inputs: abi_codec::Codec::tuple(input_codecs),
        outputs: abi_codec::Codec::tuple(output_codecs),
        state_mutability: entry.state_mutability,
    })
}

fn build_constructor(entry: &JsonEntry, binder: &mut dyn Binder) -> Result<FunctionDescriptor> {
    let input_codecs = entry
        .inputs
        .iter()
        .map(|p| parse_type(&p.to_type_param(), binder))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(FunctionDescriptor {
        signature: format!(
            "constructor({})",
            input_codecs.iter().map(|c| c.canonical_name()).collect::<Vec<_>>().join(",")
        ),
        selector: abi_crypto::Selector::new([0, 0, 0, 0]),
        inputs: abi_codec::Codec::tuple(input_codecs),
        outputs: abi_codec::Codec::tuple(Vec::new()),
        state_mutability: entry.state_mutability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAZ_ABI: &str = r#"[
        {
            "type": "function",
            "name": "baz",
            "stateMutability": "nonpayable",
            "inputs": [
                {"name": "a", "type": "uint32"},
                {"name": "b", "type": "bool"}
            ],
            "outputs": []
        }
    ]"#;

    #[test]
    fn loads_simple_function() {
        let contract = load(BAZ_ABI.as_bytes()).unwrap();
        let descriptor = contract.lookup_by_signature("baz(uint32,bool)").unwrap();
        assert_eq!(descriptor.selector.to_hex(), "cdcd77c0");
    }

    #[test]
    fn ignores_events_and_errors() {
        let abi = r#"[
            {"type": "event", "name": "Transfer", "inputs": [{"name":"to","type":"address","indexed":true}]},
            {"type": "error", "name": "InsufficientBalance", "inputs": []}
        ]"#;
        let contract = load(abi.as_bytes()).unwrap();
        assert!(contract.functions.is_empty());
    }

    #[test]
    fn named_tuple_input_roundtrips_through_binder() {
        let abi = r#"[{
            "type": "function",
            "name": "setPoint",
            "inputs": [{
                "name": "p",
                "type": "tuple",
                "internalType": "struct Point",
                "components": [
                    {"name": "x", "type": "uint256"},
                    {"name": "y", "type": "uint256"}
                ]
            }],
            "outputs": []
        }]"#;
        let contract = load(abi.as_bytes()).unwrap();
        let descriptor = contract.lookup_by_signature("setPoint((uint256,uint256))").unwrap();
        assert_eq!(descriptor.inputs.canonical_name(), "((uint256,uint256))");
    }

    #[test]
    fn rejects_duplicate_constructor() {
        let abi = r#"[
            {"type": "constructor", "inputs": []},
            {"type": "constructor", "inputs": []}
        ]"#;
        assert!(load(abi.as_bytes()).is_err());
    }
}
