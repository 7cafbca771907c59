//! The type-grammar parser: turns a schema's textual type (`uint256[3][]`,
//! `bytes4`, `tuple`) into a [`Codec`].

use crate::binder::Binder;
use crate::error::{Error, Result};
use abi_codec::Codec;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One parameter entry as seen by the type parser: the declared field
/// name, the declared type text, an optional Solidity-style `internalType`
/// (used to resolve named tuples), and, for tuple types, the child
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct TypeParam {
    pub name: String,
    pub type_text: String,
    pub internal_type: Option<String>,
    pub components: Vec<TypeParam>,
}

impl TypeParam {
    pub fn new(type_text: impl Into<String>) -> Self {
        TypeParam { name: String::new(), type_text: type_text.into(), internal_type: None, components: Vec::new() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_internal_type(mut self, internal_type: impl Into<String>) -> Self {
        self.internal_type = Some(internal_type.into());
        self
    }

    pub fn with_components(mut self, components: Vec<TypeParam>) -> Self {
        self.components = components;
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Bracket {
    Dynamic,
    Fixed(u32),
}

/// Parses `param` into a codec, resolving named tuples through `binder`.
pub fn parse_type(param: &TypeParam, binder: &mut dyn Binder) -> Result<Codec> {
    let (base, brackets) = tokenize(&param.type_text)?;

    let mut codec = if base == "tuple" {
        parse_tuple(param, binder)?
    } else {
        resolve_builtin(&base, &param.type_text)?
    };

    for bracket in brackets {
        codec = match bracket {
            Bracket::Dynamic => Codec::array(codec),
            Bracket::Fixed(n) => Codec::fixed_array(codec, n),
        };
    }

    Ok(codec)
}

fn parse_tuple(param: &TypeParam, binder: &mut dyn Binder) -> Result<Codec> {
    let struct_name = param.internal_type.as_deref().and_then(extract_struct_name);

    let mut field_names = Vec::with_capacity(param.components.len());
    let mut children = Vec::with_capacity(param.components.len());
    for component in &param.components {
        children.push(parse_type(component, binder)?);
        field_names.push(component.name.clone());
    }

    if let Some(name) = struct_name {
        let fields: Vec<(String, String)> = field_names
            .iter()
            .zip(children.iter())
            .map(|(name, codec)| (name.clone(), codec.canonical_name()))
            .collect();
        binder.register_named_tuple(&name, &fields);
    }

    Ok(Codec::tuple(children))
}

/// Strips a `struct ` prefix and any trailing `[]`/`[N]` groups, leaving
/// the bare structural name, or `None` if `internal_type` isn't a struct
/// reference at all.
fn extract_struct_name(internal_type: &str) -> Option<String> {
    let rest = internal_type.strip_prefix("struct ")?;
    let base = rest.split('[').next().unwrap_or(rest);
    let trimmed = base.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn tokenize(type_text: &str) -> Result<(String, Vec<Bracket>)> {
    let bracket_start = type_text.find('[');
    let (base, mut rest) = match bracket_start {
        Some(idx) => (&type_text[..idx], &type_text[idx..]),
        None => (type_text, ""),
    };

    if base.is_empty() {
        return Err(Error::MalformedGrammar {
            type_text: type_text.to_string(),
            reason: "empty base type".to_string(),
        });
    }

    let mut brackets = Vec::new();
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(Error::MalformedGrammar {
                type_text: type_text.to_string(),
                reason: "expected `[` while scanning array brackets".to_string(),
            });
        }
        let close = rest.find(']').ok_or_else(|| Error::MalformedGrammar {
            type_text: type_text.to_string(),
            reason: "unterminated `[`".to_string(),
        })?;
        let inner = &rest[1..close];
        if inner.is_empty() {
            brackets.push(Bracket::Dynamic);
        } else {
            let n: u32 = inner.parse().map_err(|_| Error::MalformedGrammar {
                type_text: type_text.to_string(),
                reason: format!("`{inner}` is not a valid array length"),
            })?;
            brackets.push(Bracket::Fixed(n));
        }
        rest = &rest[close + 1..];
    }

    Ok((base.to_string(), brackets))
}

/// The fixed-name builtins (no trailing bit-width/length digits), built
/// once and shared across every lookup rather than reconstructed per call.
fn builtin_table() -> &'static HashMap<&'static str, Codec> {
    static TABLE: OnceLock<HashMap<&'static str, Codec>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        table.insert("uint", Codec::integer(256, false).expect("uint256 is valid"));
        table.insert("int", Codec::integer(256, true).expect("int256 is valid"));
        table.insert("address", Codec::address().expect("uint160 is valid"));
        table.insert("bool", Codec::Bool);
        table.insert("bytes", Codec::Bytes);
        table.insert("string", Codec::String);
        table.insert("fixed", Codec::fixed_point(128, 18, true).expect("fixed128x18 is valid"));
        table.insert("ufixed", Codec::fixed_point(128, 18, false).expect("ufixed128x18 is valid"));
        table
    })
}

fn resolve_builtin(base: &str, type_text: &str) -> Result<Codec> {
    if let Some(codec) = builtin_table().get(base) {
        return Ok(codec.clone());
    }

    if let Some(bits) = base.strip_prefix("uint") {
        Codec::integer(parse_dimension(bits, type_text)?, false).map_err(Error::from)
    } else if let Some(bits) = base.strip_prefix("int") {
        Codec::integer(parse_dimension(bits, type_text)?, true).map_err(Error::from)
    } else if let Some(len) = base.strip_prefix("bytes") {
        Codec::fixed_bytes(parse_dimension(len, type_text)?).map_err(Error::from)
    } else if let Some(dims) = base.strip_prefix("ufixed") {
        let (bits, decimals) = parse_fixed_dims(dims, type_text)?;
        Codec::fixed_point(bits, decimals, false).map_err(Error::from)
    } else if let Some(dims) = base.strip_prefix("fixed") {
        let (bits, decimals) = parse_fixed_dims(dims, type_text)?;
        Codec::fixed_point(bits, decimals, true).map_err(Error::from)
    } else {
        Err(Error::UnknownType { type_text: type_text.to_string() })
    }
}

fn parse_dimension(text: &str, type_text: &str) -> Result<u32> {
    text.parse()
        .map_err(|_| Error::UnknownType { type_text: type_text.to_string() })
}

fn parse_fixed_dims(text: &str, type_text: &str) -> Result<(u32, u32)> {
    let mut parts = text.split('x');
    let bits = parts.next().ok_or_else(|| Error::UnknownType { type_text: type_text.to_string() })?;
    let decimals = parts.next().ok_or_else(|| Error::UnknownType { type_text: type_text.to_string() })?;
    if parts.next().is_some() {
        return Err(Error::UnknownType { type_text: type_text.to_string() });
    }
    Ok((parse_dimension(bits, type_text)?, parse_dimension(decimals, type_text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::MemoryBinder;

    fn parse(text: &str) -> Codec {
        let mut binder = MemoryBinder::new();
        parse_type(&TypeParam::new(text), &mut binder).unwrap()
    }

    #[test]
    fn parses_primitives() {
        assert_eq!(parse("uint256").canonical_name(), "uint256");
        assert_eq!(parse("uint").canonical_name(), "uint256");
        assert_eq!(parse("int8").canonical_name(), "int8");
        assert_eq!(parse("bool").canonical_name(), "bool");
        assert_eq!(parse("address").canonical_name(), "uint160");
        assert_eq!(parse("bytes4").canonical_name(), "bytes4");
        assert_eq!(parse("bytes").canonical_name(), "bytes");
        assert_eq!(parse("string").canonical_name(), "string");
    }

    #[test]
    fn parses_nested_arrays() {
        let codec = parse("uint256[3][]");
        assert_eq!(codec.canonical_name(), "uint256[3][]");
        assert!(codec.is_dynamic());
    }

    #[test]
    fn parses_dynamic_array_of_static_fixed_array() {
        let codec = parse("bytes3[2]");
        assert!(!codec.is_dynamic());
    }

    #[test]
    fn unknown_type_rejected() {
        let mut binder = MemoryBinder::new();
        let err = parse_type(&TypeParam::new("wat256"), &mut binder).unwrap_err();
        assert!(matches!(err, Error::UnknownType { .. }));
    }

    #[test]
    fn named_tuple_registers_once() {
        let mut binder = MemoryBinder::new();
        let point = TypeParam::new("tuple").with_internal_type("struct Point").with_components(vec![
            TypeParam::new("uint256").with_name("x"),
            TypeParam::new("uint256").with_name("y"),
        ]);

        parse_type(&point, &mut binder).unwrap();
        parse_type(&point, &mut binder).unwrap();

        let fields = binder.lookup_named_tuple("Point").unwrap();
        assert_eq!(
            fields,
            &[("x".to_string(), "uint256".to_string()), ("y".to_string(), "uint256".to_string())]
        );
    }

    #[test]
    fn anonymous_tuple_not_registered() {
        let mut binder = MemoryBinder::new();
        let anon = TypeParam::new("tuple").with_components(vec![TypeParam::new("bool")]);
        let codec = parse_type(&anon, &mut binder).unwrap();
        assert_eq!(codec.canonical_name(), "(bool)");
    }
}
