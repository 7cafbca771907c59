//! The ten codec kinds and their canonical byte layouts.

use crate::error::{Error, Result};
use crate::value::Value;
use crate::word::{ceil_words_len, pad_left, pad_right, WORD_SIZE};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A composable ABI codec. Construction for the parameterized kinds is
/// fallible where the parameters themselves are malformed (e.g. a zero bit
/// width); composed kinds (`FixedArray`, `Array`, `Tuple`) simply own their
/// already-validated children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Codec {
    Integer { bits: u32, signed: bool },
    Bool,
    FixedPoint { bits: u32, decimals: u32, signed: bool },
    FixedBytes { len: u32 },
    Bytes,
    String,
    FixedArray { element: Box<Codec>, len: u32 },
    Array { element: Box<Codec> },
    Tuple { children: Vec<Codec> },
}

impl Codec {
    pub fn integer(bits: u32, signed: bool) -> Result<Codec> {
        validate_bits(bits)?;
        Ok(Codec::Integer { bits, signed })
    }

    pub fn address() -> Result<Codec> {
        Codec::integer(160, false)
    }

    pub fn fixed_point(bits: u32, decimals: u32, signed: bool) -> Result<Codec> {
        validate_bits(bits)?;
        Ok(Codec::FixedPoint { bits, decimals, signed })
    }

    pub fn fixed_bytes(len: u32) -> Result<Codec> {
        if len == 0 || len > 32 {
            return Err(Error::InvalidLength {
                type_name: "fixedBytes".into(),
                reason: format!("length {len} out of range 1..=32"),
            });
        }
        Ok(Codec::FixedBytes { len })
    }

    pub fn fixed_array(element: Codec, len: u32) -> Codec {
        Codec::FixedArray { element: Box::new(element), len }
    }

    pub fn array(element: Codec) -> Codec {
        Codec::Array { element: Box::new(element) }
    }

    pub fn tuple(children: Vec<Codec>) -> Codec {
        Codec::Tuple { children }
    }

    /// True if this codec's encoded length depends on the value being
    /// encoded rather than being fixed by construction.
    pub fn is_dynamic(&self) -> bool {
        self.static_size().is_none()
    }

    /// The fixed encoded length in bytes, or `None` if dynamic.
    pub fn static_size(&self) -> Option<usize> {
        match self {
            Codec::Integer { .. }
            | Codec::Bool
            | Codec::FixedPoint { .. }
            | Codec::FixedBytes { .. } => Some(WORD_SIZE),
            Codec::Bytes | Codec::String | Codec::Array { .. } => None,
            Codec::FixedArray { element, len } => {
                element.static_size().map(|sz| sz * (*len as usize))
            }
            Codec::Tuple { children } => {
                let mut total = 0usize;
                for c in children {
                    total += c.static_size()?;
                }
                Some(total)
            }
        }
    }

    /// The canonical type name used to build function signatures.
    pub fn canonical_name(&self) -> String {
        match self {
            Codec::Integer { bits, signed } => {
                format!("{}int{}", if *signed { "" } else { "u" }, bits)
            }
            Codec::Bool => "bool".to_string(),
            Codec::FixedPoint { bits, decimals, signed } => {
                format!("{}fixed{}x{}", if *signed { "" } else { "u" }, bits, decimals)
            }
            Codec::FixedBytes { len } => format!("bytes{len}"),
            Codec::Bytes => "bytes".to_string(),
            Codec::String => "string".to_string(),
            Codec::FixedArray { element, len } => format!("{}[{}]", element.canonical_name(), len),
            Codec::Array { element } => format!("{}[]", element.canonical_name()),
            Codec::Tuple { children } => {
                let parts: Vec<String> = children.iter().map(Codec::canonical_name).collect();
                format!("({})", parts.join(","))
            }
        }
    }

    /// Encodes `value`, returning a byte string whose length is always a
    /// multiple of [`WORD_SIZE`].
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        match self {
            Codec::Integer { bits, signed } => {
                let i = expect_int(self, value)?;
                Ok(encode_integer(i, *bits, *signed, &self.canonical_name())?.to_vec())
            }
            Codec::Bool => {
                let b = match value {
                    Value::Bool(b) => *b,
                    _ => return Err(type_mismatch(self, value)),
                };
                let i = BigInt::from(if b { 1 } else { 0 });
                Ok(encode_integer(&i, 8, false, "bool")?.to_vec())
            }
            Codec::FixedPoint { bits, signed, .. } => {
                let i = expect_int(self, value)?;
                Ok(encode_integer(i, *bits, *signed, &self.canonical_name())?.to_vec())
            }
            Codec::FixedBytes { len } => {
                let bytes = match value {
                    Value::FixedBytes(b) | Value::Bytes(b) => b.as_slice(),
                    _ => return Err(type_mismatch(self, value)),
                };
                if bytes.len() != *len as usize {
                    return Err(Error::InvalidLength {
                        type_name: self.canonical_name(),
                        reason: format!("expected {} bytes, got {}", len, bytes.len()),
                    });
                }
                Ok(pad_right(bytes))
            }
            Codec::Bytes => {
                let bytes = match value {
                    Value::Bytes(b) | Value::FixedBytes(b) => b.as_slice(),
                    _ => return Err(type_mismatch(self, value)),
                };
                Ok(encode_variable_bytes(bytes))
            }
            Codec::String => {
                let s = match value {
                    Value::String(s) => s.as_str(),
                    _ => return Err(type_mismatch(self, value)),
                };
                Ok(encode_variable_bytes(s.as_bytes()))
            }
            Codec::FixedArray { element, len } => {
                let items = expect_seq(self, value, Some(*len as usize))?;
                encode_head_tail(element, items)
            }
            Codec::Array { element } => {
                let items = expect_seq(self, value, None)?;
                let mut out = encode_integer(&BigInt::from(items.len()), 256, false, "uint256")?.to_vec();
                out.extend(encode_head_tail(element, items)?);
                Ok(out)
            }
            Codec::Tuple { children } => {
                let items = expect_seq(self, value, Some(children.len()))?;
                let pairs: Vec<(&Codec, &Value)> = children.iter().zip(items.iter()).collect();
                encode_head_tail_pairs(&pairs)
            }
        }
    }

    /// Decodes a value starting at the beginning of `data`, returning the
    /// value and the number of bytes consumed from the start of `data`.
    pub fn decode(&self, data: &[u8]) -> Result<(Value, usize)> {
        match self {
            Codec::Integer { bits, signed } => {
                let word = take_word(data, &self.canonical_name())?;
                let i = decode_integer(word, *bits, *signed);
                Ok((Value::Int(i), WORD_SIZE))
            }
            Codec::Bool => {
                let word = take_word(data, "bool")?;
                let i = decode_integer(word, 8, false);
                if i != BigInt::from(0) && i != BigInt::from(1) {
                    return Err(Error::InvalidValue {
                        type_name: "bool".into(),
                        reason: format!("value {i} is neither 0 nor 1"),
                    });
                }
                Ok((Value::Bool(i != BigInt::from(0)), WORD_SIZE))
            }
            Codec::FixedPoint { bits, signed, .. } => {
                let word = take_word(data, &self.canonical_name())?;
                let i = decode_integer(word, *bits, *signed);
                Ok((Value::Int(i), WORD_SIZE))
            }
            Codec::FixedBytes { len } => {
                let word = take_word(data, &self.canonical_name())?;
                Ok((Value::FixedBytes(word[..*len as usize].to_vec()), WORD_SIZE))
            }
            Codec::Bytes => decode_variable_bytes(data, &self.canonical_name())
                .map(|(bytes, consumed)| (Value::Bytes(bytes), consumed)),
            Codec::String => {
                let (bytes, consumed) = decode_variable_bytes(data, &self.canonical_name())?;
                let s = String::from_utf8(bytes).map_err(|e| Error::InvalidValue {
                    type_name: "string".into(),
                    reason: e.to_string(),
                })?;
                Ok((Value::String(s), consumed))
            }
            Codec::FixedArray { element, len } => {
                let (values, consumed) = decode_head_tail(element, *len as usize, data)?;
                Ok((Value::FixedArray(values), consumed))
            }
            Codec::Array { element } => {
                let word = take_word(data, "uint256")?;
                let len = decode_integer(word, 256, false);
                let len = usize_from_bigint(&len, "array length")?;
                let rest = &data[WORD_SIZE..];
                // every element contributes at least one word to the head,
                // so a declared length longer than the remaining input is
                // never satisfiable; reject before allocating `len` slots.
                if len > rest.len() {
                    return Err(Error::TruncatedInput { needed: len, available: rest.len() });
                }
                let (values, inner_consumed) = decode_head_tail(element, len, rest)?;
                Ok((Value::Array(values), WORD_SIZE + inner_consumed))
            }
            Codec::Tuple { children } => {
                let (values, consumed) = decode_tuple(children, data)?;
                Ok((Value::Tuple(values), consumed))
            }
        }
    }
}

fn validate_bits(bits: u32) -> Result<()> {
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(Error::InvalidBits { bits });
    }
    Ok(())
}

fn type_mismatch(codec: &Codec, value: &Value) -> Error {
    Error::InvalidValue {
        type_name: codec.canonical_name(),
        reason: format!("value {value:?} is not compatible"),
    }
}

fn expect_int<'a>(codec: &Codec, value: &'a Value) -> Result<&'a BigInt> {
    value.as_int().ok_or_else(|| type_mismatch(codec, value))
}

fn expect_seq<'a>(codec: &Codec, value: &'a Value, expected_len: Option<usize>) -> Result<&'a [Value]> {
    let items = value.as_seq().ok_or_else(|| type_mismatch(codec, value))?;
    if let Some(n) = expected_len {
        if items.len() != n {
            return Err(Error::InvalidLength {
                type_name: codec.canonical_name(),
                reason: format!("expected {} elements, got {}", n, items.len()),
            });
        }
    }
    Ok(items)
}

fn range_for(bits: u32, signed: bool) -> (BigInt, BigInt) {
    if signed {
        let half = BigInt::from(1) << (bits - 1);
        (-half.clone(), half - 1)
    } else {
        let max = (BigInt::from(1) << bits) - 1;
        (BigInt::zero(), max)
    }
}

fn encode_integer(value: &BigInt, bits: u32, signed: bool, type_name: &str) -> Result<[u8; 32]> {
    validate_bits(bits)?;
    let (min, max) = range_for(bits, signed);
    if *value < min || *value > max {
        return Err(Error::InvalidValue {
            type_name: type_name.to_string(),
            reason: format!("value {value} out of range [{min}, {max}]"),
        });
    }

    let modulus = BigInt::from(1) << 256;
    let repr = if value.sign() == Sign::Minus {
        value + &modulus
    } else {
        value.clone()
    };
    let (_, bytes_be) = repr.to_bytes_be();
    let mut word = [0u8; WORD_SIZE];
    let start = WORD_SIZE - bytes_be.len();
    word[start..].copy_from_slice(&bytes_be);
    Ok(word)
}

fn decode_integer(word: &[u8], bits: u32, signed: bool) -> BigInt {
    let _ = bits;
    let unsigned = BigInt::from_bytes_be(Sign::Plus, word);
    if signed && word[0] & 0x80 != 0 {
        let modulus = BigInt::from(1) << 256;
        unsigned - modulus
    } else {
        unsigned
    }
}

fn usize_from_bigint(value: &BigInt, what: &str) -> Result<usize> {
    value.to_biguint().and_then(|u| {
        let digits = u.to_u64_digits();
        if digits.len() > 1 {
            None
        } else {
            Some(digits.first().copied().unwrap_or(0) as usize)
        }
    }).ok_or_else(|| Error::InvalidLength {
        type_name: what.to_string(),
        reason: format!("{value} does not fit a usize"),
    })
}

fn take_word<'a>(data: &'a [u8], type_name: &str) -> Result<&'a [u8]> {
    if data.len() < WORD_SIZE {
        return Err(Error::TruncatedInput { needed: WORD_SIZE, available: data.len() });
    }
    let _ = type_name;
    Ok(&data[..WORD_SIZE])
}

fn encode_variable_bytes(payload: &[u8]) -> Vec<u8> {
    let len_word = encode_integer(&BigInt::from(payload.len()), 256, false, "uint256")
        .expect("length always fits uint256");
    let mut out = len_word.to_vec();
    out.extend_from_slice(payload);
    out.resize(WORD_SIZE + ceil_words_len(payload.len()), 0);
    out
}

fn decode_variable_bytes(data: &[u8], type_name: &str) -> Result<(Vec<u8>, usize)> {
    let word = take_word(data, type_name)?;
    let len = decode_integer(word, 256, false);
    let len = usize_from_bigint(&len, type_name)?;
    let payload_start = WORD_SIZE;
    let payload_end = payload_start + len;
    if data.len() < payload_end {
        return Err(Error::TruncatedInput { needed: payload_end, available: data.len() });
    }
    let payload = data[payload_start..payload_end].to_vec();
    let consumed = WORD_SIZE + ceil_words_len(len);
    Ok((payload, consumed))
}

/// Shared head/tail encoder for a homogeneous sequence (`FixedArray`/`Array`
/// elements), all of type `element`.
fn encode_head_tail(element: &Codec, items: &[Value]) -> Result<Vec<u8>> {
    let pairs: Vec<(&Codec, &Value)> = items.iter().map(|v| (element, v)).collect();
    encode_head_tail_pairs(&pairs)
}

/// Shared head/tail encoder for a heterogeneous ordered sequence (tuple
/// children, or array elements paired one-for-one with their codec).
///
/// Offsets written into the head are relative to the start of this
/// encoding, i.e. to byte 0 of the returned buffer.
fn encode_head_tail_pairs(pairs: &[(&Codec, &Value)]) -> Result<Vec<u8>> {
    let head_len: usize = pairs
        .iter()
        .map(|(c, _)| c.static_size().unwrap_or(WORD_SIZE))
        .sum();

    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for (codec, value) in pairs {
        if codec.is_dynamic() {
            let offset = head_len + tail.len();
            let offset_word = encode_integer(&BigInt::from(offset), 256, false, "uint256")?;
            head.extend_from_slice(&offset_word);
            tail.extend(codec.encode(value)?);
        } else {
            head.extend(codec.encode(value)?);
        }
    }

    head.extend(tail);
    Ok(head)
}

/// Shared head/tail decoder for a homogeneous sequence of `count` elements
/// of type `element`, starting at the beginning of `data`.
fn decode_head_tail(element: &Codec, count: usize, data: &[u8]) -> Result<(Vec<Value>, usize)> {
    let codecs: Vec<&Codec> = std::iter::repeat(element).take(count).collect();
    decode_head_tail_codecs(&codecs, data)
}

fn decode_tuple(children: &[Codec], data: &[u8]) -> Result<(Vec<Value>, usize)> {
    let codecs: Vec<&Codec> = children.iter().collect();
    decode_head_tail_codecs(&codecs, data)
}

fn decode_head_tail_codecs(codecs: &[&Codec], data: &[u8]) -> Result<(Vec<Value>, usize)> {
    let head_len: usize = codecs.iter().map(|c| c.static_size().unwrap_or(WORD_SIZE)).sum();
    if data.len() < head_len {
        return Err(Error::TruncatedInput { needed: head_len, available: data.len() });
    }

    let mut values = Vec::with_capacity(codecs.len());
    let mut pos = 0usize;
    let mut content_end = head_len;

    for codec in codecs {
        if codec.is_dynamic() {
            let word = take_word(&data[pos..], "offset")?;
            let offset = decode_integer(word, 256, false);
            let offset = usize_from_bigint(&offset, "offset")?;
            if offset > data.len() {
                return Err(Error::InvalidLength {
                    type_name: codec.canonical_name(),
                    reason: format!("offset {offset} exceeds input length {}", data.len()),
                });
            }
            let (value, consumed) = codec.decode(&data[offset..])?;
            values.push(value);
            content_end = content_end.max(offset + consumed);
            pos += WORD_SIZE;
        } else {
            let size = codec.static_size().expect("checked is_dynamic above");
            let (value, consumed) = codec.decode(&data[pos..])?;
            debug_assert_eq!(consumed, size);
            values.push(value);
            pos += size;
        }
    }

    Ok((values, content_end.max(pos)))
}
