use abi_codec::{BigInt, Codec, Value};
use proptest::prelude::*;

fn arb_u256() -> impl Strategy<Value = BigInt> {
    any::<u128>().prop_map(BigInt::from)
}

fn arb_i256() -> impl Strategy<Value = BigInt> {
    any::<i128>().prop_map(BigInt::from)
}

proptest! {
    #[test]
    fn uint256_roundtrips(n in arb_u256()) {
        let codec = Codec::integer(256, false).unwrap();
        let value = Value::Int(n);
        let encoded = codec.encode(&value).unwrap();
        let (decoded, consumed) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, 32);
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn int256_roundtrips(n in arb_i256()) {
        let codec = Codec::integer(256, true).unwrap();
        let value = Value::Int(n);
        let encoded = codec.encode(&value).unwrap();
        let (decoded, _) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn bytes_roundtrip(payload in proptest::collection::vec(any::<u8>(), 0..200)) {
        let codec = Codec::Bytes;
        let value = Value::Bytes(payload);
        let encoded = codec.encode(&value).unwrap();
        prop_assert_eq!(encoded.len() % 32, 0);
        let (decoded, consumed) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn string_roundtrip(s in ".*") {
        let codec = Codec::String;
        let value = Value::String(s);
        let encoded = codec.encode(&value).unwrap();
        let (decoded, consumed) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn dynamic_array_of_uint_roundtrip(xs in proptest::collection::vec(any::<u64>(), 0..20)) {
        let codec = Codec::array(Codec::integer(256, false).unwrap());
        let value = Value::Array(xs.into_iter().map(Value::from).collect());
        let encoded = codec.encode(&value).unwrap();
        let (decoded, consumed) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn nested_tuple_roundtrip(a in any::<u32>(), b in ".*", c in any::<bool>()) {
        let codec = Codec::tuple(vec![
            Codec::integer(32, false).unwrap(),
            Codec::String,
            Codec::Bool,
        ]);
        let value = Value::Tuple(vec![Value::from(a), Value::String(b), Value::Bool(c)]);
        let encoded = codec.encode(&value).unwrap();
        let (decoded, consumed) = codec.decode(&encoded).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, value);
    }
}
