use abi_codec::Value;

const ERC20_LIKE_ABI: &str = r#"[
    {
        "type": "function",
        "name": "transfer",
        "stateMutability": "nonpayable",
        "inputs": [
            {"name": "to", "type": "address"},
            {"name": "amount", "type": "uint256"}
        ],
        "outputs": [
            {"name": "", "type": "bool"}
        ]
    },
    {
        "type": "constructor",
        "inputs": [
            {"name": "initialSupply", "type": "uint256"}
        ]
    }
]"#;

#[test]
fn load_encode_call_decode_return_roundtrip() {
    let contract = abi_schema::load(ERC20_LIKE_ABI.as_bytes()).unwrap();

    let descriptor = contract
        .lookup_by_signature("transfer(address,uint256)")
        .expect("transfer registered");

    let args = Value::Tuple(vec![Value::from(0u8), Value::from(1_000_000u64)]);
    let call = descriptor.encode_call(&args).unwrap();
    assert_eq!(&call[..4], descriptor.selector.as_bytes());

    let looked_up_by_selector = contract
        .lookup_by_selector(&descriptor.selector.to_hex())
        .unwrap();
    assert_eq!(looked_up_by_selector.signature, descriptor.signature);

    let return_data = descriptor.outputs.encode(&Value::Tuple(vec![Value::Bool(true)])).unwrap();
    let (decoded, consumed) = descriptor.decode_return(&return_data).unwrap();
    assert_eq!(consumed, return_data.len());
    assert_eq!(decoded, Value::Tuple(vec![Value::Bool(true)]));
}

#[test]
fn constructor_has_no_selector_collision() {
    let contract = abi_schema::load(ERC20_LIKE_ABI.as_bytes()).unwrap();
    let constructor = contract.constructor().expect("constructor registered");
    assert_eq!(constructor.inputs.canonical_name(), "(uint256)");
}

#[test]
fn unknown_selector_is_absent() {
    let contract = abi_schema::load(ERC20_LIKE_ABI.as_bytes()).unwrap();
    assert!(contract.lookup_by_selector("deadbeef").is_none());
}
