//! Address encoding vectors and decode-failure tables.
//!
//! Hashes are `address_hash("foo-<i>")`, matching the published vectors.

use fcaddr_types::address::{is_valid_address, validate_address};
use fcaddr_types::constants::{ADDRESS_BYTES_SIZE, ADDRESS_STRING_LENGTH, HASH_SIZE};
use fcaddr_types::{address_hash, parse_address, Address, AddressError, Network, ADDRESS_VERSION};

fn test_hash(i: usize) -> [u8; HASH_SIZE] {
    address_hash(format!("foo-{}", i).as_bytes())
}

/// Testnet address over the hash of `payload`.
fn make_test_address(payload: &str) -> Address {
    Address::from_payload(Network::Testnet, payload.as_bytes())
}

#[test]
fn test_valid_addresses() {
    let cases = [
        (Address::mainnet(&test_hash(0)).unwrap(), "fcqeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9"),
        (Address::mainnet(&test_hash(1)).unwrap(), "fcqwfptkd8ax6xqg7tvycd9wkfyg748fqjwnlt9a0"),
        (Address::testnet(&test_hash(0)).unwrap(), "tfqeutlg2sl9daptdcfm8sw7m3xzd0tqhz8g9f95l"),
        (Address::testnet(&test_hash(1)).unwrap(), "tfqwfptkd8ax6xqg7tvycd9wkfyg748fqjwj03z34"),
    ];

    for (input, output) in cases {
        assert_eq!(input.to_string(), output);
        assert_eq!(input.to_string().len(), ADDRESS_STRING_LENGTH);

        let decoded = parse_address(output).unwrap();
        assert_eq!(decoded, input, "text roundtrip: {}", output);
        assert!(validate_address(output).is_ok());
        assert!(is_valid_address(&decoded.to_string()));

        let bytes = input.to_bytes();
        assert_eq!(bytes.len(), ADDRESS_BYTES_SIZE);
        let from_bytes = Address::from_bytes(&bytes).unwrap();
        assert_eq!(from_bytes, input, "bytes roundtrip: {}", output);
    }
}

#[test]
fn test_prefix_selects_network() {
    let mainnet = parse_address("fcqeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9").unwrap();
    let testnet = parse_address("tfqeutlg2sl9daptdcfm8sw7m3xzd0tqhz8g9f95l").unwrap();
    assert_eq!(mainnet.network(), Network::Mainnet);
    assert_eq!(testnet.network(), Network::Testnet);
    assert_eq!(mainnet.hash(), testnet.hash());
    assert_ne!(mainnet, testnet);
}

#[test]
fn test_swapped_prefix_breaks_checksum() {
    let swapped = "tfqeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9";
    let err = parse_address(swapped).unwrap_err();
    assert!(err.to_string().contains("invalid checksum"), "{}", err);
}

#[test]
fn test_uppercase_accepted() {
    let canonical = "fcqeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9";
    let upper = canonical.to_ascii_uppercase();
    assert_eq!(parse_address(&upper).unwrap(), parse_address(canonical).unwrap());
    assert_eq!(parse_address(&upper).unwrap().to_string(), canonical);
}

#[test]
fn test_invalid_address_creation() {
    let cases = [
        ("f", "invalid length"),
        ("fcqeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9x", "invalid length"),
        ("fcQeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9", "mixed case"),
        ("f qeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9", "invalid character human-readable part"),
        ("fcqéutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc", "non alphanumeric character"),
        ("fc1eutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9", "invalid character"),
        ("fcbeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9", "invalid character"),
        ("fcieutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9", "invalid character"),
        ("fcoeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9", "invalid character"),
        ("fcreutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9", "invalid checksum"),
    ];

    for (input, expected) in cases {
        let err = parse_address(input).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "input: {} error: {} expected: {}",
            input,
            err,
            expected
        );

        let err = Address::from_bytes(input.as_bytes()).unwrap_err();
        assert!(matches!(err, AddressError::InvalidBytes { .. }), "input: {}", input);
        assert!(err.to_string().contains("invalid bytes"));
    }
}

#[test]
fn test_specific_error_variants() {
    assert_eq!(
        parse_address("f"),
        Err(AddressError::InvalidLength { expected: 41, actual: 1 })
    );
    assert_eq!(
        parse_address("fcQeutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9"),
        Err(AddressError::MixedCase)
    );
}

#[test]
fn test_from_bytes_supports_only_known_networks() {
    let mut bytes = [0u8; ADDRESS_BYTES_SIZE];
    bytes[0] = Network::Testnet.tag() + 1;
    bytes[1] = ADDRESS_VERSION;
    assert_eq!(
        Address::from_bytes(&bytes),
        Err(AddressError::UnknownNetwork(Network::Testnet.tag() + 1))
    );
}

#[test]
fn test_from_bytes_supports_only_current_version() {
    let mut bytes = [0u8; ADDRESS_BYTES_SIZE];
    bytes[0] = Network::Testnet.tag();
    bytes[1] = ADDRESS_VERSION + 1;
    assert_eq!(
        Address::from_bytes(&bytes),
        Err(AddressError::UnknownVersion(ADDRESS_VERSION + 1))
    );
}

#[test]
fn test_address_format() {
    let a = make_test_address("hello");
    assert_eq!(format!(" {}", a), " tfqk4f3cuph7pkf7228zv4x5aeq9scgazfewaq2he");
    assert_eq!(format!("{:X}", a), "0100B5531C7037F06C9F2947132A6A77202C308E8939");
    assert_eq!(format!("{:?}", a), "[tf - 0 - b5531c7037f06c9f2947132a6a77202c308e8939]");
}

#[test]
fn test_address_json() {
    let a = make_test_address("first");

    let out = serde_json::to_string(&a).unwrap();
    assert_eq!(out, format!("\"{}\"", a));

    let b: Address = serde_json::from_str(&out).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_address_json_errors_propagate() {
    let err = serde_json::from_str::<Address>("\"fcreutlg2sl9daptdcfm8sw7m3xzd0tqhz8f4nzc9\"")
        .unwrap_err();
    assert!(err.to_string().contains("invalid checksum"), "{}", err);

    let err = serde_json::from_str::<Address>("\"f\"").unwrap_err();
    assert!(err.to_string().contains("invalid length"), "{}", err);

    assert!(serde_json::from_str::<Address>("42").is_err());
}

#[test]
fn test_address_json_embedded() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Payment {
        to: Address,
        amount: u64,
    }

    let payment = Payment {
        to: make_test_address("second"),
        amount: 7,
    };
    let json = serde_json::to_string(&payment).unwrap();
    assert_eq!(json, format!("{{\"to\":\"{}\",\"amount\":7}}", payment.to));
    assert_eq!(serde_json::from_str::<Payment>(&json).unwrap(), payment);
}
