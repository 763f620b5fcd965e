//! CLI command implementations.

use crate::AppContext;
use fcaddr_types::{address_hash, Address, Network};
use serde::Serialize;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

/// Decoded view of an address for display.
#[derive(Debug, Serialize)]
struct AddressInfo {
    address: Address,
    network: Network,
    version: u8,
    hash: String,
    bytes: String,
}

impl From<&Address> for AddressInfo {
    fn from(a: &Address) -> Self {
        Self {
            address: *a,
            network: a.network(),
            version: a.version(),
            hash: hex::encode(a.hash()),
            bytes: format!("{:x}", a),
        }
    }
}

fn print_address(ctx: &AppContext, address: &Address) -> Result {
    let info = AddressInfo::from(address);
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Address: {}", info.address);
        println!("Network: {}", info.network);
        println!("Version: {}", info.version);
        println!("Hash:    {}", info.hash);
        println!("Bytes:   {}", info.bytes);
    }
    Ok(())
}

fn parse_hex(s: &str) -> std::result::Result<Vec<u8>, Box<dyn std::error::Error>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}

// ─── Commands ───────────────────────────────────────────────────────────────

pub fn new_address(ctx: &AppContext, hash_hex: &str) -> Result {
    let hash = parse_hex(hash_hex)?;
    let address = Address::new(ctx.network, &hash)?;
    log::debug!("built {:?}", address);
    print_address(ctx, &address)
}

pub fn hash_address(ctx: &AppContext, payload: &str) -> Result {
    let hash = address_hash(payload.as_bytes());
    log::debug!("payload hash: {}", hex::encode(hash));
    let address = Address::from_hash(ctx.network, hash);
    print_address(ctx, &address)
}

pub fn decode_address(ctx: &AppContext, address: &str) -> Result {
    let address = Address::decode(address.trim()).inspect_err(|e| {
        log::warn!("rejected address {:?}: {}", address, e);
    })?;
    log::debug!("decoded {:?}", address);
    print_address(ctx, &address)
}

pub fn from_bytes(ctx: &AppContext, hex_str: &str) -> Result {
    let bytes = parse_hex(hex_str)?;
    let address = Address::from_bytes(&bytes).inspect_err(|e| {
        log::warn!("rejected {} bytes: {}", bytes.len(), e);
    })?;
    print_address(ctx, &address)
}

pub fn validate(ctx: &AppContext, address: &str) -> Result {
    match fcaddr_types::address::validate_address(address.trim()) {
        Ok(()) => {
            if ctx.json {
                println!("{}", serde_json::json!({ "valid": true }));
            } else {
                println!("valid");
            }
            Ok(())
        }
        Err(e) => {
            log::warn!("invalid address {:?}: {}", address, e);
            if ctx.json {
                println!("{}", serde_json::json!({ "valid": false, "error": e.to_string() }));
            }
            Err(e.into())
        }
    }
}
