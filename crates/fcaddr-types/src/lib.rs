//! Core address types.
//!
//! This crate provides a network-tagged, versioned 20-byte address and its two
//! encodings: a 41-character checksummed text form (Bech32 alphabet, BCH
//! checksum bound to the network prefix) and a 22-byte binary form.

pub mod address;
pub mod bech32;
pub mod constants;
pub mod hash;

pub use address::{parse_address, Address, AddressError};
pub use constants::{Network, Version, ADDRESS_VERSION};
pub use hash::address_hash;
