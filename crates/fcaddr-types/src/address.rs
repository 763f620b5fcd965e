//! Address entity with its text and binary encodings.
//!
//! Text form: `<prefix><version symbol><32 hash symbols><6 checksum symbols>`,
//! always 41 lowercase characters. Binary form: `[tag][version][20 hash bytes]`.

use crate::bech32::{self, Bech32Error};
use crate::constants::{
    Network, Version, ADDRESS_BYTES_SIZE, ADDRESS_STRING_LENGTH, CHECKSUM_LENGTH, HASH_SIZE,
    HASH_SYMBOLS, HRP_LENGTH,
};
use crate::hash::address_hash;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid length ({actual}, expected {expected})")]
    InvalidLength { expected: usize, actual: usize },

    #[error("mixed case address")]
    MixedCase,

    #[error(transparent)]
    Bech32(#[from] Bech32Error),

    #[error("invalid character human-readable part (unknown prefix \"{0}\")")]
    UnknownPrefix(String),

    #[error("unknown network tag {0}")]
    UnknownNetwork(u8),

    #[error("unknown version {0}")]
    UnknownVersion(u8),

    #[error("invalid bytes: expected {expected} bytes, got {actual}")]
    InvalidBytes { expected: usize, actual: usize },

    #[error("hash must be {expected} bytes, got {actual}")]
    InvalidHashLength { expected: usize, actual: usize },
}

/// A network-tagged, versioned 20-byte address hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    network: Network,
    version: Version,
    hash: [u8; HASH_SIZE],
}

impl Address {
    /// Build an address from a hash that is already known to be 20 bytes.
    pub fn from_hash(network: Network, hash: [u8; HASH_SIZE]) -> Self {
        Self {
            network,
            version: Version::V0,
            hash,
        }
    }

    /// Build an address, rejecting hashes that are not exactly 20 bytes.
    pub fn new(network: Network, hash: &[u8]) -> Result<Self, AddressError> {
        let hash: [u8; HASH_SIZE] = hash.try_into().map_err(|_| AddressError::InvalidHashLength {
            expected: HASH_SIZE,
            actual: hash.len(),
        })?;
        Ok(Self::from_hash(network, hash))
    }

    pub fn mainnet(hash: &[u8]) -> Result<Self, AddressError> {
        Self::new(Network::Mainnet, hash)
    }

    pub fn testnet(hash: &[u8]) -> Result<Self, AddressError> {
        Self::new(Network::Testnet, hash)
    }

    /// Hash `payload` with [`address_hash`] and wrap the result.
    pub fn from_payload(network: Network, payload: &[u8]) -> Self {
        Self::from_hash(network, address_hash(payload))
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn version(&self) -> u8 {
        self.version.as_u8()
    }

    pub fn hash(&self) -> &[u8; HASH_SIZE] {
        &self.hash
    }

    /// Encode to the canonical lowercase text form.
    pub fn encode(&self) -> String {
        let mut data = Vec::with_capacity(1 + HASH_SYMBOLS);
        data.push(self.version.as_u8());
        data.extend(bech32::to_5bit(&self.hash));
        bech32::encode(self.network.prefix(), &data)
    }

    /// Encode to the binary form: tag, version, hash.
    pub fn to_bytes(&self) -> [u8; ADDRESS_BYTES_SIZE] {
        let mut out = [0u8; ADDRESS_BYTES_SIZE];
        out[0] = self.network.tag();
        out[1] = self.version.as_u8();
        out[2..].copy_from_slice(&self.hash);
        out
    }

    /// Decode the text form. See [`parse_address`].
    pub fn decode(address: &str) -> Result<Self, AddressError> {
        parse_address(address)
    }

    /// Decode the binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != ADDRESS_BYTES_SIZE {
            return Err(AddressError::InvalidBytes {
                expected: ADDRESS_BYTES_SIZE,
                actual: bytes.len(),
            });
        }

        let network = Network::from_tag(bytes[0]).ok_or(AddressError::UnknownNetwork(bytes[0]))?;
        let version = Version::from_u8(bytes[1]).ok_or(AddressError::UnknownVersion(bytes[1]))?;

        let mut hash = [0u8; HASH_SIZE];
        hash.copy_from_slice(&bytes[2..]);

        Ok(Self {
            network,
            version,
            hash,
        })
    }
}

/// Parse and validate an address string.
///
/// Checks run from the coarsest to the most specific: length, case, prefix,
/// alphabet, checksum, version. Uppercase input is accepted and normalised;
/// mixed case never is.
pub fn parse_address(address: &str) -> Result<Address, AddressError> {
    if address.len() != ADDRESS_STRING_LENGTH {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_STRING_LENGTH,
            actual: address.len(),
        });
    }

    let has_lower = address.bytes().any(|c| c.is_ascii_lowercase());
    let has_upper = address.bytes().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }

    let lowered = address.to_ascii_lowercase();
    let (hrp_bytes, payload) = lowered.as_bytes().split_at(HRP_LENGTH);
    bech32::validate_hrp(hrp_bytes)?;

    // The prefix bytes are printable ASCII, so this is a char boundary.
    let hrp = &lowered[..HRP_LENGTH];
    let network =
        Network::from_prefix(hrp).ok_or_else(|| AddressError::UnknownPrefix(hrp.to_string()))?;

    let symbols = payload
        .iter()
        .enumerate()
        .map(|(i, &c)| bech32::char_to_symbol(c, HRP_LENGTH + i))
        .collect::<Result<Vec<u8>, _>>()?;

    if !bech32::verify_checksum(hrp, &symbols) {
        return Err(Bech32Error::InvalidChecksum.into());
    }

    let data = &symbols[..symbols.len() - CHECKSUM_LENGTH];
    let version = Version::from_u8(data[0]).ok_or(AddressError::UnknownVersion(data[0]))?;

    let hash_bytes = bech32::from_5bit(&data[1..])?;
    let hash: [u8; HASH_SIZE] = hash_bytes.as_slice().try_into().map_err(|_| {
        AddressError::InvalidHashLength {
            expected: HASH_SIZE,
            actual: hash_bytes.len(),
        }
    })?;

    Ok(Address {
        network,
        version,
        hash,
    })
}

/// Validate an address string, discarding the decoded value.
pub fn validate_address(address: &str) -> Result<(), AddressError> {
    parse_address(address).map(|_| ())
}

/// Validate an address string.
pub fn is_valid_address(address: &str) -> bool {
    parse_address(address).is_ok()
}

/// Describe an address in human-readable form.
pub fn describe_address(address: &str) -> String {
    match parse_address(address) {
        Ok(parsed) => {
            let network = match parsed.network() {
                Network::Mainnet => "Mainnet",
                Network::Testnet => "Testnet",
            };
            format!(
                "{} address v{} (hash: {})",
                network,
                parsed.version(),
                hex::encode(parsed.hash())
            )
        }
        Err(e) => format!("Invalid address: {}", e),
    }
}

// ─── Formatting ─────────────────────────────────────────────────────────────

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} - {} - {}]",
            self.network.prefix(),
            self.version(),
            hex::encode(self.hash)
        )
    }
}

impl std::fmt::LowerHex for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl std::fmt::UpperHex for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode_upper(self.to_bytes()))
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

// ─── Serde ──────────────────────────────────────────────────────────────────

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(serde::de::Error::custom)
    }
}
