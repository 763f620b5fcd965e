//! Network tags, address version and fixed encoding sizes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Network Types
// =============================================================================

/// Network an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

/// Network entry: the binary tag byte and its human-readable prefix.
#[derive(Debug, Clone, Copy)]
pub struct NetworkInfo {
    pub tag: u8,
    pub prefix: &'static str,
    pub network: Network,
}

/// Every supported network. Tags and prefixes are both unique.
pub static ALL_NETWORKS: [NetworkInfo; 2] = [
    NetworkInfo { tag: 0, prefix: "fc", network: Network::Mainnet },
    NetworkInfo { tag: 1, prefix: "tf", network: Network::Testnet },
];

impl Network {
    fn info(self) -> &'static NetworkInfo {
        match self {
            Self::Mainnet => &ALL_NETWORKS[0],
            Self::Testnet => &ALL_NETWORKS[1],
        }
    }

    /// One-byte tag used in the binary form.
    pub fn tag(self) -> u8 {
        self.info().tag
    }

    /// Two-character human-readable prefix used in the text form.
    pub fn prefix(self) -> &'static str {
        self.info().prefix
    }

    /// Look up a network by its binary tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        ALL_NETWORKS.iter().find(|n| n.tag == tag).map(|n| n.network)
    }

    /// Look up a network by its (lowercase) human-readable prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        ALL_NETWORKS.iter().find(|n| n.prefix == prefix).map(|n| n.network)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

// =============================================================================
// Address Version
// =============================================================================

/// Address format revision.
///
/// The text form stores the version as a single 5-bit symbol, so any future
/// revision must stay below 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Version {
    V0 = 0,
}

/// The only address version currently produced and accepted.
pub const ADDRESS_VERSION: u8 = Version::V0 as u8;

impl Version {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::V0),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// Sizes
// =============================================================================

/// Size of the address hash in bytes.
pub const HASH_SIZE: usize = 20;

/// Size of the binary form: network tag + version + hash.
pub const ADDRESS_BYTES_SIZE: usize = 2 + HASH_SIZE;

/// Length of the human-readable prefix.
pub const HRP_LENGTH: usize = 2;

/// Number of checksum symbols appended to the text form.
pub const CHECKSUM_LENGTH: usize = 6;

/// Number of 5-bit symbols needed for the hash (160 bits, no padding).
pub const HASH_SYMBOLS: usize = (HASH_SIZE * 8 + 4) / 5;

/// Length of the text form: prefix + version symbol + hash symbols + checksum.
pub const ADDRESS_STRING_LENGTH: usize = HRP_LENGTH + 1 + HASH_SYMBOLS + CHECKSUM_LENGTH;
