//! Address hash: blake2b with a 160-bit digest.

use crate::constants::HASH_SIZE;

/// Hash an arbitrary payload (typically a public key) into an address hash.
pub fn address_hash(payload: &[u8]) -> [u8; HASH_SIZE] {
    let digest = blake2b_simd::Params::new()
        .hash_length(HASH_SIZE)
        .hash(payload);
    let mut hash = [0u8; HASH_SIZE];
    hash.copy_from_slice(digest.as_bytes());
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_hash_vector() {
        assert_eq!(
            hex::encode(address_hash(b"hello")),
            "b5531c7037f06c9f2947132a6a77202c308e8939"
        );
    }

    #[test]
    fn test_address_hash_distinct() {
        assert_ne!(address_hash(b"foo-0"), address_hash(b"foo-1"));
        assert_eq!(address_hash(b"foo-0"), address_hash(b"foo-0"));
    }
}
