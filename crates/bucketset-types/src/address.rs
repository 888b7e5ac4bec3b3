use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Content-addressed identifier for a stored entry.
///
/// An `Address` is the BLAKE3 hash of an entry's content. Identical content
/// always produces the same `Address`, making entries deduplicatable and
/// verifiable. The address is the sole key for point lookups; it is never
/// assigned externally.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    /// Compute an `Address` from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create an `Address` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.short_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 32] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_is_deterministic() {
        let data = b"hello world";
        let a1 = Address::from_bytes(data);
        let a2 = Address::from_bytes(data);
        assert_eq!(a1, a2);
    }

    #[test]
    fn different_data_produces_different_addresses() {
        let a1 = Address::from_bytes(b"hello");
        let a2 = Address::from_bytes(b"world");
        assert_ne!(a1, a2);
    }

    #[test]
    fn hex_roundtrip() {
        let addr = Address::from_bytes(b"test");
        let hex = addr.to_hex();
        let parsed = Address::from_hex(&hex).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(matches!(
            Address::from_hex("not hex"),
            Err(TypeError::InvalidHex(_))
        ));
        assert!(matches!(
            Address::from_hex("abcd"),
            Err(TypeError::InvalidLength {
                expected: 32,
                actual: 2
            })
        ));
    }

    #[test]
    fn short_hex_is_8_chars() {
        let addr = Address::from_bytes(b"test");
        assert_eq!(addr.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let addr = Address::from_bytes(b"test");
        let display = format!("{addr}");
        assert_eq!(display.len(), 64);
        assert_eq!(display, addr.to_hex());
    }

    #[test]
    fn serde_roundtrip() {
        let addr = Address::from_bytes(b"serde test");
        let json = serde_json::to_string(&addr).unwrap();
        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn ordering_is_consistent() {
        let a1 = Address::from_hash([0; 32]);
        let a2 = Address::from_hash([1; 32]);
        assert!(a1 < a2);
    }
}
