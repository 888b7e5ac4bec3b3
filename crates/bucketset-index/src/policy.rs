use bucketset_types::{BucketKey, Entry};

/// Bucket for entries whose content is empty.
///
/// The derivation rule must be total over the content domain, so empty
/// content maps to this reserved sentinel instead of failing.
pub const EMPTY_CONTENT_BUCKET: &str = "\0";

/// Bucket key derivation rule.
///
/// Implementations must be pure, total, and deterministic: the same content
/// always derives the same key, on every node, with no side effects. This
/// is what lets any writer place an entry and any reader find it without
/// coordination.
pub trait BucketPolicy: Send + Sync {
    /// Derive the bucket key for an entry.
    fn derive(&self, entry: &Entry) -> BucketKey;
}

/// Buckets entries by the first character of their content, lower-cased.
///
/// Cheap and low-cardinality: related entries cluster (everything starting
/// with `s` shares a bucket) while no single bucket accumulates the whole
/// store. Empty content lands in [`EMPTY_CONTENT_BUCKET`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstCharPolicy;

impl BucketPolicy for FirstCharPolicy {
    fn derive(&self, entry: &Entry) -> BucketKey {
        match entry.content.chars().next() {
            Some(c) => BucketKey::new(c.to_lowercase().collect::<String>()),
            None => BucketKey::new(EMPTY_CONTENT_BUCKET),
        }
    }
}

/// Buckets entries by a bit prefix of their content address.
///
/// The low `prefix_bits` bits of the leading four digest bytes select the
/// bucket, giving a uniform spread over at most `2^prefix_bits` buckets.
/// Bytes are read little-endian so the assignment is identical on every
/// platform. The bucket id is the masked value stringified.
#[derive(Clone, Copy, Debug)]
pub struct HashPrefixPolicy {
    prefix_bits: u32,
}

impl HashPrefixPolicy {
    /// Create a policy using the low `prefix_bits` bits of the address.
    /// Values above 32 are clamped to 32.
    pub fn new(prefix_bits: u32) -> Self {
        Self {
            prefix_bits: prefix_bits.min(32),
        }
    }

    /// The number of prefix bits in use.
    pub fn prefix_bits(&self) -> u32 {
        self.prefix_bits
    }

    fn mask(&self) -> u32 {
        if self.prefix_bits == 32 {
            u32::MAX
        } else {
            (1u32 << self.prefix_bits) - 1
        }
    }
}

impl BucketPolicy for HashPrefixPolicy {
    fn derive(&self, entry: &Entry) -> BucketKey {
        let digest = entry.address();
        let bytes = digest.as_bytes();
        let id = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) & self.mask();
        BucketKey::new(id.to_string())
    }
}
