use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::hash::ContentHasher;

/// The immutable payload record stored and indexed.
///
/// An `Entry` is never mutated or deleted once committed. Its identity is
/// its [`Address`], computed from the content with a domain-separated hash,
/// so two entries with identical content are the same entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub content: String,
}

impl Entry {
    /// Create a new entry from content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The content-addressed identity of this entry.
    pub fn address(&self) -> Address {
        ContentHasher::ENTRY.hash(self.content.as_bytes())
    }
}
