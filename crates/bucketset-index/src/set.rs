use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use bucketset_types::Address;

/// Insertion-ordered, duplicate-free, append-only collection of addresses.
///
/// `AddressSet` is the unit of index state. It only ever grows: there is no
/// remove operation within scope. Inserts are idempotent, and [`merge`]
/// implements set union, so two replicas applying the same appends in any
/// order converge to the same membership. The iteration order is the local
/// replica's arrival order; only membership is replicated state.
///
/// [`merge`]: AddressSet::merge
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Address>", into = "Vec<Address>")]
pub struct AddressSet {
    order: Vec<Address>,
    seen: HashSet<Address>,
}

impl AddressSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an address. Returns `false` if it was already present.
    pub fn insert(&mut self, address: Address) -> bool {
        if self.seen.insert(address) {
            self.order.push(address);
            true
        } else {
            false
        }
    }

    /// Returns `true` if the address is a member.
    pub fn contains(&self, address: &Address) -> bool {
        self.seen.contains(address)
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the set holds no addresses.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate addresses in local insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.order.iter()
    }

    /// The addresses as an owned vector, in local insertion order.
    pub fn to_vec(&self) -> Vec<Address> {
        self.order.clone()
    }

    /// Merge another set into this one (set union).
    ///
    /// Addresses unknown to this replica are appended in the other set's
    /// order. Membership after a sequence of merges is independent of the
    /// merge order: union is commutative and idempotent.
    pub fn merge(&mut self, other: &AddressSet) {
        for address in other.iter() {
            self.insert(*address);
        }
    }
}

impl From<Vec<Address>> for AddressSet {
    fn from(addresses: Vec<Address>) -> Self {
        let mut set = Self::new();
        for address in addresses {
            set.insert(address);
        }
        set
    }
}

impl From<AddressSet> for Vec<Address> {
    fn from(set: AddressSet) -> Self {
        set.order
    }
}

impl FromIterator<Address> for AddressSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        let mut set = Self::new();
        for address in iter {
            set.insert(address);
        }
        set
    }
}
