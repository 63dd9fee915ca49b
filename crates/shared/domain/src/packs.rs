//! Pack sizes and allocation plans.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::num::NonZeroU32;

/// Number of items in one shippable pack. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackSize(NonZeroU32);

impl PackSize {
    /// Returns `None` for zero.
    #[must_use]
    pub const fn new(items: u32) -> Option<Self> {
        match NonZeroU32::new(items) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Rejects non-positive values and values that do not fit in `u32`.
impl TryFrom<i64> for PackSize {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value).ok().and_then(Self::new).ok_or(value)
    }
}

impl From<PackSize> for u32 {
    fn from(size: PackSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pack size to pack count, one entry per size that took part in the allocation.
///
/// Serializes as a JSON object keyed by the pack size, e.g. `{"250":1,"500":0}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationPlan(BTreeMap<PackSize, u64>);

impl AllocationPlan {
    /// A plan with every given size present and set to zero packs.
    pub fn zeroed(sizes: impl IntoIterator<Item = PackSize>) -> Self {
        Self(sizes.into_iter().map(|size| (size, 0)).collect())
    }

    /// Sets the pack count for `size`, inserting the entry if needed.
    pub fn set(&mut self, size: PackSize, count: u64) {
        self.0.insert(size, count);
    }

    /// Pack count for `size`; `None` if the size is not part of the plan.
    #[must_use]
    pub fn count(&self, size: PackSize) -> Option<u64> {
        self.0.get(&size).copied()
    }

    /// Total number of items shipped by this plan.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.0.iter().map(|(size, count)| u64::from(size.get()) * count).sum()
    }

    /// Total number of packs shipped by this plan.
    #[must_use]
    pub fn total_packs(&self) -> u64 {
        self.0.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in ascending pack-size order.
    pub fn iter(&self) -> btree_map::Iter<'_, PackSize, u64> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = (&'a PackSize, &'a u64);
    type IntoIter = btree_map::Iter<'a, PackSize, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
