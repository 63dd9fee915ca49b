//! The mutable set of pack sizes the service is allowed to ship.

use crate::error::PackingError;
use packhub_domain::constants::DEFAULT_PACK_SIZES;
use packhub_domain::packs::PackSize;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Concurrency-safe set of distinct, positive pack sizes.
///
/// A single mutex guards the whole set. It is held only for the in-memory read or
/// update, so snapshots never observe a half-applied mutation.
#[derive(Debug)]
pub struct PackSizeRegistry {
    sizes: Mutex<BTreeSet<PackSize>>,
}

impl Default for PackSizeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PackSizeRegistry {
    /// Registry seeded with [`DEFAULT_PACK_SIZES`].
    #[must_use]
    pub fn new() -> Self {
        let sizes = DEFAULT_PACK_SIZES.iter().copied().filter_map(PackSize::new).collect();
        Self { sizes: Mutex::new(sizes) }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { sizes: Mutex::new(BTreeSet::new()) }
    }

    /// Registry seeded from arbitrary integers, validated as repeated [`add`](Self::add) calls.
    ///
    /// # Errors
    /// [`PackingError::InvalidSize`] for a non-positive or oversized value,
    /// [`PackingError::DuplicateSize`] for a repeated value.
    pub fn with_sizes<I>(sizes: I) -> Result<Self, PackingError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut set = BTreeSet::new();
        for raw in sizes {
            let size = validate(raw)?;
            if !set.insert(size) {
                return Err(PackingError::DuplicateSize { size });
            }
        }
        Ok(Self { sizes: Mutex::new(set) })
    }

    /// Point-in-time copy of the registered sizes, ascending.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PackSize> {
        self.sizes.lock().iter().copied().collect()
    }

    /// Registers a new pack size.
    ///
    /// # Errors
    /// [`PackingError::InvalidSize`] if `size <= 0` or does not fit a pack size,
    /// [`PackingError::DuplicateSize`] if it is already registered.
    pub fn add(&self, size: i64) -> Result<PackSize, PackingError> {
        let size = validate(size)?;

        let len = {
            let mut sizes = self.sizes.lock();
            if !sizes.insert(size) {
                debug!(%size, "Rejected duplicate pack size");
                return Err(PackingError::DuplicateSize { size });
            }
            sizes.len()
        };

        info!(%size, sizes = len, "Pack size added");
        Ok(size)
    }

    /// Unregisters a pack size. Removing the last size is allowed.
    ///
    /// # Errors
    /// [`PackingError::InvalidSize`] if `size <= 0` or does not fit a pack size,
    /// [`PackingError::NotFound`] if it is not registered.
    pub fn remove(&self, size: i64) -> Result<PackSize, PackingError> {
        let size = validate(size)?;

        let len = {
            let mut sizes = self.sizes.lock();
            if !sizes.remove(&size) {
                debug!(%size, "Rejected removal of unknown pack size");
                return Err(PackingError::NotFound { size });
            }
            sizes.len()
        };

        info!(%size, sizes = len, "Pack size removed");
        Ok(size)
    }

    #[must_use]
    pub fn contains(&self, size: i64) -> bool {
        PackSize::try_from(size).is_ok_and(|size| self.sizes.lock().contains(&size))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.lock().is_empty()
    }
}

fn validate(raw: i64) -> Result<PackSize, PackingError> {
    PackSize::try_from(raw).map_err(|value| {
        debug!(value, "Rejected invalid pack size");
        PackingError::invalid_size(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(registry: &PackSizeRegistry) -> Vec<u32> {
        registry.snapshot().into_iter().map(PackSize::get).collect()
    }

    #[test]
    fn new_registry_holds_defaults_in_ascending_order() {
        let registry = PackSizeRegistry::new();
        assert_eq!(sizes(&registry), vec![250, 500, 1000, 2000, 5000]);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn add_then_snapshot_sees_new_size() {
        let registry = PackSizeRegistry::new();
        let added = registry.add(750).unwrap();

        assert_eq!(added.get(), 750);
        assert_eq!(sizes(&registry), vec![250, 500, 750, 1000, 2000, 5000]);
    }

    #[test]
    fn add_rejects_non_positive_sizes() {
        let registry = PackSizeRegistry::new();
        assert!(matches!(registry.add(0), Err(PackingError::InvalidSize { .. })));
        assert!(matches!(registry.add(-10), Err(PackingError::InvalidSize { .. })));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn remove_last_size_leaves_registry_empty() {
        let registry = PackSizeRegistry::with_sizes([42]).unwrap();
        registry.remove(42).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn with_sizes_rejects_duplicates() {
        let err = PackSizeRegistry::with_sizes([250, 500, 250]).unwrap_err();
        assert_eq!(err, PackingError::DuplicateSize { size: PackSize::new(250).unwrap() });
    }

    #[test]
    fn contains_ignores_invalid_values() {
        let registry = PackSizeRegistry::new();
        assert!(registry.contains(1000));
        assert!(!registry.contains(0));
        assert!(!registry.contains(-1000));
    }
}
