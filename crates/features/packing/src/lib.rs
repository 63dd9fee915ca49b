//! Packing feature slice: the pack-size registry and the pack allocator.
//!
//! The two halves share nothing but data. Callers take a [`PackSizeRegistry::snapshot`]
//! and hand it to [`allocate`]; mutations only ever go to the registry.
//!
//! ```rust
//! use packhub_packing::{PackSizeRegistry, allocate};
//!
//! let registry = PackSizeRegistry::new();
//! let plan = allocate(&registry.snapshot(), 12_001).unwrap();
//! assert_eq!(plan.total_items(), 12_250);
//! assert_eq!(plan.total_packs(), 4);
//! ```

mod allocator;
#[cfg(feature = "server")]
pub mod api;
mod error;
mod registry;

pub use crate::allocator::allocate;
pub use crate::error::PackingError;
pub use crate::registry::PackSizeRegistry;

use packhub_domain::config::PackingConfig;
use packhub_domain::packs::AllocationPlan;
use packhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;

/// Packing feature state: owns the registry for the lifetime of the server.
#[derive(Debug, Default)]
pub struct Packing {
    registry: PackSizeRegistry,
}

impl Packing {
    #[must_use]
    pub const fn new(registry: PackSizeRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &PackSizeRegistry {
        &self.registry
    }

    /// Allocates against a fresh snapshot; the registry lock is released before allocating.
    ///
    /// # Errors
    /// [`PackingError::EmptySizeSet`] if every size has been removed.
    pub fn plan(&self, item_count: i64) -> Result<AllocationPlan, PackingError> {
        let sizes = self.registry.snapshot();
        allocate(&sizes, item_count)
    }
}

impl FeatureSlice for Packing {
    fn name(&self) -> &'static str {
        "packing"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the packing feature from configuration.
///
/// # Errors
/// Returns an error if the configured default sizes contain a non-positive,
/// oversized or repeated value.
pub fn init(config: &PackingConfig) -> Result<InitializedSlice, PackingError> {
    let registry = PackSizeRegistry::with_sizes(config.default_sizes.iter().copied())?;
    tracing::info!(sizes = ?registry.snapshot(), "Packing slice initialized");

    Ok(InitializedSlice::new(Packing::new(registry)))
}
