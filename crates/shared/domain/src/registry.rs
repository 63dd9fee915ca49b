//! Type-erased storage for feature slices.
//!
//! Each feature crate builds its own state at startup and hands it to the HTTP layer
//! as an [`InitializedSlice`]; handlers look it up again by concrete type.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// State owned by one feature, shared by every request handler.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Short human-readable name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Upcast used for downcasting back to the concrete slice.
    fn as_any(&self) -> &dyn Any;
}

/// A feature slice ready to be registered in the API state.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: state.name(), state: Box::new(state) }
    }

    /// Borrows the slice as `T` if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
