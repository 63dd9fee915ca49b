//! HTTP plumbing shared by every feature slice.

mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, method_not_allowed};
pub use health::HealthResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
