//! Facade crate for `PackHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `packhub` with the `server` feature.
//! - Call `packhub::init` to build the feature slices; extend it as new slices appear.

pub use packhub_domain as domain;
use packhub_domain::config::ApiConfig;
use packhub_domain::registry::InitializedSlice;
pub use packhub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use packhub_kernel::server::router::system_router;
        pub use packhub_packing::api::router as packing_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use packhub_packing as packing;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "packing",
        #[cfg(feature = "server")]
        "server",
    ];
}

/// Initialize all enabled feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Packing (pack-size registry + allocator)
    slices.push(features::packing::init(&config.packing)?);

    Ok(slices)
}
