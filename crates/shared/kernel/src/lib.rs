//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading plus the HTTP state, error and
//! system routes every feature slice plugs into.
//!
//! ## Config loading
//! ```rust,no_run
//! use packhub_kernel::config::load_config;
//! use packhub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use packhub_domain as domain;
