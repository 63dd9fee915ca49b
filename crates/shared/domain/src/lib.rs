//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or locking. Just data and simple helpers.

pub mod config;
pub mod constants;
pub mod packs;
pub mod registry;
