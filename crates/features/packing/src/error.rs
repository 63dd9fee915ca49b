use packhub_domain::packs::PackSize;
use std::borrow::Cow;

/// A specialized [`PackingError`] enum of this crate.
///
/// Every variant leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackingError {
    /// Non-numeric, non-positive or out-of-range pack size.
    #[error("Invalid pack size '{input}': expected a positive integer")]
    InvalidSize { input: Cow<'static, str> },

    /// Add of a size that is already registered.
    #[error("Pack size {size} already exists")]
    DuplicateSize { size: PackSize },

    /// Remove of a size that is not registered.
    #[error("Pack size {size} not found")]
    NotFound { size: PackSize },

    /// A required request parameter was absent.
    #[error("Missing '{name}' parameter")]
    MissingParameter { name: &'static str },

    /// A request parameter was present but not a decimal integer.
    #[error("Invalid '{name}' parameter: '{value}'")]
    InvalidParameter { name: &'static str, value: Cow<'static, str> },

    /// Allocation was requested while no pack sizes are registered.
    #[error("No pack sizes are registered")]
    EmptySizeSet,
}

impl PackingError {
    pub(crate) fn invalid_size(input: impl ToString) -> Self {
        Self::InvalidSize { input: Cow::Owned(input.to_string()) }
    }
}
