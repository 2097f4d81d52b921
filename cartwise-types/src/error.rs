use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::PlatformId;

/// Unified error type for the cartwise workspace.
///
/// Pricing and ranking never fail; this type only covers the edges:
/// reference data validation, store mutations and configuration loading.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CartwiseError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A product, cart entry or platform could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "product milk-500ml".
        what: String,
    },

    /// A product lists more than one price for the same platform.
    #[error("product {product} has more than one price for {platform}")]
    DuplicatePlatformPrice {
        /// Identifier of the offending product.
        product: String,
        /// Platform listed twice.
        platform: PlatformId,
    },

    /// A product lists a negative price.
    #[error("product {product} has a negative price on {platform}")]
    NegativePrice {
        /// Identifier of the offending product.
        product: String,
        /// Platform carrying the negative price.
        platform: PlatformId,
    },

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CartwiseError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Returns true if this error was caused by malformed reference data
    /// rather than by a user action against the cart.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicatePlatformPrice { .. } | Self::NegativePrice { .. } | Self::Config(_)
        )
    }
}

impl From<serde_json::Error> for CartwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
