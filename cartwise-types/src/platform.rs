use core::fmt;
use serde::{Deserialize, Serialize};

/// Identity of a delivery platform.
///
/// The set is fixed and small; it doubles as the key of a product's price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum PlatformId {
    /// Blinkit quick commerce.
    Blinkit,
    /// Zepto quick commerce.
    Zepto,
    /// Swiggy Instamart.
    Instamart,
    /// BigBasket.
    BigBasket,
    /// JioMart.
    JioMart,
}

impl PlatformId {
    /// Every known platform, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Blinkit,
        Self::Zepto,
        Self::Instamart,
        Self::BigBasket,
        Self::JioMart,
    ];

    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blinkit => "blinkit",
            Self::Zepto => "zepto",
            Self::Instamart => "instamart",
            Self::BigBasket => "big-basket",
            Self::JioMart => "jio-mart",
        }
    }

    /// Human-readable name used when no display name is configured.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Blinkit => "Blinkit",
            Self::Zepto => "Zepto",
            Self::Instamart => "Swiggy Instamart",
            Self::BigBasket => "BigBasket",
            Self::JioMart => "JioMart",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A delivery platform as offered for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    /// Platform identity; matched against product price tuples.
    pub id: PlatformId,
    /// Display name.
    pub name: String,
}

impl Platform {
    /// Create a platform with an explicit display name.
    pub fn new(id: PlatformId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Every known platform with its default display name.
    #[must_use]
    pub fn all() -> Vec<Self> {
        PlatformId::ALL.into_iter().map(Self::from).collect()
    }
}

impl From<PlatformId> for Platform {
    fn from(id: PlatformId) -> Self {
        Self::new(id, id.default_name())
    }
}
