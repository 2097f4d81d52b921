//! Cartwise-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod platform;
mod product;

pub use config::{ProductSort, ShopConfig, UnavailableOrder};
pub use error::CartwiseError;
pub use platform::{Platform, PlatformId};
pub use product::{PlatformPrice, Product, ProductId};

pub use rust_decimal::Decimal;
