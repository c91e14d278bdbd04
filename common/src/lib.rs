//! KundaPay Common Types
//!
//! This crate contains the shared domain vocabulary used across the KundaPay
//! transfer engine: currencies, countries, transfer routes, payment and
//! receiving methods, and the `Money` value type.

pub mod currency;
pub mod methods;
pub mod money;
pub mod route;

pub use currency::*;
pub use methods::*;
pub use money::*;
pub use route::*;
