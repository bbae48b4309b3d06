//! Core types for Laced.
//!
//! This module provides the domain vocabulary shared by the state engines.

pub mod id;
pub mod money;
pub mod product;

pub use id::{LineItemKey, ProductId, UNKNOWN_PRODUCT_ID};
pub use money::{PriceParseError, format_usd, parse_price};
pub use product::{
    FALLBACK_CATEGORY, FALLBACK_DESCRIPTION, FALLBACK_IMAGE, FALLBACK_SIZE, FALLBACK_TITLE,
    PRICE_UNAVAILABLE, ProductRef, RawPrice,
};
