//! The untrusted product record accepted from the catalog.
//!
//! Catalog lookups return loosely-shaped JSON: any field may be missing and
//! the price may be a pre-formatted string or a bare number. [`ProductRef`]
//! is the only type that models that shape; everything downstream works with
//! values already resolved through the fallback rules here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{format_usd, parse_price};

/// Title used when the catalog record has none.
pub const FALLBACK_TITLE: &str = "Nike Shoes";
/// Category used when the catalog record has none.
pub const FALLBACK_CATEGORY: &str = "Sneakers";
/// Description used when the catalog record has none.
pub const FALLBACK_DESCRIPTION: &str = "Nike product.";
/// Size variant used when the caller picks none.
pub const FALLBACK_SIZE: &str = "EU 45.5";
/// Placeholder image used when the catalog record has none.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1170&auto=format&fit=crop";
/// Display label used when no price is available in any form.
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

/// A price as it arrives from the catalog: either a display string or a
/// bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// A pre-formatted display string, e.g. `"$120.00"` or `"1.234,56"`.
    Text(String),
    /// A plain numeric amount.
    Number(Decimal),
}

impl RawPrice {
    /// The numeric amount, if one can be recovered.
    ///
    /// Numbers pass through; strings go through the price parser. A string
    /// that cannot be normalized yields `None`.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(amount) => Some(*amount),
            Self::Text(text) => parse_price(text).ok(),
        }
    }

    /// The display label for this raw price.
    ///
    /// Numbers are formatted as USD; non-blank strings are shown as-is;
    /// anything else falls back to [`PRICE_UNAVAILABLE`].
    #[must_use]
    pub fn display_label(&self) -> String {
        match self {
            Self::Number(amount) => format_usd(*amount),
            Self::Text(text) if !text.trim().is_empty() => text.clone(),
            Self::Text(_) => PRICE_UNAVAILABLE.to_owned(),
        }
    }
}

impl From<&str> for RawPrice {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Decimal> for RawPrice {
    fn from(amount: Decimal) -> Self {
        Self::Number(amount)
    }
}

/// A partial product record from the catalog.
///
/// Every field is optional; the engines substitute deterministic fallbacks
/// at their normalization boundary. Construct literally with struct-update
/// syntax:
///
/// ```
/// use laced_core::ProductRef;
///
/// let product = ProductRef {
///     id: Some("nk1".into()),
///     title: Some("Air Max".into()),
///     price: Some("$120.00".into()),
///     ..ProductRef::default()
/// };
/// assert_eq!(product.display_category(), "Sneakers");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRef {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<RawPrice>,
    pub image: Option<String>,
    pub size: Option<String>,
}

impl ProductRef {
    /// Title with fallback.
    #[must_use]
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| FALLBACK_TITLE.to_owned())
    }

    /// Category with fallback.
    #[must_use]
    pub fn display_category(&self) -> String {
        self.category
            .clone()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_owned())
    }

    /// Description with fallback.
    #[must_use]
    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_owned())
    }

    /// Image locator with placeholder fallback.
    #[must_use]
    pub fn display_image(&self) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| FALLBACK_IMAGE.to_owned())
    }

    /// Size variant with fallback.
    #[must_use]
    pub fn display_size(&self) -> String {
        self.size
            .clone()
            .unwrap_or_else(|| FALLBACK_SIZE.to_owned())
    }

    /// Normalized numeric unit price, when one can be recovered.
    #[must_use]
    pub fn unit_price(&self) -> Option<Decimal> {
        self.price.as_ref().and_then(RawPrice::as_decimal)
    }

    /// Display label for the price, per [`RawPrice::display_label`].
    #[must_use]
    pub fn price_label(&self) -> String {
        self.price
            .as_ref()
            .map_or_else(|| PRICE_UNAVAILABLE.to_owned(), RawPrice::display_label)
    }
}
