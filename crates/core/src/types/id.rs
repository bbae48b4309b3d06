//! Product identity resolution and cart line keys.
//!
//! Catalog payloads are not guaranteed to carry an identifier, so every
//! engine resolves one through the same rule: explicit id, else a slug of
//! the title, else a fixed sentinel. Newtype wrappers keep resolved ids and
//! cart line keys from being mixed with arbitrary strings.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel id used when neither an identifier nor a title is available.
pub const UNKNOWN_PRODUCT_ID: &str = "unknown-product";

/// Separator between the product id and the size in a [`LineItemKey`].
const KEY_SEPARATOR: &str = "::";

/// A resolved product identifier.
///
/// Resolution order:
/// 1. The explicit catalog id, when it is non-blank.
/// 2. A slug of the title: lowercased, each whitespace run collapsed to a
///    single hyphen.
/// 3. The [`UNKNOWN_PRODUCT_ID`] sentinel.
///
/// ## Examples
///
/// ```
/// use laced_core::ProductId;
///
/// assert_eq!(ProductId::resolve(Some("nk-af1"), None).as_str(), "nk-af1");
/// assert_eq!(ProductId::resolve(None, Some("Air Force 1")).as_str(), "air-force-1");
/// assert_eq!(ProductId::resolve(None, None).as_str(), "unknown-product");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Resolve an id from an optional explicit identifier and an optional
    /// fallback title.
    #[must_use]
    pub fn resolve(id: Option<&str>, fallback_title: Option<&str>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => Self(id.to_owned()),
            _ => match fallback_title {
                Some(title) if !title.trim().is_empty() => Self(slugify(title)),
                _ => Self(UNKNOWN_PRODUCT_ID.to_owned()),
            },
        }
    }

    /// Returns the resolved id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The composite identity of a cart line: `product id :: size`.
///
/// Two adds with the same key merge into a single line item; distinct sizes
/// of the same product stay separate lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemKey(String);

impl LineItemKey {
    /// Build the key for a product id and size variant.
    #[must_use]
    pub fn new(id: &ProductId, size: &str) -> Self {
        Self(format!("{id}{KEY_SEPARATOR}{size}"))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase a title and collapse every whitespace run into one hyphen.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_gap = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_gap {
                slug.push('-');
                in_gap = true;
            }
        } else {
            slug.push(ch);
            in_gap = false;
        }
    }
    slug
}
