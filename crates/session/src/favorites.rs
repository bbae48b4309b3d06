//! The favorites engine.
//!
//! A set keyed by resolved product id: one entry per product, no quantity.
//! Toggling is the primary mutation; membership alone decides whether a
//! call inserts or removes.

use laced_core::{ProductId, ProductRef};
use serde::Serialize;

/// A liked product. Price is always a display string here; favorites never
/// do arithmetic with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteItem {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// Which side of a toggle happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// The favorites list: first-liked-first, at most one entry per product id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Favorites {
    items: Vec<FavoriteItem>,
}

impl Favorites {
    /// Create an empty favorites list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a product is currently liked.
    ///
    /// The id is resolved through the usual rule, so callers holding only a
    /// title can still query membership.
    #[must_use]
    pub fn is_favorite(&self, id: Option<&str>, fallback_title: Option<&str>) -> bool {
        let id = ProductId::resolve(id, fallback_title);
        self.items.iter().any(|item| item.id == id)
    }

    /// Like or unlike a product, decided solely by prior membership.
    ///
    /// Removes the matching entry when one exists; otherwise inserts a new
    /// [`FavoriteItem`] built from the product's fields with fallbacks.
    /// Returns which of the two happened.
    pub fn toggle(&mut self, product: &ProductRef) -> Toggled {
        let id = ProductId::resolve(product.id.as_deref(), product.title.as_deref());

        if self.items.iter().any(|item| item.id == id) {
            self.items.retain(|item| item.id != id);
            tracing::debug!(id = %id, "removed favorite");
            return Toggled::Removed;
        }

        tracing::debug!(id = %id, "added favorite");
        self.items.push(FavoriteItem {
            id,
            title: product.display_title(),
            category: product.display_category(),
            description: product.display_description(),
            price: product.price_label(),
            image: product.display_image(),
        });
        Toggled::Added
    }

    /// Unlike a product, if present. Idempotent.
    pub fn remove(&mut self, id: Option<&str>, fallback_title: Option<&str>) {
        let id = ProductId::resolve(id, fallback_title);
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            tracing::debug!(id = %id, "removed favorite");
        }
    }

    /// Current favorites in first-liked order.
    #[must_use]
    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    /// Number of liked products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
