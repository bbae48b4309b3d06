//! The shopping cart engine.
//!
//! Line items are deduplicated by [`LineItemKey`] (product id + size):
//! adding a product whose key already exists merges into the existing line
//! instead of appending a duplicate. Insertion order is preserved for
//! display. Aggregates are pure functions over the current items.

use laced_core::{LineItemKey, PRICE_UNAVAILABLE, ProductId, ProductRef, RawPrice, format_usd};
use rust_decimal::Decimal;
use serde::Serialize;

/// One cart entry: a product+size combination and its quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineItem {
    /// Merge identity, `product id :: size`.
    pub key: LineItemKey,
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Normalized numeric price per unit; `None` when the catalog price
    /// could not be parsed.
    pub unit_price: Option<Decimal>,
    /// Display string shown when `unit_price` is absent, or the formatted
    /// unit price when it is present.
    pub price_label: String,
    pub image: String,
    pub size: String,
    pub quantity: u32,
}

impl CartLineItem {
    /// `unit_price × quantity`, when a numeric price exists.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price
            .map(|price| price * Decimal::from(self.quantity))
    }

    /// Display string for the line total: the formatted numeric total when
    /// one exists, else the price label.
    #[must_use]
    pub fn line_total_label(&self) -> String {
        self.line_total()
            .map_or_else(|| self.price_label.clone(), format_usd)
    }
}

/// Cost summary for the order review panel.
///
/// Shipping is currently always free; the field stays so the total keeps
/// meaning once paid tiers exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub estimated_total: Decimal,
}

/// The shopping cart: an insertion-ordered collection of line items.
///
/// Construct one per session and route all mutations through its methods;
/// the item collection is private so the merge invariant cannot be broken
/// from outside.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of a product to the cart.
    ///
    /// Quantities below 1 are clamped to 1. If a line with the same
    /// product+size key already exists, its quantity is incremented; an
    /// already-resolved numeric price is never replaced, and the price label
    /// is only backfilled when the existing one is the unavailable sentinel.
    pub fn add(&mut self, product: &ProductRef, quantity: i64) {
        let quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);

        let title = product.display_title();
        let id = ProductId::resolve(product.id.as_deref(), Some(&title));
        let size = product.display_size();
        let key = LineItemKey::new(&id, &size);

        let unit_price = product.unit_price();
        let price_label = match (unit_price, product.price.as_ref()) {
            (Some(price), _) => format_usd(price),
            (None, Some(RawPrice::Text(text))) => text.clone(),
            (None, _) => PRICE_UNAVAILABLE.to_owned(),
        };

        if let Some(existing) = self.items.iter_mut().find(|item| item.key == key) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            if existing.unit_price.is_none() {
                existing.unit_price = unit_price;
            }
            if existing.price_label == PRICE_UNAVAILABLE {
                existing.price_label = price_label;
            }
            tracing::debug!(key = %existing.key, quantity = existing.quantity, "merged cart line");
            return;
        }

        tracing::debug!(key = %key, quantity, "added cart line");
        self.items.push(CartLineItem {
            key,
            id,
            title,
            category: product.display_category(),
            description: product.display_description(),
            unit_price,
            price_label,
            image: product.display_image(),
            size,
            quantity,
        });
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &ProductRef) {
        self.add(product, 1);
    }

    /// Replace the quantity of the line with `key`.
    ///
    /// Quantities below 0 are clamped to 0, and a quantity of 0 removes the
    /// line entirely. Unknown keys are a no-op.
    pub fn update_quantity(&mut self, key: &LineItemKey, quantity: i64) {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if quantity == 0 {
            self.remove(key);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.key == *key) {
            item.quantity = quantity;
            tracing::debug!(key = %key, quantity, "updated cart line quantity");
        }
    }

    /// Remove the line with `key`, if present. Idempotent.
    pub fn remove(&mut self, key: &LineItemKey) {
        let before = self.items.len();
        self.items.retain(|item| item.key != *key);
        if self.items.len() != before {
            tracing::debug!(key = %key, "removed cart line");
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        tracing::debug!(items = self.items.len(), "cleared cart");
        self.items.clear();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct line items (not total units).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Sum of `unit_price × quantity` over lines with a resolved price.
    ///
    /// Lines without a numeric price contribute zero; callers show their
    /// `price_label` instead.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .filter_map(CartLineItem::line_total)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cost summary with the free shipping tier applied.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        let subtotal = self.subtotal();
        let shipping = Decimal::ZERO;
        OrderSummary {
            subtotal,
            shipping,
            estimated_total: subtotal + shipping,
        }
    }
}
