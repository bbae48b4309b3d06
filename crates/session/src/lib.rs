//! Laced Session - Cart and favorites state engines.
//!
//! The two engines backing the storefront's client state:
//!
//! - [`Cart`] - line items the user intends to purchase, merged by
//!   product+size identity, with derived quantity and subtotal aggregates.
//! - [`Favorites`] - the set of liked products, one entry per resolved
//!   product id.
//!
//! Both are synchronous in-memory reducers with no I/O. The hosting
//! application constructs one of each at session start, routes every
//! mutation through their methods, and drops them at session end; nothing
//! here persists across sessions. Aggregates are recomputed from the
//! collection on every read rather than maintained incrementally, so they
//! cannot drift from the items they summarize.
//!
//! Untrusted catalog records enter as [`laced_core::ProductRef`] values and
//! are normalized at the engine boundary; the owned item types only ever
//! hold resolved fields.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod favorites;

pub use cart::{Cart, CartLineItem, OrderSummary};
pub use favorites::{FavoriteItem, Favorites, Toggled};
