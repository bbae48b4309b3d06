//! Laced Core - Shared types library.
//!
//! This crate provides the domain types shared across all Laced components:
//! - `session` - Cart and favorites state engines
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no storage. It owns the single boundary where untrusted catalog
//! data is accepted: the partial [`ProductRef`](types::ProductRef) record and
//! the fallback/normalization rules that turn it into display-ready values.
//!
//! # Modules
//!
//! - [`types`] - Product references, identity resolution, and money handling

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
