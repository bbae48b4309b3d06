//! Shared fixtures for Laced integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use laced_core::ProductRef;

/// Install a tracing subscriber for test runs, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fully-populated catalog record, as the proxy returns for a hit.
#[must_use]
pub fn air_max() -> ProductRef {
    ProductRef {
        id: Some("nk1".to_owned()),
        title: Some("Air Max".to_owned()),
        category: Some("Running".to_owned()),
        description: Some("Visible Air cushioning.".to_owned()),
        price: Some("$120.00".into()),
        image: Some("https://img.example/nk1.jpg".to_owned()),
        size: None,
    }
}

/// A sparse catalog record with an unparseable price.
#[must_use]
pub fn mystery_shoe() -> ProductRef {
    ProductRef {
        title: Some("Mystery Shoe".to_owned()),
        price: Some("Price unavailable".into()),
        ..ProductRef::default()
    }
}
