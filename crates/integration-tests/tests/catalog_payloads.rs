//! Feeding raw catalog JSON through the engines.
//!
//! The proxy reshapes third-party search results into records of the
//! `ProductRef` shape, but fields still go missing and prices arrive in
//! whatever format the upstream source used. These tests deserialize
//! payloads verbatim and check the engines absorb them.

use laced_core::ProductRef;
use laced_integration_tests::init_tracing;
use laced_session::{Cart, Favorites};
use rust_decimal::Decimal;

#[test]
fn test_search_results_payload_into_cart() {
    init_tracing();
    let payload = r#"[
        {"id": "nk-af1", "title": "Air Force 1 '07", "price": "$115.00",
         "category": "Lifestyle", "image": "https://img.example/af1.jpg"},
        {"title": "Court Vision Low", "price": 89.97},
        {"id": "nk-p38", "title": "Pegasus 38"}
    ]"#;
    let products: Vec<ProductRef> = serde_json::from_str(payload).unwrap();

    let mut cart = Cart::new();
    for product in &products {
        cart.add_one(product);
    }

    assert_eq!(cart.item_count(), 3);
    // 115.00 + 89.97; the priceless Pegasus contributes nothing.
    assert_eq!(cart.subtotal(), Decimal::new(20_497, 2));
    assert_eq!(cart.items()[1].id.as_str(), "court-vision-low");
    assert_eq!(cart.items()[2].price_label, "Price unavailable");
}

#[test]
fn test_european_price_format_from_upstream() {
    init_tracing();
    let product: ProductRef =
        serde_json::from_str(r#"{"id": "nk9", "title": "Vapormax", "price": "1.234,56"}"#).unwrap();

    let mut cart = Cart::new();
    cart.add(&product, 1);

    assert_eq!(cart.subtotal(), Decimal::new(123_456, 2));
    // Once parsed, display uses the normalized USD rendering.
    assert_eq!(cart.items()[0].price_label, "$1,234.56");
}

#[test]
fn test_garbage_fields_do_not_panic_the_engines() {
    init_tracing();
    let product: ProductRef = serde_json::from_str(
        r#"{"title": "", "price": "N/A", "image": "", "size": ""}"#,
    )
    .unwrap();

    let mut cart = Cart::new();
    let mut favorites = Favorites::new();
    cart.add(&product, 1);
    favorites.toggle(&product);

    // Present-but-empty fields are kept verbatim; only absent ones fall back.
    assert_eq!(cart.items()[0].title, "");
    assert_eq!(cart.items()[0].size, "");
    assert_eq!(cart.subtotal(), Decimal::ZERO);
    assert_eq!(favorites.items()[0].id.as_str(), "unknown-product");
}
