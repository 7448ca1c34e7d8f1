// SPDX-License-Identifier: MPL-2.0
//! Built-in product catalog used when no other source is configured.

use crate::domain::catalog::{Item, Price};

/// Returns the default discovery feed, in display order.
#[must_use]
pub fn featured_products() -> Vec<Item> {
    vec![
        Item::new(
            "1",
            "product-hoodie.jpg",
            "UrbanVibes",
            "Oversized Purple Hoodie",
            Price::new(2499),
        ),
        Item::new(
            "2",
            "product-jacket.jpg",
            "StreetCore",
            "Vintage Denim Jacket",
            Price::new(3299),
        ),
        Item::new(
            "3",
            "product-tshirt.jpg",
            "MinimalFit",
            "Essential White Tee",
            Price::new(899),
        ),
        Item::new(
            "4",
            "product-sneakers.jpg",
            "StepUp",
            "Urban Runner Sneakers",
            Price::new(4999),
        ),
    ]
}
