//! Fixed product catalog loaded at startup.

use crate::model::Product;
use rust_decimal::Decimal;

/// The products served by the catalog, in enumeration order.
pub fn seed() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Laptop",
            "High-performance laptop",
            Decimal::new(129_999, 2),
            15,
            "Electronics",
        ),
        Product::new(
            2,
            "Smartphone",
            "Latest model smartphone",
            Decimal::new(89_999, 2),
            25,
            "Electronics",
        ),
        Product::new(
            3,
            "Headphones",
            "Noise-cancelling headphones",
            Decimal::new(24_999, 2),
            50,
            "Audio",
        ),
        Product::new(
            4,
            "Keyboard",
            "Mechanical gaming keyboard",
            Decimal::new(12_999, 2),
            30,
            "Accessories",
        ),
        Product::new(
            5,
            "Mouse",
            "Wireless ergonomic mouse",
            Decimal::new(4_999, 2),
            100,
            "Accessories",
        ),
    ]
}
