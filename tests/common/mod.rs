//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::io::Write;
use std::path::PathBuf;

use storefront::auth::UserRecord;
use storefront::catalog::Product;
use tempfile::TempDir;

/// Build a product with the fields the reducers look at.
pub fn product(id: i64, name: &str, price: f64, category: &str, featured: bool) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        image: format!("{id}.png"),
        category: category.to_string(),
        featured: Some(featured),
        ..Default::default()
    }
}

/// A small mixed catalog, in provider order.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Desk Lamp", 45.0, "lighting", true),
        product(2, "armchair", 320.0, "furniture", false),
        product(3, "Candle", 12.5, "lighting", false),
        product(4, "Bookshelf", 150.0, "furniture", true),
        product(5, "rug", 89.99, "textiles", false),
    ]
}

pub fn user(uid: &str, name: &str) -> UserRecord {
    UserRecord {
        uid: Some(uid.to_string()),
        email: Some(format!("{uid}@example.com")),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    (temp_dir, path)
}
