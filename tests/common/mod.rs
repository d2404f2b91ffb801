#![allow(dead_code)]

use giftcart::application::engine::CartSession;
use giftcart::config::ShopConfig;
use giftcart::domain::catalog::{Catalog, Product};
use giftcart::domain::money::Price;
use giftcart::domain::promotion::FreeGiftRule;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn price(value: Decimal) -> Price {
    Price::new(value).unwrap()
}

/// Catalog with a single 500 product and a gift at 1000.
pub fn laptop_shop() -> (Catalog, FreeGiftRule) {
    let catalog = Catalog::new(vec![Product::new(1, "Laptop", price(Decimal::from(500)))]).unwrap();
    let gift = Product::new(99, "Wireless Mouse", Price::ZERO);
    let rule = FreeGiftRule::new(gift, price(Decimal::from(1000)), &catalog).unwrap();
    (catalog, rule)
}

pub fn default_session() -> CartSession {
    let (catalog, rule) = ShopConfig::default().into_parts().unwrap();
    CartSession::new(catalog, rule)
}

/// Writes a commands CSV (header included) to a temp file.
pub fn commands_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action, product, delta").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
