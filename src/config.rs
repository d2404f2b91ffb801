//! Static shop configuration: catalog, free gift and threshold.

use crate::domain::catalog::{Catalog, Product};
use crate::domain::money::Price;
use crate::domain::promotion::FreeGiftRule;
use crate::error::Result;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Shop configuration as read from a JSON file.
///
/// ```json
/// {
///   "products": [{ "id": 1, "name": "Laptop", "price": 500 }],
///   "free_gift": { "id": 99, "name": "Wireless Mouse", "price": 0 },
///   "threshold": 1000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    pub products: Vec<Product>,
    pub free_gift: Product,
    pub threshold: Price,
}

impl ShopConfig {
    /// Reads a configuration from any JSON source.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validates the configuration and splits it into the catalog and the gift rule.
    pub fn into_parts(self) -> Result<(Catalog, FreeGiftRule)> {
        let catalog = Catalog::new(self.products)?;
        let rule = FreeGiftRule::new(self.free_gift, self.threshold, &catalog)?;
        Ok((catalog, rule))
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            products: vec![
                Product::new(1, "Laptop", Price(dec!(500))),
                Product::new(2, "Smartphone", Price(dec!(300))),
                Product::new(3, "Headphones", Price(dec!(100))),
                Product::new(4, "Smartwatch", Price(dec!(150))),
            ],
            free_gift: Product::new(99, "Wireless Mouse", Price::ZERO),
            threshold: Price(dec!(1000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ProductId;
    use crate::error::CartError;

    #[test]
    fn test_default_values() {
        let (catalog, rule) = ShopConfig::default().into_parts().unwrap();
        assert_eq!(catalog.products().len(), 4);
        assert_eq!(rule.gift().id, ProductId(99));
        assert_eq!(rule.threshold(), Price(dec!(1000)));
    }

    #[test]
    fn test_from_reader() {
        let json = r#"{
            "products": [
                {"id": 1, "name": "Laptop", "price": 500},
                {"id": 2, "name": "Smartphone", "price": "299.99"}
            ],
            "free_gift": {"id": 50, "name": "Sticker", "price": 0},
            "threshold": 750
        }"#;
        let config = ShopConfig::from_reader(json.as_bytes()).unwrap();
        let (catalog, rule) = config.into_parts().unwrap();

        assert_eq!(catalog.get(ProductId(2)).unwrap().price, Price(dec!(299.99)));
        assert_eq!(rule.gift().name, "Sticker");
        assert_eq!(rule.threshold(), Price(dec!(750)));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let json = r#"{"products": [], "free_gift": {"id": 9, "name": "G", "price": 0}, "threshold": -1}"#;
        assert!(matches!(
            ShopConfig::from_reader(json.as_bytes()),
            Err(CartError::JsonError(_))
        ));
    }

    #[test]
    fn test_duplicate_products_rejected() {
        let mut config = ShopConfig::default();
        config.products.push(Product::new(2, "Another phone", Price(dec!(10))));
        assert!(matches!(
            config.into_parts(),
            Err(CartError::ValidationError(_))
        ));
    }
}
