use super::money::Price;
use crate::error::{CartError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable identifier of a product, shared by catalog entries and cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
        }
    }
}

/// The static list of purchasable products, in display order.
///
/// Built once at startup; construction rejects duplicate ids so every lookup
/// afterwards is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CartError::ValidationError(format!(
                    "Duplicate product id {} in catalog",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
