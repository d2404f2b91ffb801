use super::catalog::ProductId;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Add,
    Update,
}

/// A single user action against the cart, as read from the input stream.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct CartCommand {
    pub action: CartAction,
    pub product: ProductId,
    pub delta: Option<i64>,
}

impl CartCommand {
    pub fn add(product: u32) -> Self {
        Self {
            action: CartAction::Add,
            product: ProductId(product),
            delta: None,
        }
    }

    pub fn update(product: u32, delta: i64) -> Self {
        Self {
            action: CartAction::Update,
            product: ProductId(product),
            delta: Some(delta),
        }
    }
}
