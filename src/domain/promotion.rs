//! The "free gift above threshold" promotion.
//!
//! Gift eligibility is decided in exactly one place, [`reconcile_free_gift`],
//! which callers run after every cart mutation.

use super::cart::{Cart, CartLine, unit_price};
use super::catalog::{Catalog, Product};
use super::money::Price;
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// A zero-priced product granted once the non-gift subtotal reaches `threshold`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeGiftRule {
    gift: Product,
    threshold: Price,
}

impl FreeGiftRule {
    /// Validates the gift against the catalog it will be applied to.
    pub fn new(gift: Product, threshold: Price, catalog: &Catalog) -> Result<Self> {
        if gift.price != Price::ZERO {
            return Err(CartError::ValidationError(format!(
                "Free gift {} must have a zero price, got {}",
                gift.id, gift.price
            )));
        }
        if catalog.contains(gift.id) {
            return Err(CartError::ValidationError(format!(
                "Free gift id {} collides with a catalog product",
                gift.id
            )));
        }
        Ok(Self { gift, threshold })
    }

    pub fn gift(&self) -> &Product {
        &self.gift
    }

    pub fn threshold(&self) -> Price {
        self.threshold
    }
}

/// Subtotal of every line except the gift line.
pub fn non_gift_subtotal(cart: &Cart, catalog: &Catalog, rule: &FreeGiftRule) -> Price {
    let gift_id = rule.gift.id;
    cart.lines()
        .iter()
        .filter(|line| line.id != gift_id)
        .map(|line| unit_price(line.id, catalog, gift_id) * line.quantity)
        .sum()
}

pub fn is_eligible(cart: &Cart, catalog: &Catalog, rule: &FreeGiftRule) -> bool {
    non_gift_subtotal(cart, catalog, rule) >= rule.threshold
}

/// Adds or removes the gift line so its presence matches eligibility.
///
/// The gift is appended at the end with quantity 1. Running this on an
/// already reconciled cart returns it unchanged.
pub fn reconcile_free_gift(mut cart: Cart, catalog: &Catalog, rule: &FreeGiftRule) -> Cart {
    let eligible = is_eligible(&cart, catalog, rule);
    let has_gift = cart.contains(rule.gift.id);

    match (eligible, has_gift) {
        (true, false) => cart.push(CartLine {
            id: rule.gift.id,
            quantity: 1,
        }),
        (false, true) => cart.remove(rule.gift.id),
        _ => {}
    }
    cart
}

/// How far the cart is from unlocking the gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GiftProgress {
    pub subtotal: Price,
    pub threshold: Price,
    pub remaining: Price,
    /// Percentage towards the threshold, capped at 100.
    pub progress: Decimal,
    pub gift_unlocked: bool,
}

impl GiftProgress {
    pub fn of(cart: &Cart, catalog: &Catalog, rule: &FreeGiftRule) -> Self {
        let subtotal = non_gift_subtotal(cart, catalog, rule);
        let threshold = rule.threshold;
        let gift_unlocked = subtotal >= threshold;

        let remaining = if gift_unlocked {
            Price::ZERO
        } else {
            // threshold > subtotal here, so the difference is positive
            Price::new(threshold.value() - subtotal.value()).unwrap_or(Price::ZERO)
        };

        let progress = if gift_unlocked || threshold == Price::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            // subtotal < threshold here, so the ratio stays below one
            (subtotal.value() / threshold.value() * Decimal::ONE_HUNDRED)
                .min(Decimal::ONE_HUNDRED)
                .round_dp(2)
        };

        Self {
            subtotal: subtotal.normalize(),
            threshold: threshold.normalize(),
            remaining: remaining.normalize(),
            progress: progress.normalize(),
            gift_unlocked,
        }
    }
}
