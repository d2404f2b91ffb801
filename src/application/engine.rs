use super::receipt::Receipt;
use crate::domain::cart::{self, Cart};
use crate::domain::catalog::{Catalog, ProductId};
use crate::domain::command::{CartAction, CartCommand};
use crate::domain::money::Price;
use crate::domain::promotion::{self, FreeGiftRule, GiftProgress};
use crate::error::{CartError, Result};

/// Drives the cart in response to user actions.
///
/// `CartSession` owns the static catalog configuration and the current cart.
/// Every mutating action runs one pure cart operation and then the free gift
/// reconciliation pass, so the cart is consistent between any two calls.
pub struct CartSession {
    catalog: Catalog,
    rule: FreeGiftRule,
    cart: Cart,
}

impl CartSession {
    /// Creates a session with an empty cart.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The products that can be added.
    /// * `rule` - The free gift promotion applied after every change.
    pub fn new(catalog: Catalog, rule: FreeGiftRule) -> Self {
        let cart = promotion::reconcile_free_gift(Cart::new(), &catalog, &rule);
        Self {
            catalog,
            rule,
            cart,
        }
    }

    /// Adds one unit of a catalog product.
    #[tracing::instrument(skip(self))]
    pub fn add(&mut self, product_id: ProductId) -> Result<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CartError::UnknownProduct(product_id))?;

        let cart = cart::add_to_cart(std::mem::take(&mut self.cart), product);
        self.commit(cart);
        Ok(())
    }

    /// Adjusts the quantity of a product already in the cart.
    ///
    /// The free gift is managed by the promotion only and cannot be adjusted.
    #[tracing::instrument(skip(self))]
    pub fn update(&mut self, product_id: ProductId, delta: i64) -> Result<()> {
        if product_id == self.rule.gift().id {
            return Err(CartError::GiftNotAdjustable(product_id));
        }

        let cart = cart::update_quantity(std::mem::take(&mut self.cart), product_id, delta);
        self.commit(cart);
        Ok(())
    }

    /// Applies a command read from the input stream.
    pub fn apply(&mut self, command: CartCommand) -> Result<()> {
        match command.action {
            CartAction::Add => self.add(command.product),
            CartAction::Update => {
                let delta = command.delta.ok_or_else(|| {
                    CartError::CommandError(format!(
                        "update of product {} requires a delta",
                        command.product
                    ))
                })?;
                self.update(command.product, delta)
            }
        }
    }

    fn commit(&mut self, cart: Cart) {
        let gift_id = self.rule.gift().id;
        let had_gift = cart.contains(gift_id);
        let cart = promotion::reconcile_free_gift(cart, &self.catalog, &self.rule);

        match (had_gift, cart.contains(gift_id)) {
            (false, true) => tracing::info!(gift = %gift_id, "free gift granted"),
            (true, false) => tracing::info!(gift = %gift_id, "free gift removed"),
            _ => {}
        }
        tracing::debug!(lines = cart.len(), "cart updated");
        self.cart = cart;
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rule(&self) -> &FreeGiftRule {
        &self.rule
    }

    pub fn subtotal(&self) -> Price {
        cart::subtotal(&self.cart, &self.catalog, self.rule.gift().id)
    }

    pub fn progress(&self) -> GiftProgress {
        GiftProgress::of(&self.cart, &self.catalog, &self.rule)
    }

    pub fn receipt(&self) -> Receipt {
        Receipt::new(self)
    }

    /// Consumes the session and returns the final cart.
    pub fn into_cart(self) -> Cart {
        self.cart
    }
}
