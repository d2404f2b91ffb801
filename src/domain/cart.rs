use super::catalog::{Catalog, Product, ProductId};
use super::money::Price;

/// Quantity of one product held in the cart. Quantity is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub quantity: u32,
}

/// Ordered cart lines, in the order products were first added.
///
/// Holds at most one line per product id. The only way to change a cart is
/// through the functions in this module (and [`super::promotion`]), which take
/// the cart by value and hand back the updated one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub(crate) fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.id != id);
    }
}

/// Adds one unit of `product`, appending a new line if it is not in the cart yet.
pub fn add_to_cart(mut cart: Cart, product: &Product) -> Cart {
    match cart.lines.iter_mut().find(|line| line.id == product.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(1),
        None => cart.push(CartLine {
            id: product.id,
            quantity: 1,
        }),
    }
    cart
}

/// Shifts the quantity of an existing line by `delta`, flooring at zero.
///
/// A line that reaches zero is removed. Adjusting a product that has no line
/// returns the cart unchanged.
pub fn update_quantity(mut cart: Cart, product_id: ProductId, delta: i64) -> Cart {
    let Some(index) = cart.lines.iter().position(|line| line.id == product_id) else {
        return cart;
    };

    let current = i64::from(cart.lines[index].quantity);
    let new_quantity = current.saturating_add(delta).max(0);
    if new_quantity == 0 {
        cart.lines.remove(index);
    } else {
        cart.lines[index].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
    }
    cart
}

/// Unit price of `id`. The gift id is always free, whatever the catalog says;
/// ids found nowhere are priced at zero.
pub fn unit_price(id: ProductId, catalog: &Catalog, gift_id: ProductId) -> Price {
    if id == gift_id {
        return Price::ZERO;
    }
    catalog.get(id).map(|p| p.price).unwrap_or(Price::ZERO)
}

/// Sum of price times quantity over every line, the gift line contributing zero.
pub fn subtotal(cart: &Cart, catalog: &Catalog, gift_id: ProductId) -> Price {
    cart.lines
        .iter()
        .map(|line| unit_price(line.id, catalog, gift_id) * line.quantity)
        .sum()
}
