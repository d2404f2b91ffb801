use super::engine::CartSession;
use crate::domain::cart::unit_price;
use crate::domain::catalog::ProductId;
use crate::domain::money::Price;
use crate::domain::promotion::GiftProgress;
use serde::Serialize;

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub product: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub line_total: Price,
    pub free_gift: bool,
}

/// Read-only view of a session's cart, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub summary: GiftProgress,
}

impl Receipt {
    pub fn new(session: &CartSession) -> Self {
        let catalog = session.catalog();
        let gift = session.rule().gift();

        let lines = session
            .cart()
            .lines()
            .iter()
            .map(|line| {
                let name = if line.id == gift.id {
                    gift.name.clone()
                } else {
                    catalog
                        .get(line.id)
                        .map(|p| p.name.clone())
                        .unwrap_or_default()
                };
                let price = unit_price(line.id, catalog, gift.id);
                ReceiptLine {
                    product: line.id,
                    name,
                    price: price.normalize(),
                    quantity: line.quantity,
                    line_total: (price * line.quantity).normalize(),
                    free_gift: line.id == gift.id,
                }
            })
            .collect();

        Self {
            lines,
            summary: session.progress(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn test_receipt_lines() {
        let (catalog, rule) = ShopConfig::default().into_parts().unwrap();
        let mut session = CartSession::new(catalog, rule);
        session.add(ProductId(1)).unwrap();
        session.add(ProductId(2)).unwrap();
        session.add(ProductId(2)).unwrap();

        let receipt = session.receipt();
        assert_eq!(receipt.lines.len(), 3);

        let phones = &receipt.lines[1];
        assert_eq!(phones.name, "Smartphone");
        assert_eq!(phones.quantity, 2);
        assert_eq!(phones.line_total, Price::new(dec!(600)).unwrap());
        assert!(!phones.free_gift);

        let gift = &receipt.lines[2];
        assert_eq!(gift.name, "Wireless Mouse");
        assert_eq!(gift.line_total, Price::ZERO);
        assert!(gift.free_gift);

        assert!(receipt.summary.gift_unlocked);
        assert_eq!(receipt.summary.subtotal, Price::new(dec!(1100)).unwrap());
    }

    #[test]
    fn test_empty_receipt() {
        let (catalog, rule) = ShopConfig::default().into_parts().unwrap();
        let session = CartSession::new(catalog, rule);
        let receipt = session.receipt();

        assert!(receipt.is_empty());
        assert_eq!(receipt.summary.remaining, Price::new(dec!(1000)).unwrap());
        assert_eq!(receipt.summary.progress, dec!(0));
    }
}
