use crate::application::receipt::Receipt;
use crate::error::Result;
use std::io::Write;

const LINE_HEADER: [&str; 6] = [
    "product",
    "name",
    "price",
    "quantity",
    "line_total",
    "free_gift",
];
const SUMMARY_HEADER: [&str; 5] = [
    "subtotal",
    "threshold",
    "remaining",
    "progress",
    "gift_unlocked",
];

/// Writes a receipt as CSV: one row per cart line, optionally followed by a
/// blank line and a one-row summary table.
pub struct ReceiptWriter<W: Write> {
    inner: W,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt, with_summary: bool) -> Result<()> {
        // Headers are written by hand so an empty cart still gets one.
        let mut lines = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.inner);
        lines.write_record(LINE_HEADER)?;
        for line in &receipt.lines {
            lines.serialize(line)?;
        }
        lines.flush()?;
        drop(lines);

        if with_summary {
            writeln!(self.inner)?;
            let mut summary = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut self.inner);
            summary.write_record(SUMMARY_HEADER)?;
            summary.serialize(receipt.summary)?;
            summary.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::CartSession;
    use crate::config::ShopConfig;
    use crate::domain::catalog::ProductId;

    fn render(session: &CartSession, with_summary: bool) -> String {
        let mut writer = ReceiptWriter::new(Vec::new());
        writer
            .write_receipt(&session.receipt(), with_summary)
            .unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    fn session() -> CartSession {
        let (catalog, rule) = ShopConfig::default().into_parts().unwrap();
        CartSession::new(catalog, rule)
    }

    #[test]
    fn test_write_lines() {
        let mut session = session();
        session.add(ProductId(1)).unwrap();
        session.add(ProductId(1)).unwrap();

        let output = render(&session, false);
        assert_eq!(
            output,
            "product,name,price,quantity,line_total,free_gift\n\
             1,Laptop,500,2,1000,false\n\
             99,Wireless Mouse,0,1,0,true\n"
        );
    }

    #[test]
    fn test_write_summary() {
        let mut session = session();
        session.add(ProductId(4)).unwrap();

        let output = render(&session, true);
        assert!(output.ends_with(
            "\nsubtotal,threshold,remaining,progress,gift_unlocked\n150,1000,850,15,false\n"
        ));
    }

    #[test]
    fn test_write_empty_cart() {
        let output = render(&session(), false);
        assert_eq!(output, "product,name,price,quantity,line_total,free_gift\n");
    }
}
