use crate::application::receipt::Receipt;
use crate::error::Result;
use std::io::Write;

/// Writes the whole receipt, lines and summary, as pretty-printed JSON.
pub fn write_receipt<W: Write>(mut writer: W, receipt: &Receipt) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, receipt)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::CartSession;
    use crate::config::ShopConfig;
    use crate::domain::catalog::ProductId;

    #[test]
    fn test_write_json_receipt() {
        let (catalog, rule) = ShopConfig::default().into_parts().unwrap();
        let mut session = CartSession::new(catalog, rule);
        session.add(ProductId(2)).unwrap();

        let mut buffer = Vec::new();
        write_receipt(&mut buffer, &session.receipt()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["lines"][0]["product"], 2);
        assert_eq!(value["lines"][0]["name"], "Smartphone");
        assert_eq!(value["lines"][0]["line_total"], "300");
        assert_eq!(value["summary"]["remaining"], "700");
        assert_eq!(value["summary"]["gift_unlocked"], false);
    }
}
