use crate::domain::catalog::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Row {line}: {source}")]
    RowError {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("Product {0} is a free gift and cannot be adjusted")]
    GiftNotAdjustable(ProductId),
    #[error("Command error: {0}")]
    CommandError(String),
}

pub type Result<T> = std::result::Result<T, CartError>;
