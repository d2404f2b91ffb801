use crate::domain::command::CartCommand;
use crate::error::{CartError, Result};
use std::io::Read;

/// Streams cart commands out of a CSV source with an `action, product, delta` header.
///
/// Rows may leave out the trailing `delta`. A row that fails to parse is
/// reported with its line number so the caller can log it and keep going.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Commands in input order; each malformed row yields one `RowError`.
    pub fn commands(self) -> impl Iterator<Item = Result<CartCommand>> {
        self.reader.into_deserialize().map(|row| row.map_err(label_row))
    }
}

fn label_row(err: csv::Error) -> CartError {
    match err.position().map(|pos| pos.line()) {
        Some(line) => CartError::RowError { line, source: err },
        None => CartError::CsvError(err),
    }
}
