//! Input and output adapters: CSV command streams and receipt renderers.

pub mod csv;
pub mod json;
