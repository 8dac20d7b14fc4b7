// file: src/loader/mod.rs
// description: csv ingestion module exports
// reference: internal module structure

pub mod indexer;
pub mod reader;

pub use indexer::{CsvLoader, LoadStats, prepare_documents};
pub use reader::{decode_latin1, read_records, read_records_from};
