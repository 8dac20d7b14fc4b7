// file: src/loader/reader.rs
// description: ISO-8859-1 csv reader producing ordered header-keyed records
// reference: https://docs.rs/csv

use crate::error::{LoaderError, Result};
use crate::models::Record;
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| LoaderError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records_from(file)?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Rows shorter than the header omit the missing columns, extra trailing
/// fields are dropped.
pub fn read_records_from<R: Read>(input: R) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers: Vec<String> = reader.byte_headers()?.iter().map(decode_latin1).collect();

    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    while reader.read_byte_record(&mut row)? {
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(column, value)| (column.clone(), decode_latin1(value)))
            .collect();
        records.push(record);
    }

    Ok(records)
}

/// Every ISO-8859-1 byte is the Unicode code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
