//! CSV export of result records
//!
//! Byte-exact UTF-8 output: header `ID,Shard`, one row per input ID in
//! original order, shard values `A (Par)` / `B (Ímpar)`.

use crate::error::{Error, Result};
use crate::partition::ResultRecord;
use std::fs;
use std::path::Path;

/// Default file name for the exported CSV
pub const CSV_FILE_NAME: &str = "distribuicao_shards.csv";

/// MIME type of the export
pub const CSV_MIME: &str = "text/csv";

/// Serialize result records to CSV bytes.
///
/// The header is always written, even for an empty record list.
pub fn to_csv_bytes(records: &[ResultRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["ID", "Shard"])?;
    for record in records {
        writer.write_record([record.id.to_string().as_str(), record.shard.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Other(format!("Failed to flush CSV buffer: {e}")))
}

/// Write the result records to a CSV file at `path`
pub fn write_csv(records: &[ResultRecord], path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_csv_bytes(records)?;
    fs::write(path, bytes)?;
    Ok(())
}
