use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::model::{SerialRecord, SERIAL_COLUMN};
use crate::utils::error::{LabelError, Result};
use crate::utils::validation::validate_serial;

/// Read the serial list at `path`, keeping file order.
pub fn load_serials(path: impl AsRef<Path>) -> Result<Vec<SerialRecord>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LabelError::InputNotFound {
            path: path.display().to_string(),
        });
    }

    tracing::debug!("Reading serials from {}", path.display());
    read_serials(File::open(path)?)
}

/// Parse CSV with a header row containing a `Serial` column.
/// Other columns are ignored.
pub fn read_serials<R: Read>(input: R) -> Result<Vec<SerialRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| h == SERIAL_COLUMN) {
        return Err(LabelError::SchemaError {
            column: SERIAL_COLUMN.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        });
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<SerialRecord>().enumerate() {
        let record = row?;
        validate_serial(i + 1, &record.serial)?;
        records.push(record);
    }

    tracing::debug!("Loaded {} serials", records.len());
    Ok(records)
}
