use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::warn;

use numvar_core::PhoneRecord;

use crate::errors::GenerationError;

/// Read a `Phone,Tip,Operator` CSV dataset.
///
/// Rows that do not deserialize are skipped with a warning; the pipeline
/// tolerates dirty source files.
pub fn read_dataset(path: &Path) -> Result<Vec<PhoneRecord>, GenerationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(File::open(path)?));

    let mut records = Vec::new();
    for result in reader.deserialize::<PhoneRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping malformed dataset row")
            }
        }
    }
    Ok(records)
}

/// Write a `Phone,Tip,Operator` CSV dataset.
pub fn write_dataset(path: &Path, records: &[PhoneRecord]) -> Result<(), GenerationError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(BufWriter::new(File::create(path)?));
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("numvar_io_{}_{}.csv", label, uuid::Uuid::new_v4()))
    }

    #[test]
    fn round_trips_records() {
        let path = temp_path("roundtrip");
        let records = vec![
            PhoneRecord::new("60123456", "May/2023", "Orange"),
            PhoneRecord::new("21234567", "Seed", "Moldtelecom"),
        ];

        write_dataset(&path, &records).expect("write dataset");
        let read = read_dataset(&path).expect("read dataset");

        assert_eq!(read, records);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn skips_rows_with_missing_columns() {
        let path = temp_path("malformed");
        fs::write(
            &path,
            "Phone,Tip,Operator\n60123456,activ,Orange\nonly-one-field\n",
        )
        .expect("write csv");

        let read = read_dataset(&path).expect("read dataset");
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].phone, "60123456");
        let _ = fs::remove_file(path);
    }
}
