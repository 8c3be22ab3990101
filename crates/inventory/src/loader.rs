//! Tabular loader for the inventory table.
//!
//! Reads a CSV export of the warehouse sheet. The header row must contain
//! `Product Name`, `Quantity`, `Shelf Location` and `Replenish Date`
//! (matched case-insensitively, in any order); other columns are ignored.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use voicepick_core::DomainError;

use crate::record::InventoryRecord;
use crate::table::InventoryTable;

pub const COL_PRODUCT_NAME: &str = "Product Name";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_SHELF_LOCATION: &str = "Shelf Location";
pub const COL_REPLENISH_DATE: &str = "Replenish Date";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed inventory data: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("row {row}: invalid quantity `{value}` (expected a non-negative integer)")]
    InvalidQuantity { row: usize, value: String },

    #[error("row {row}: {source}")]
    Domain {
        row: usize,
        #[source]
        source: DomainError,
    },
}

struct Columns {
    product_name: usize,
    quantity: usize,
    shelf_location: usize,
    replenish_date: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |wanted: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
                .ok_or(LoadError::MissingColumn(wanted))
        };

        Ok(Self {
            product_name: find(COL_PRODUCT_NAME)?,
            quantity: find(COL_QUANTITY)?,
            shelf_location: find(COL_SHELF_LOCATION)?,
            replenish_date: find(COL_REPLENISH_DATE)?,
        })
    }
}

/// Load a table from any CSV source.
pub fn load_from_reader<R: Read>(reader: R) -> Result<InventoryTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?)?;
    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_no = idx + 1;
        let row = result?;
        let cell = |pos: usize| row.get(pos).unwrap_or_default();

        let raw_quantity = cell(columns.quantity);
        let quantity = raw_quantity
            .parse::<u64>()
            .map_err(|_| LoadError::InvalidQuantity {
                row: row_no,
                value: raw_quantity.to_string(),
            })?;

        let record = InventoryRecord::new(
            cell(columns.product_name),
            quantity,
            cell(columns.shelf_location),
            cell(columns.replenish_date),
        )
        .map_err(|source| LoadError::Domain { row: row_no, source })?;

        records.push(record);
    }

    Ok(InventoryTable::new(records))
}

/// Load a table from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<InventoryTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = load_from_reader(file)?;
    tracing::info!(path = %path.display(), records = table.len(), "inventory loaded");
    Ok(table)
}

/// Like [`load_csv`], but a missing file degrades to an empty table.
///
/// Every lookup against the empty table is a miss, so the assistant keeps
/// answering ("not found") instead of refusing to start.
pub fn load_csv_or_empty(path: impl AsRef<Path>) -> Result<InventoryTable, LoadError> {
    match load_csv(path.as_ref()) {
        Err(LoadError::Io { path, source }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "inventory file not found; starting with an empty table");
            Ok(InventoryTable::empty())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Product Name,Quantity,Shelf Location,Replenish Date
Bolt 5mm,120,A-12,2024-05-01
Widget A, 7 ,B-03,next week
";

    #[test]
    fn loads_rows_in_order() {
        let table = load_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);

        let bolt = table.find_by_name("bolt 5mm").unwrap();
        assert_eq!(bolt.quantity(), 120);
        assert_eq!(bolt.shelf_location(), "A-12");

        let widget = table.find_by_name("WIDGET A").unwrap();
        assert_eq!(widget.quantity(), 7);
        assert_eq!(widget.replenish_date(), "next week");
    }

    #[test]
    fn columns_may_be_reordered_and_extra() {
        let data = "\
shelf location,Notes,REPLENISH DATE,product name,quantity
D-4,fragile,2025-01-01,Gear,3
";
        let table = load_from_reader(data.as_bytes()).unwrap();
        let gear = table.find_by_name("gear").unwrap();
        assert_eq!(gear.shelf_location(), "D-4");
        assert_eq!(gear.replenish_date(), "2025-01-01");
        assert_eq!(gear.quantity(), 3);
    }

    #[test]
    fn header_only_is_an_empty_table() {
        let data = "Product Name,Quantity,Shelf Location,Replenish Date\n";
        assert!(load_from_reader(data.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let data = "Product Name,Quantity,Replenish Date\nBolt,1,2024-01-01\n";
        let err = load_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(COL_SHELF_LOCATION)));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let data = "Product Name,Quantity,Shelf Location,Replenish Date\nBolt,-3,A-1,x\n";
        let err = load_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidQuantity { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "-3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_product_name_is_rejected() {
        let data = "Product Name,Quantity,Shelf Location,Replenish Date\nBolt,1,A-1,x\n ,2,A-2,y\n";
        let err = load_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Domain { row: 2, .. }));
    }

    #[test]
    fn load_csv_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_csv(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_degrades_to_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_csv_or_empty(dir.path().join("absent.csv")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_file_is_an_error_for_strict_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_not_masked() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Product Name,Quantity\nBolt,1\n").unwrap();
        assert!(load_csv_or_empty(file.path()).is_err());
    }
}
