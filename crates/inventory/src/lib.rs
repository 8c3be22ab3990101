//! Inventory lookup module.
//!
//! Holds the read-only warehouse table for a session and answers point
//! queries by product name. Loading from a tabular file lives in [`loader`];
//! everything else is pure, deterministic domain logic.

pub mod loader;
pub mod record;
pub mod table;

pub use loader::{LoadError, load_csv, load_csv_or_empty, load_from_reader};
pub use record::{InventoryRecord, ProductName};
pub use table::InventoryTable;
