//! Biasprobe Store: the persisted dataset table.
//!
//! One row per successful generation, `;`-delimited with standard CSV
//! quoting. Readers map columns by header name, so files written with
//! the older `..;Inferred_Nationality;Inferred_Gender` order still load.

pub mod table;
pub mod types;

pub use table::{migrate_to_canonical, read_rows, MigrationReport, TableWriter};
pub use types::{sanitize_field, Column, DatasetRow, DELIMITER};
