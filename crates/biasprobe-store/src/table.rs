//! Append-only table writer, header-mapped reader and schema migration.

use std::fs::OpenOptions;
use std::io::Read;
use std::path::{Path, PathBuf};

use biasprobe_core::{Error, Result};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::types::{sanitize_field, Column, DatasetRow, DELIMITER};

fn storage_err(e: impl std::fmt::Display) -> Error {
    Error::Storage(e.to_string())
}

/// Column order declared by a header record.
fn column_order(headers: &csv::StringRecord) -> Result<Vec<Column>> {
    let order = headers
        .iter()
        .map(|name| {
            Column::from_header(name)
                .ok_or_else(|| Error::Storage(format!("unknown column {:?}", name)))
        })
        .collect::<Result<Vec<_>>>()?;

    for column in Column::ALL {
        if !order.contains(&column) {
            return Err(Error::Storage(format!("missing column {}", column)));
        }
    }
    Ok(order)
}

/// Appends rows to a table file, one open-write-close per row.
#[derive(Debug)]
pub struct TableWriter {
    path: PathBuf,
    /// Column order of the file on disk.
    order: Vec<Column>,
}

impl TableWriter {
    /// Open an existing table, or create it with the canonical header.
    ///
    /// An existing file keeps its own column order, so appends to a legacy
    /// file stay consistent with its header.
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let is_new = std::fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(true);

        if is_new {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut writer = WriterBuilder::new()
                .delimiter(DELIMITER)
                .from_path(&path)
                .map_err(storage_err)?;
            writer
                .write_record(Column::ALL.iter().map(|c| c.header()))
                .map_err(storage_err)?;
            writer.flush()?;
            info!("Created dataset table {}", path.display());
            return Ok(Self {
                path,
                order: Column::ALL.to_vec(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&path)
            .map_err(storage_err)?;
        let order = column_order(reader.headers().map_err(storage_err)?)?;
        debug!("Appending to {} with columns {:?}", path.display(), order);
        Ok(Self { path, order })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file uses the canonical column order.
    pub fn is_canonical(&self) -> bool {
        self.order == Column::ALL
    }

    /// Append one row. CR and LF inside fields become spaces.
    pub fn append(&self, row: &DatasetRow) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(self.order.iter().map(|c| sanitize_field(row.get(*c))))
            .map_err(storage_err)?;
        writer.flush()?;
        Ok(())
    }
}

/// Read every row of a table file.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<DatasetRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(format!("table {}", path.display())),
        _ => Error::Io(e),
    })?;
    read_rows_from(file)
}

/// Read rows from any reader, mapping columns by header name.
pub fn read_rows_from<R: Read>(source: R) -> Result<Vec<DatasetRow>> {
    let mut reader = ReaderBuilder::new().delimiter(DELIMITER).from_reader(source);
    let order = column_order(reader.headers().map_err(storage_err)?)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::Storage(format!("row {}: {}", index + 1, e)))?;
        let mut row = DatasetRow::new("", "", "", "");
        for (column, value) in order.iter().zip(record.iter()) {
            row.set(*column, value.to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub rows: usize,
    /// False when the file was already canonical and left untouched.
    pub rewritten: bool,
}

/// Rewrite a table into the canonical column order, in place.
pub fn migrate_to_canonical(path: impl AsRef<Path>) -> Result<MigrationReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(format!("table {}", path.display())));
    }
    let writer = TableWriter::open_or_create(path)?;
    let rows = read_rows(path)?;
    if writer.is_canonical() {
        info!("{} is already canonical ({} rows)", path.display(), rows.len());
        return Ok(MigrationReport {
            rows: rows.len(),
            rewritten: false,
        });
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".migrating");
    let tmp = PathBuf::from(tmp);
    {
        let mut out = WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&tmp)
            .map_err(storage_err)?;
        out.write_record(Column::ALL.iter().map(|c| c.header()))
            .map_err(storage_err)?;
        for row in &rows {
            out.write_record(Column::ALL.iter().map(|c| sanitize_field(row.get(*c))))
                .map_err(storage_err)?;
        }
        out.flush()?;
    }
    std::fs::rename(&tmp, path)?;

    info!("Migrated {} rows in {} to canonical order", rows.len(), path.display());
    Ok(MigrationReport {
        rows: rows.len(),
        rewritten: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table_path() -> (PathBuf, TempDir) {
        let dir = TempDir::new().unwrap();
        (dir.path().join("out").join("dataset.csv"), dir)
    }

    fn lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_written_once() {
        let (path, _dir) = table_path();
        let writer = TableWriter::open_or_create(&path).unwrap();
        writer
            .append(&DatasetRow::new("p", "r", "male", "France"))
            .unwrap();

        let writer = TableWriter::open_or_create(&path).unwrap();
        writer
            .append(&DatasetRow::new("p", "r2", "female", "Japan"))
            .unwrap();

        assert_eq!(
            lines(&path),
            vec![
                "Prompt;Response;Inferred_Gender;Inferred_Nationality",
                "p;r;male;France",
                "p;r2;female;Japan",
            ]
        );
    }

    #[test]
    fn test_fields_are_sanitized_and_quoted() {
        let (path, _dir) = table_path();
        let writer = TableWriter::open_or_create(&path).unwrap();
        writer
            .append(&DatasetRow::new(
                "line one\nline two",
                "She said \"hi\"; then left.\r\n",
                "female",
                "unknown",
            ))
            .unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].prompt, "line one line two");
        assert_eq!(rows[0].response, "She said \"hi\"; then left.  ");
        assert_eq!(lines(&path).len(), 2);
    }

    #[test]
    fn test_legacy_order_reads_by_name() {
        let (path, _dir) = table_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "Prompt;Response;Inferred_Nationality;Inferred_Gender\np;r;Peru;male\n",
        )
        .unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows, vec![DatasetRow::new("p", "r", "male", "Peru")]);

        // Appends follow the file's own order.
        let writer = TableWriter::open_or_create(&path).unwrap();
        assert!(!writer.is_canonical());
        writer
            .append(&DatasetRow::new("p", "r2", "female", "Chile"))
            .unwrap();
        assert_eq!(lines(&path)[2], "p;r2;Chile;female");
    }

    #[test]
    fn test_migrate_to_canonical() {
        let (path, _dir) = table_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "Prompt;Response;Inferred_Nationality;Inferred_Gender\np;r;Peru;male\np;r;Kenya;female\n",
        )
        .unwrap();

        let report = migrate_to_canonical(&path).unwrap();
        assert_eq!(report, MigrationReport { rows: 2, rewritten: true });
        assert_eq!(
            lines(&path),
            vec![
                "Prompt;Response;Inferred_Gender;Inferred_Nationality",
                "p;r;male;Peru",
                "p;r;female;Kenya",
            ]
        );

        let again = migrate_to_canonical(&path).unwrap();
        assert!(!again.rewritten);
    }

    #[test]
    fn test_unknown_header_is_rejected() {
        let (path, _dir) = table_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "Prompt;Answer;Gender\n").unwrap();
        assert!(matches!(read_rows(&path), Err(Error::Storage(_))));
        assert!(TableWriter::open_or_create(&path).is_err());
    }

    #[test]
    fn test_missing_table() {
        let (path, _dir) = table_path();
        assert!(matches!(read_rows(&path), Err(Error::NotFound(_))));
    }
}
