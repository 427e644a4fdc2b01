// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::table::{Extraction, ResultTable, SkippedConstituency, COLUMNS};
use crate::utils::error::StorageError;
use serde::Serialize;

/// Extension given to the delimited-text output.
const TABLE_EXTENSION: &str = "csv";

pub struct StorageManager {
    output_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct ExtractionReport<'a> {
    source: String,
    columns: [&'static str; 5],
    constituencies: usize,
    rows: usize,
    skipped: &'a [SkippedConstituency],
    generated_at: String,
}

impl StorageManager {
    /// Writes next to the input file.
    pub fn new() -> Self {
        Self { output_dir: None }
    }

    /// Writes into `output_dir`, creating it if it doesn't exist.
    pub fn with_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<Self, StorageError> {
        let dir = output_dir.as_ref().to_path_buf();

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { output_dir: Some(dir) })
    }

    /// Output path for `input`: same stem, `.csv` extension.
    pub fn table_path_for(&self, input: &Path) -> PathBuf {
        let with_ext = input.with_extension(TABLE_EXTENSION);
        match (&self.output_dir, with_ext.file_name()) {
            (Some(dir), Some(file_name)) => dir.join(file_name),
            _ => with_ext,
        }
    }

    /// Saves the table as comma-separated text, no header row.
    pub fn save_table(&self, table: &ResultTable, input: &Path) -> Result<PathBuf, StorageError> {
        let file_path = self.table_path_for(input);

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&file_path)?;

        for record in table.records() {
            writer.write_record(record)?;
        }
        writer.flush()?;

        tracing::info!("Saved {} rows to {}", table.len(), file_path.display());

        Ok(file_path)
    }

    /// Saves a JSON summary of the extraction, including skipped constituencies.
    pub fn save_report(&self, extraction: &Extraction, input: &Path, report_path: &Path) -> Result<PathBuf, StorageError> {
        let report = ExtractionReport {
            source: input.display().to_string(),
            columns: COLUMNS,
            constituencies: extraction.constituencies,
            rows: extraction.table.len(),
            skipped: &extraction.skipped,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };

        let report_str = serde_json::to_string_pretty(&report)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(report_path, report_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved extraction report to {}", report_path.display());

        Ok(report_path.to_path_buf())
    }
}

impl Default for StorageManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constituency::Constituency;
    use crate::table;

    fn extraction() -> Extraction {
        let mut good = Constituency::new("Anytown");
        good.electorate = "54321".to_string();
        good.append_candidate("J. Doe", "Indep", "1234", "45.6");

        let mut bad = Constituency::new("University");
        bad.candidates.push("Orphan".to_string());

        table::assemble(&[good, bad])
    }

    #[test]
    fn table_path_replaces_extension() {
        let storage = StorageManager::new();
        assert_eq!(storage.table_path_for(Path::new("data/ge1997.htm")), PathBuf::from("data/ge1997.csv"));
        assert_eq!(storage.table_path_for(Path::new("ge1997.html")), PathBuf::from("ge1997.csv"));
    }

    #[test]
    fn table_path_honours_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::with_output_dir(dir.path().join("out")).unwrap();
        assert_eq!(
            storage.table_path_for(Path::new("data/ge1997.htm")),
            dir.path().join("out").join("ge1997.csv")
        );
    }

    #[test]
    fn writes_rows_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ge.htm");

        let path = StorageManager::new().save_table(&extraction().table, &input).unwrap();

        assert_eq!(path, dir.path().join("ge.csv"));
        assert_eq!(fs::read_to_string(path).unwrap(), "Anytown,J. Doe,Indep,1234,45.6\n");
    }

    #[test]
    fn report_lists_skipped_constituencies() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.json");

        StorageManager::new()
            .save_report(&extraction(), Path::new("ge.htm"), &report_path)
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
        assert_eq!(json["columns"], serde_json::json!(["names", "candidates", "parties", "votes", "percent"]));
        assert_eq!(json["constituencies"], 2);
        assert_eq!(json["rows"], 1);
        assert_eq!(json["skipped"][0]["name"], "University");
        assert!(json["generated_at"].is_string());
    }
}
