//! Loading of the tabular catalog files that back quotation generation.
//!
//! A catalog file is a headerless CSV where column positions are the contract: column 0 holds
//! a row serial number (or a section marker), column 1 the title, column 3 the author, and
//! column 5 the unit price as currency-formatted text. Rows may be ragged.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Column that holds the source row serial number, or a non-numeric section marker.
pub(crate) const COL_SERIAL: usize = 0;
/// Column that holds the book title.
pub(crate) const COL_TITLE: usize = 1;
/// Column that holds the author name.
pub(crate) const COL_AUTHOR: usize = 3;
/// Column that holds the unit price as currency-formatted text.
pub(crate) const COL_UNIT_PRICE: usize = 5;

/// Selects which catalog file a quotation is generated from.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    #[default]
    Bsc,
    Gnm,
}

serde_plain::derive_display_from_serialize!(CourseType);
serde_plain::derive_fromstr_from_deserialize!(CourseType);

impl CourseType {
    /// The fixed catalog file name for this course type.
    pub fn file_name(&self) -> &'static str {
        match self {
            CourseType::Bsc => "bsc_quotations.csv",
            CourseType::Gnm => "gnm_quotation.csv",
        }
    }
}

/// An ordered set of untyped catalog rows, loaded fresh for each generation run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<Vec<String>>,
}

impl Catalog {
    /// Reads the catalog file for `course` from `data_dir`.
    ///
    /// # Errors
    /// - Returns an error naming the expected file when it cannot be opened.
    /// - Returns an error if a row cannot be read as CSV.
    pub fn load(data_dir: &Path, course: CourseType) -> Result<Self> {
        let path = data_dir.join(course.file_name());
        let file = std::fs::File::open(&path).with_context(|| {
            format!(
                "Could not find {}. Ensure it is in the data directory '{}'",
                course.file_name(),
                data_dir.display()
            )
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("Malformed row in {}", path.display()))?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        debug!("Loaded {} rows from {}", rows.len(), path.display());
        Ok(Self { rows })
    }

    /// Creates a catalog directly from rows, bypassing the file system.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The lowercased concatenation of a row's cells, used for section matching.
    pub(crate) fn row_text(row: &[String]) -> String {
        row.join(" ").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;
    use tempfile::TempDir;

    #[test]
    fn test_course_file_names() {
        assert_eq!(CourseType::Bsc.file_name(), "bsc_quotations.csv");
        assert_eq!(CourseType::Gnm.file_name(), "gnm_quotation.csv");
    }

    #[test]
    fn test_load_missing_file_names_expected_file() {
        let dir = TempDir::new().unwrap();
        let err = Catalog::load(dir.path(), CourseType::Gnm).unwrap_err();
        assert!(err.to_string().contains("gnm_quotation.csv"));
    }

    #[test]
    fn test_load_reads_headerless_rows() {
        let dir = TempDir::new().unwrap();
        let rows = test::term_a_rows();
        test::write_catalog(dir.path(), CourseType::Bsc, &rows);

        let catalog = Catalog::load(dir.path(), CourseType::Bsc).unwrap();
        assert_eq!(catalog.rows().len(), rows.len());
        assert_eq!(catalog.rows()[1][1], "Book X");
    }

    #[test]
    fn test_row_text_joins_and_lowercases() {
        let row = test::row(&["1", "Book X", "", "Author Y"]);
        assert_eq!(Catalog::row_text(&row), "1 book x  author y");
    }
}
