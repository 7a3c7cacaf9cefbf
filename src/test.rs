//! Shared test fixtures for building catalogs.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::CourseType;
use std::path::Path;

/// Builds a catalog row from string cells.
pub(crate) fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// One section, "Term A", with two priced rows and a trailing total marker.
///
/// With discount 40 and quantity 40 this yields nets 60 and 120, line totals 2400 and 4800,
/// grand total 7200.
pub(crate) fn term_a_rows() -> Vec<Vec<String>> {
    vec![
        row(&["", "Term A Books", "", "", "", ""]),
        row(&["1", "Book X", "", "Author Y", "", "100"]),
        row(&["2", "Book Z", "", "Author W", "", "200"]),
        row(&["", "total", "", "", "", "300"]),
    ]
}

/// Two sections, "Term A" then "Term B", each with two priced rows.
pub(crate) fn two_term_rows() -> Vec<Vec<String>> {
    vec![
        row(&["", "Term A Books", "", "", "", ""]),
        row(&["1", "Book X", "", "Author Y", "", "100"]),
        row(&["2", "Book Z", "", "Author W", "", "200"]),
        row(&["", "total", "", "", "", "300"]),
        row(&["", "Term B Books", "", "", "", ""]),
        row(&["1", "Book P", "", "Author Q", "", "150"]),
        row(&["2", "Book R", "", "Author S", "", "250"]),
        row(&["", "total", "", "", "", "400"]),
    ]
}

/// One section with `count` numbered rows, for pagination tests.
pub(crate) fn big_section_rows(label: &str, count: usize) -> Vec<Vec<String>> {
    let mut rows = vec![row(&["", label, "", "", "", ""])];
    for n in 1..=count {
        rows.push(vec![
            n.to_string(),
            format!("Book {n}"),
            String::new(),
            format!("Author {n}"),
            String::new(),
            "100".to_string(),
        ]);
    }
    rows.push(row(&["", "total", "", "", "", ""]));
    rows
}

/// Writes `rows` as the catalog file for `course` under `dir`.
pub(crate) fn write_catalog(dir: &Path, course: CourseType, rows: &[Vec<String>]) {
    let path = dir.join(course.file_name());
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&path)
        .unwrap();
    for row in rows {
        writer.write_record(row).unwrap();
    }
    writer.flush().unwrap();
}
