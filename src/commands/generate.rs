use crate::args::GenerateArgs;
use crate::commands::Out;
use crate::extract::extract;
use crate::model::{Amount, Recipient};
use crate::render::{PdfRenderer, Render};
use crate::{utils, Catalog, Result};
use anyhow::bail;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Structured output of the `generate` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GenerateSummary {
    sections: usize,
    line_items: usize,
    grand_total: Amount,
    output: String,
}

/// Generates a quotation PDF and writes it to the output directory.
///
/// The flow mirrors one "request": validate the inputs, load the catalog fresh, extract the
/// requested semester sections, render, and write the file. Any failure aborts the whole
/// request with a single user-facing message; nothing is retried and no partial output is
/// left behind.
///
/// # Errors
/// - A required field (organization name, semester list) is blank.
/// - The catalog file for the course type is missing (the error names the file).
/// - No qualifying data was found for any requested semester.
pub fn generate(args: &GenerateArgs, data_dir: &Path) -> Result<Out<GenerateSummary>> {
    if args.org().trim().is_empty() {
        bail!("Please enter the organization name");
    }
    let semesters: Vec<String> = args
        .semesters()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if semesters.is_empty() {
        bail!("Please enter at least one semester name");
    }

    let catalog = Catalog::load(data_dir, args.course())?;
    let quotation = extract(&catalog, &semesters, args.discount(), args.quantity())?;
    debug!(
        "Extracted {} section(s), {} line item(s)",
        quotation.sections().len(),
        quotation.item_count()
    );

    let recipient = Recipient::new(args.org(), args.location(), args.phone());
    let bytes = PdfRenderer::new().render(&quotation, &recipient, Local::now())?;

    let path = output_path(args.out_dir(), args.org());
    utils::write(&path, &bytes)?;

    let summary = GenerateSummary {
        sections: quotation.sections().len(),
        line_items: quotation.item_count(),
        grand_total: quotation.grand_total(),
        output: path.display().to_string(),
    };
    Ok(Out::new(
        format!("Wrote quotation to {}", path.display()),
        summary,
    ))
}

fn output_path(out_dir: &Path, org: &str) -> PathBuf {
    out_dir.join(format!("Quotation_{}.pdf", utils::sanitize_file_name(org)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;
    use crate::CourseType;
    use tempfile::TempDir;

    fn args(org: &str, semesters: &str, out_dir: &Path) -> GenerateArgs {
        GenerateArgs::new(
            org,
            "Hanamkonda",
            "98480 00000",
            CourseType::Bsc,
            semesters,
            40,
            40,
            out_dir,
        )
    }

    #[test]
    fn test_generate_writes_pdf() {
        let dir = TempDir::new().unwrap();
        test::write_catalog(dir.path(), CourseType::Bsc, &test::term_a_rows());

        let out = generate(&args("St Mary College", "Term A", dir.path()), dir.path()).unwrap();

        let expected = dir.path().join("Quotation_St_Mary_College.pdf");
        assert!(expected.is_file());
        assert!(out.message().contains("Quotation_St_Mary_College.pdf"));

        let summary = out.structure().unwrap();
        assert_eq!(summary.sections, 1);
        assert_eq!(summary.line_items, 2);

        let bytes = std::fs::read(&expected).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_generate_rejects_blank_org() {
        let dir = TempDir::new().unwrap();
        let err = generate(&args("   ", "Term A", dir.path()), dir.path()).unwrap_err();
        assert!(err.to_string().contains("organization name"));
    }

    #[test]
    fn test_generate_rejects_blank_semesters() {
        let dir = TempDir::new().unwrap();
        let err = generate(&args("St Mary College", " , ", dir.path()), dir.path()).unwrap_err();
        assert!(err.to_string().contains("semester"));
    }

    #[test]
    fn test_generate_missing_catalog_names_file() {
        let dir = TempDir::new().unwrap();
        let err = generate(&args("St Mary College", "Term A", dir.path()), dir.path()).unwrap_err();
        assert!(err.to_string().contains("bsc_quotations.csv"));
    }

    #[test]
    fn test_generate_no_data_for_unknown_semester() {
        let dir = TempDir::new().unwrap();
        test::write_catalog(dir.path(), CourseType::Bsc, &test::term_a_rows());

        let err =
            generate(&args("St Mary College", "No Such Term", dir.path()), dir.path()).unwrap_err();
        assert!(err.to_string().contains("No data found"));
        assert!(!dir.path().join("Quotation_St_Mary_College.pdf").exists());
    }
}
