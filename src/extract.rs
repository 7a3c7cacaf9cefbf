//! Semester-section extraction: turns a catalog and an ordered list of section queries into
//! priced line items.
//!
//! Each query is matched against the catalog independently, scanning from the top. This is
//! deliberate: sections are not required to be contiguous or non-overlapping in source order,
//! and query order (not source order) decides output order and serial numbering.

use crate::catalog::{Catalog, COL_AUTHOR, COL_SERIAL, COL_TITLE, COL_UNIT_PRICE};
use crate::model::{Amount, LineItem, Quotation, Section};
use crate::utils::clean_text;
use crate::Result;
use anyhow::bail;
use tracing::debug;

/// A row whose text contains this marker ends the section it appears in.
const SECTION_END_MARKER: &str = "total";

/// The running serial number for line items, shared across every section in one run.
struct SerialCounter {
    next: u32,
}

impl SerialCounter {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn take(&mut self) -> u32 {
        let serial = self.next;
        self.next += 1;
        serial
    }
}

/// Collects the line items for every section query, in query order.
///
/// # Errors
/// Returns an error when no section matched or no rows qualified in any matched section.
/// This is a user-facing terminal condition, not a retryable fault.
pub fn extract(
    catalog: &Catalog,
    queries: &[String],
    discount_percent: u8,
    quantity: u32,
) -> Result<Quotation> {
    let mut serials = SerialCounter::new();
    let mut sections = Vec::new();

    for query in queries {
        let items = collect_section(catalog, query, discount_percent, quantity, &mut serials);
        if items.is_empty() {
            // Sections that collect nothing are dropped, not emitted empty.
            debug!("No qualifying rows for section query '{query}'");
            continue;
        }
        debug!("Collected {} line items for '{query}'", items.len());
        sections.push(Section::new(query.clone(), items));
    }

    if sections.is_empty() {
        bail!("No data found for the semesters provided");
    }
    Ok(Quotation::new(sections, discount_percent, quantity))
}

/// Scans the catalog from the top for the section matching `query` and collects its rows.
///
/// A row starts the section when its lowercased text contains the query substring; the header
/// row itself is skipped. Collection stops at a row containing the end marker, or at a row
/// with an empty serial column once at least one item has been collected. Rows whose serial
/// column is not all digits are skipped without stopping collection (sub-headers, separators).
fn collect_section(
    catalog: &Catalog,
    query: &str,
    discount_percent: u8,
    quantity: u32,
    serials: &mut SerialCounter,
) -> Vec<LineItem> {
    let needle = query.to_lowercase();
    let mut found_section = false;
    let mut items = Vec::new();

    for row in catalog.rows() {
        let text = Catalog::row_text(row);
        if text.contains(&needle) {
            found_section = true;
            continue;
        }
        if !found_section {
            continue;
        }

        let serial_cell = row.get(COL_SERIAL).map(|c| c.trim()).unwrap_or("");
        if text.contains(SECTION_END_MARKER) || (serial_cell.is_empty() && !items.is_empty()) {
            break;
        }
        if serial_cell.is_empty() || !serial_cell.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        let cell = |ix: usize| row.get(ix).map(String::as_str).unwrap_or("");
        let unit_price = Amount::parse_lenient(cell(COL_UNIT_PRICE));
        items.push(LineItem::compute(
            serials.take(),
            clean_text(cell(COL_TITLE)),
            clean_text(cell(COL_AUTHOR)),
            unit_price,
            discount_percent,
            quantity,
        ));
    }
    items
}
