//! The lopdf-backed implementation of the `Render` trait.
//!
//! Pages are painted in millimeters from the top-left corner (the layout descriptor's frame of
//! reference) and converted to PDF points, bottom-left origin, when operations are emitted.
//! Text uses the built-in Helvetica fonts with WinAnsi encoding, which is why all text passes
//! through the Latin-1 coercion before it reaches this module.

use crate::model::{LineItem, Quotation, Recipient};
use crate::render::layout::{Layout, Rgb, BLACK, LAYOUT, LIGHT_BLUE, NAVY, PEACH, RED, WHITE};
use crate::render::Render;
use crate::Result;
use chrono::{DateTime, Local};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use std::mem;
use tracing::debug;

const MM_TO_PT: f32 = 72.0 / 25.4;

/// Renders a quotation as a paginated A4 PDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Render for PdfRenderer {
    fn render(
        &self,
        quotation: &Quotation,
        recipient: &Recipient,
        issued: DateTime<Local>,
    ) -> Result<Vec<u8>> {
        let layout = &LAYOUT;
        let mut pages: Vec<Page> = Vec::new();
        let mut page = Page::new();
        letterhead(&mut page, layout);

        let mut y = info_boxes(&mut page, layout, recipient, issued);
        table_header(&mut page, layout, y);
        y += layout.header_row_height;

        for section in quotation.sections() {
            if y + layout.row_height > layout.page_break_at {
                y = break_page(&mut pages, &mut page, layout);
            }
            section_row(&mut page, layout, y, section.label());
            y += layout.row_height;

            for item in section.items() {
                if y + layout.row_height > layout.page_break_at {
                    y = break_page(&mut pages, &mut page, layout);
                }
                item_row(&mut page, layout, y, item, quotation);
                y += layout.row_height;
            }
        }

        if y + layout.total_row_height > layout.page_break_at {
            y = break_page(&mut pages, &mut page, layout);
        }
        total_row(&mut page, layout, y, quotation);
        terms_block(&mut page, layout);
        pages.push(page);

        debug!("Rendered quotation across {} page(s)", pages.len());
        assemble(pages)
    }
}

/// Finishes the current page and starts a fresh one with the letterhead.
fn break_page(pages: &mut Vec<Page>, page: &mut Page, layout: &Layout) -> f32 {
    pages.push(mem::replace(page, Page::new()));
    letterhead(page, layout);
    layout.content_top
}

/// The fixed letterhead drawn at the top of every page.
fn letterhead(page: &mut Page, layout: &Layout) {
    let center = layout.page_width / 2.0;
    page.text_centered(center, 18.0, Font::Bold, 22.0, &RED, layout.banner);
    page.text_centered(center, 24.0, Font::Bold, 10.0, &NAVY, layout.tagline);
    page.text_centered(center, 28.5, Font::Regular, 9.0, &BLACK, layout.address);
    page.text_centered(center, 32.5, Font::Regular, 9.0, &BLACK, layout.contact);
    page.hline(layout.margin, layout.page_width - layout.margin, 37.0);
}

/// First-page recipient and date boxes. Returns the y where the table begins.
fn info_boxes(
    page: &mut Page,
    layout: &Layout,
    recipient: &Recipient,
    issued: DateTime<Local>,
) -> f32 {
    let y = layout.content_top;
    let h = layout.info_box_height;
    let date_x = layout.page_width - layout.margin - layout.date_box_width;

    page.rect_stroke(layout.margin, y, date_x - layout.margin, h);
    let text_x = layout.margin + 2.0;
    page.text(text_x, y + 6.0, Font::Regular, 10.0, &BLACK, "To, The Principal,");
    page.text(text_x, y + 12.0, Font::Bold, 11.0, &NAVY, recipient.org());
    page.text(text_x, y + 17.0, Font::Regular, 10.0, &BLACK, recipient.location());
    page.text(text_x, y + 22.0, Font::Regular, 10.0, &BLACK, recipient.phone());

    page.rect_stroke(date_x, y, layout.date_box_width, h);
    let date = format!("Date: {}", issued.format("%d-%m-%y"));
    let number = format!("Quotation: {}", issued.format("%y-%m-%d-%H"));
    page.text(date_x + 2.0, y + 8.0, Font::Bold, 10.0, &BLACK, &date);
    page.text(date_x + 2.0, y + 15.0, Font::Bold, 10.0, &BLACK, &number);

    y + h + 5.0
}

/// The navy column-header row. Drawn once, above the first section.
fn table_header(page: &mut Page, layout: &Layout, y: f32) {
    let h = layout.header_row_height;
    let mut x = layout.margin;
    for column in &layout.columns {
        page.rect_fill(x, y, column.width, h, &NAVY);
        page.rect_stroke(x, y, column.width, h);
        let center = x + column.width / 2.0;
        page.text_centered(center, cell_baseline(y, h, 9.0), Font::Bold, 9.0, &WHITE, column.header);
        x += column.width;
    }
}

/// A light-blue label row announcing a semester section.
fn section_row(page: &mut Page, layout: &Layout, y: f32, label: &str) {
    let h = layout.row_height;
    page.rect_fill(layout.margin, y, layout.table_width(), h, &LIGHT_BLUE);
    page.rect_stroke(layout.margin, y, layout.table_width(), h);
    page.text(
        layout.margin + 3.0,
        cell_baseline(y, h, 9.0),
        Font::Bold,
        9.0,
        &BLACK,
        label,
    );
}

fn item_row(page: &mut Page, layout: &Layout, y: f32, item: &LineItem, quotation: &Quotation) {
    let title: String = item.title().chars().take(layout.title_chars).collect();
    let author: String = item.author().chars().take(layout.author_chars).collect();
    let cells = [
        Cell::Centered(item.serial().to_string()),
        Cell::Left(title),
        Cell::Left(author),
        Cell::Centered(item.unit_price().whole()),
        Cell::Centered(format!("{}%", quotation.discount_percent())),
        Cell::Centered(quotation.quantity().to_string()),
        Cell::Centered(item.net_price().whole()),
        Cell::Centered(item.line_total().whole()),
    ];

    let h = layout.row_height;
    let mut x = layout.margin;
    for (column, cell) in layout.columns.iter().zip(cells.iter()) {
        page.rect_stroke(x, y, column.width, h);
        let baseline = cell_baseline(y, h, 9.0);
        match cell {
            Cell::Left(text) => {
                page.text(x + 2.0, baseline, Font::Regular, 9.0, &BLACK, text)
            }
            Cell::Centered(text) => page.text_centered(
                x + column.width / 2.0,
                baseline,
                Font::Regular,
                9.0,
                &BLACK,
                text,
            ),
        }
        x += column.width;
    }
}

/// The peach grand-total row, right-aligned under the table.
fn total_row(page: &mut Page, layout: &Layout, y: f32, quotation: &Quotation) {
    let h = layout.total_row_height;
    let label_w = 15.0;
    let value_w = 30.0;
    let value_x = layout.page_width - layout.margin - value_w;
    let label_x = value_x - label_w;

    page.rect_fill(label_x, y, label_w, h, &PEACH);
    page.rect_stroke(label_x, y, label_w, h);
    page.text_centered(
        label_x + label_w / 2.0,
        cell_baseline(y, h, 11.0),
        Font::Bold,
        11.0,
        &BLACK,
        "Total",
    );

    let value = format!("{} {}", layout.currency, quotation.grand_total());
    page.rect_fill(value_x, y, value_w, h, &PEACH);
    page.rect_stroke(value_x, y, value_w, h);
    page.text_centered(
        value_x + value_w / 2.0,
        cell_baseline(y, h, 11.0),
        Font::Bold,
        11.0,
        &RED,
        &value,
    );
}

/// The fixed terms-and-conditions and signature block on the final page.
fn terms_block(page: &mut Page, layout: &Layout) {
    let mut y = layout.page_height - layout.terms_offset;
    page.text(layout.margin, y + 5.0, Font::Bold, 11.0, &NAVY, layout.terms_heading);
    y += 9.0;
    for term in &layout.terms {
        page.text(layout.margin, y + 3.0, Font::Regular, 8.0, &BLACK, term);
        y += 4.0;
    }
    y += 5.0;
    let right = layout.page_width - layout.margin;
    page.text_right(right, y + 5.0, Font::Bold, 14.0, &NAVY, layout.signature);
    page.text_right(right, y + 10.0, Font::Bold, 10.0, &NAVY, layout.signature_city);
}

/// Builds the final document from the painted pages.
fn assemble(pages: Vec<Page>) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });

    let count = pages.len() as i64;
    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let content = Content {
            operations: page.ops,
        };
        let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => stream_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (LAYOUT.page_width * MM_TO_PT).into(),
            (LAYOUT.page_height * MM_TO_PT).into(),
        ],
        "Resources" => dictionary! {
            "Font" => dictionary! {
                "F1" => font_regular,
                "F2" => font_bold,
            },
        },
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[derive(Debug, Clone, Copy)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

enum Cell {
    Left(String),
    Centered(String),
}

/// The baseline for text vertically centered in a cell starting at `y` with height `h`.
fn cell_baseline(y: f32, h: f32, size: f32) -> f32 {
    y + h / 2.0 + 0.35 * size / MM_TO_PT
}

/// A rough advance-width estimate for the built-in Helvetica fonts, good enough for
/// centering and right-aligning short labels.
fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 / MM_TO_PT
}

fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

/// One page's worth of content-stream operations, painted in top-down millimeters.
struct Page {
    ops: Vec<Operation>,
}

impl Page {
    fn new() -> Self {
        Self { ops: Vec::new() }
    }

    fn x_pt(x: f32) -> f32 {
        x * MM_TO_PT
    }

    fn y_pt(y: f32) -> f32 {
        (LAYOUT.page_height - y) * MM_TO_PT
    }

    fn color_operands(color: &Rgb) -> Vec<Object> {
        vec![
            (f32::from(color.r) / 255.0).into(),
            (f32::from(color.g) / 255.0).into(),
            (f32::from(color.b) / 255.0).into(),
        ]
    }

    fn text(&mut self, x: f32, baseline: f32, font: Font, size: f32, color: &Rgb, s: &str) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font.name().into(), size.into()]));
        self.ops.push(Operation::new("rg", Self::color_operands(color)));
        self.ops.push(Operation::new(
            "Td",
            vec![Self::x_pt(x).into(), Self::y_pt(baseline).into()],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(latin1(s), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn text_centered(
        &mut self,
        center: f32,
        baseline: f32,
        font: Font,
        size: f32,
        color: &Rgb,
        s: &str,
    ) {
        let x = center - text_width_mm(s, size) / 2.0;
        self.text(x, baseline, font, size, color, s);
    }

    fn text_right(&mut self, right: f32, baseline: f32, font: Font, size: f32, color: &Rgb, s: &str) {
        let x = right - text_width_mm(s, size);
        self.text(x, baseline, font, size, color, s);
    }

    fn rect_fill(&mut self, x: f32, y: f32, w: f32, h: f32, color: &Rgb) {
        self.ops.push(Operation::new("rg", Self::color_operands(color)));
        self.ops.push(Operation::new(
            "re",
            vec![
                Self::x_pt(x).into(),
                Self::y_pt(y + h).into(),
                (w * MM_TO_PT).into(),
                (h * MM_TO_PT).into(),
            ],
        ));
        self.ops.push(Operation::new("f", vec![]));
    }

    fn rect_stroke(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(Operation::new("RG", Self::color_operands(&BLACK)));
        self.ops.push(Operation::new(
            "re",
            vec![
                Self::x_pt(x).into(),
                Self::y_pt(y + h).into(),
                (w * MM_TO_PT).into(),
                (h * MM_TO_PT).into(),
            ],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn hline(&mut self, x1: f32, x2: f32, y: f32) {
        self.ops.push(Operation::new("RG", Self::color_operands(&BLACK)));
        self.ops.push(Operation::new(
            "m",
            vec![Self::x_pt(x1).into(), Self::y_pt(y).into()],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![Self::x_pt(x2).into(), Self::y_pt(y).into()],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use crate::test;
    use crate::Catalog;

    fn render_rows(rows: Vec<Vec<String>>, query: &str) -> Vec<u8> {
        let catalog = Catalog::from_rows(rows);
        let quotation = extract(&catalog, &[query.to_string()], 40, 40).unwrap();
        let recipient = Recipient::new("Test College", "Hanamkonda", "98480 00000");
        PdfRenderer::new()
            .render(&quotation, &recipient, Local::now())
            .unwrap()
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_rows(test::term_a_rows(), "Term A");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_small_quotation_is_one_page() {
        let bytes = render_rows(test::term_a_rows(), "Term A");
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_large_section_paginates() {
        let bytes = render_rows(test::big_section_rows("Term A", 60), "Term A");
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() >= 2);
    }

    #[test]
    fn test_non_latin1_text_is_coerced() {
        assert_eq!(latin1("caf\u{e9}"), b"caf\xe9".to_vec());
        assert_eq!(latin1("\u{20b9}"), b"?".to_vec());
    }
}
