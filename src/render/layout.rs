//! The static layout descriptor for the quotation document.
//!
//! Colors, column widths and the fixed text blocks are configuration data, not logic. The
//! renderer consumes `LAYOUT`; nothing in here draws anything. Lengths are millimeters on an
//! A4 page.

pub(crate) struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub(crate) const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub(crate) const NAVY: Rgb = Rgb { r: 0, g: 51, b: 102 };
pub(crate) const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub(crate) const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub(crate) const LIGHT_BLUE: Rgb = Rgb {
    r: 204,
    g: 229,
    b: 255,
};
pub(crate) const PEACH: Rgb = Rgb {
    r: 255,
    g: 218,
    b: 185,
};

pub(crate) struct Column {
    pub header: &'static str,
    pub width: f32,
}

pub(crate) struct Layout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Content resumes at this height on every page, below the letterhead.
    pub content_top: f32,
    /// Rows that would start below this height move to a new page.
    pub page_break_at: f32,

    pub banner: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub contact: &'static str,

    pub info_box_height: f32,
    pub date_box_width: f32,

    pub columns: [Column; 8],
    pub header_row_height: f32,
    pub row_height: f32,
    pub total_row_height: f32,
    pub title_chars: usize,
    pub author_chars: usize,
    pub currency: &'static str,

    /// Height from the page bottom where the terms and signature block begins.
    pub terms_offset: f32,
    pub terms_heading: &'static str,
    pub terms: [&'static str; 7],
    pub signature: &'static str,
    pub signature_city: &'static str,
}

pub(crate) const LAYOUT: Layout = Layout {
    page_width: 210.0,
    page_height: 297.0,
    margin: 10.0,
    content_top: 45.0,
    page_break_at: 277.0,

    banner: "FRONTLINE PUBLICATIONS",
    tagline: "Publisher, Distributor & Library Suppliers",
    address: "Door No. F-4 & F-5, First Floor, CAC/Kothi RTC Bus Terminal Complex, Hyderabad.",
    contact: "Contact: 8977500816 | Email: frontlinepub@gmail.com | Website: www.flpublications.com",

    info_box_height: 25.0,
    date_box_width: 60.0,

    columns: [
        Column { header: "S.No.", width: 12.0 },
        Column { header: "Title", width: 78.0 },
        Column { header: "Author", width: 35.0 },
        Column { header: "Price", width: 15.0 },
        Column { header: "Disc%", width: 13.0 },
        Column { header: "Qty.", width: 12.0 },
        Column { header: "Net", width: 15.0 },
        Column { header: "Total", width: 20.0 },
    ],
    header_row_height: 10.0,
    row_height: 8.0,
    total_row_height: 12.0,
    title_chars: 45,
    author_chars: 22,
    currency: "INR",

    terms_offset: 75.0,
    terms_heading: "TERMS & CONDITIONS",
    terms: [
        "1. Books supplied are in accordance with the order hence will not be taken back.",
        "2. Certified that correct Publisher's Price have been charged.",
        "3. Latest editions of Books have been supplied & current conversion Rates.",
        "4. Out station payments should be made by Bank Draft / payable Hyderabad.",
        "5. Interest @ 25% per annum will be charged if the bill is not paid.",
        "6. All Disputes are subject to Hyderabad Jurisdiction only.",
        "7. Note: All prices are subject to change without notice.",
    ],
    signature: "BOOKSEA",
    signature_city: "HYDERABAD",
};

impl Layout {
    /// The table's full width, i.e. the sum of the column widths.
    pub(crate) fn table_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}
