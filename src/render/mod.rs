//! Turns a `Quotation` into a downloadable document.
//!
//! The extraction core only promises the data it supplies; everything about pages, tables and
//! styling lives behind the `Render` trait. The production implementation is `PdfRenderer`.

pub(crate) mod layout;
mod pdf;

pub use pdf::PdfRenderer;

use crate::model::{Quotation, Recipient};
use crate::Result;
use chrono::{DateTime, Local};

/// Renders a quotation into a byte stream for delivery to the user.
pub trait Render {
    fn render(
        &self,
        quotation: &Quotation,
        recipient: &Recipient,
        issued: DateTime<Local>,
    ) -> Result<Vec<u8>>;
}
