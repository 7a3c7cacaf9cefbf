//! Types that represent the core data model, such as `Amount`, `LineItem` and `Quotation`.
mod amount;
mod line_item;
mod recipient;

pub use amount::Amount;
pub use line_item::{LineItem, Quotation, Section};
pub use recipient::Recipient;
