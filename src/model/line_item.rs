//! The priced output of an extraction run: line items grouped into semester sections.

use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// One priced book entry within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LineItem {
    serial: u32,
    title: String,
    author: String,
    unit_price: Amount,
    net_price: Amount,
    line_total: Amount,
}

impl LineItem {
    /// Builds a line item from a contributing catalog row.
    ///
    /// `net_price = unit_price * (1 - discount/100)` and `line_total = net_price * quantity`,
    /// with discount and quantity taken from the request, not the row.
    pub(crate) fn compute(
        serial: u32,
        title: String,
        author: String,
        unit_price: Amount,
        discount_percent: u8,
        quantity: u32,
    ) -> Self {
        let net_price = unit_price.discounted(discount_percent);
        let line_total = net_price.times(quantity);
        Self {
            serial,
            title,
            author,
            unit_price,
            net_price,
            line_total,
        }
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    pub fn net_price(&self) -> Amount {
        self.net_price
    }

    pub fn line_total(&self) -> Amount {
        self.line_total
    }
}

/// A semester's worth of line items. Never empty: sections that collect nothing are dropped
/// before a `Section` is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Section {
    label: String,
    items: Vec<LineItem>,
}

impl Section {
    pub(crate) fn new(label: String, items: Vec<LineItem>) -> Self {
        Self { label, items }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

/// The complete result of one extraction run, in query order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Quotation {
    sections: Vec<Section>,
    discount_percent: u8,
    quantity: u32,
}

impl Quotation {
    pub(crate) fn new(sections: Vec<Section>, discount_percent: u8, quantity: u32) -> Self {
        Self {
            sections,
            discount_percent,
            quantity,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The number of line items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items().len()).sum()
    }

    /// The sum of every line total in the quotation.
    pub fn grand_total(&self) -> Amount {
        self.sections
            .iter()
            .flat_map(|s| s.items())
            .map(|item| item.line_total())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(serial: u32, price: &str) -> LineItem {
        LineItem::compute(
            serial,
            format!("Book {serial}"),
            "Author".to_string(),
            Amount::parse_lenient(price),
            40,
            40,
        )
    }

    #[test]
    fn test_compute_applies_discount_then_quantity() {
        let li = item(1, "100");
        assert_eq!(li.net_price().value(), Decimal::from(60));
        assert_eq!(li.line_total().value(), Decimal::from(2400));
    }

    #[test]
    fn test_grand_total_spans_sections() {
        let quotation = Quotation::new(
            vec![
                Section::new("Term A".to_string(), vec![item(1, "100")]),
                Section::new("Term B".to_string(), vec![item(2, "200")]),
            ],
            40,
            40,
        );
        assert_eq!(quotation.item_count(), 2);
        assert_eq!(quotation.grand_total().value(), Decimal::from(7200));
    }
}
