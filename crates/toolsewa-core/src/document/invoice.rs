//! GST invoice document builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::model::{Block, Document};

/// One invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// GST rate in percent
    pub gst_rate: f64,
}

impl InvoiceItem {
    /// Value before tax.
    pub fn taxable_value(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Tax on this line.
    pub fn gst_amount(&self) -> f64 {
        self.taxable_value() * (self.gst_rate / 100.0)
    }

    /// Value including tax.
    pub fn line_total(&self) -> f64 {
        self.taxable_value() + self.gst_amount()
    }
}

/// Invoice content as entered on the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Seller details (name, address, GSTIN) as free text
    pub business: String,
    /// Buyer details as free text
    pub client: String,
    pub invoice_date: NaiveDate,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Sum of all line totals, tax included.
    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(InvoiceItem::line_total).sum()
    }

    /// Display string for the activity log.
    pub fn summary(&self) -> String {
        format!("Generated Invoice for ₹{:.2}", self.grand_total())
    }

    /// Builds the renderable invoice document.
    ///
    /// Blank seller/buyer fields fall back to placeholder labels so the
    /// layout never collapses.
    pub fn to_document(&self) -> Document {
        let business = if self.business.trim().is_empty() {
            "Your Business Name"
        } else {
            self.business.as_str()
        };
        let client = if self.client.trim().is_empty() {
            "Client Name"
        } else {
            self.client.as_str()
        };

        let mut document = Document::new("INVOICE");
        document.push_key_value("From", business);
        document.push_key_value("To", client);
        document.push_key_value("Date", self.invoice_date.to_string());
        document.push(Block::Divider);

        let rows = self
            .items
            .iter()
            .map(|item| {
                vec![
                    if item.description.trim().is_empty() {
                        "Item".to_string()
                    } else {
                        item.description.clone()
                    },
                    format!("{}", item.quantity),
                    format!("{:.2}", item.unit_price),
                    format!("{}%", item.gst_rate),
                    format!("{:.2}", item.line_total()),
                ]
            })
            .collect();
        document.push(Block::Table {
            headers: vec![
                "Item".to_string(),
                "Qty".to_string(),
                "Price".to_string(),
                "GST %".to_string(),
                "Total".to_string(),
            ],
            rows,
        });

        document.push(Block::Divider);
        document.push_key_value("Grand Total", format!("Rs. {:.2}", self.grand_total()));
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_invoice() -> Invoice {
        Invoice {
            business: "Sharma Traders".to_string(),
            client: "Acme Pvt Ltd".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            items: vec![
                InvoiceItem {
                    description: "Service Charge".to_string(),
                    quantity: 1.0,
                    unit_price: 1_000.0,
                    gst_rate: 18.0,
                },
                InvoiceItem {
                    description: "Consulting".to_string(),
                    quantity: 2.0,
                    unit_price: 500.0,
                    gst_rate: 18.0,
                },
            ],
        }
    }

    #[test]
    fn test_line_math() {
        let item = InvoiceItem {
            description: "Service Charge".to_string(),
            quantity: 2.0,
            unit_price: 1_000.0,
            gst_rate: 18.0,
        };
        assert_eq!(item.taxable_value(), 2_000.0);
        assert_eq!(item.gst_amount(), 360.0);
        assert_eq!(item.line_total(), 2_360.0);
    }

    #[test]
    fn test_grand_total_and_summary() {
        let invoice = sample_invoice();
        // 1,180 + 1,180 = 2,360
        assert_eq!(invoice.grand_total(), 2_360.0);
        assert_eq!(invoice.summary(), "Generated Invoice for ₹2360.00");
    }

    #[test]
    fn test_document_shape() {
        let document = sample_invoice().to_document();
        assert_eq!(document.title, "INVOICE");

        let table = document
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { headers, rows } => Some((headers, rows)),
                _ => None,
            })
            .expect("invoice document has a table");
        assert_eq!(table.0.len(), 5);
        assert_eq!(table.1.len(), 2);
        assert_eq!(table.1[0][4], "1180.00");
    }

    #[test]
    fn test_blank_parties_use_placeholders() {
        let mut invoice = sample_invoice();
        invoice.business = String::new();
        invoice.client = "  ".to_string();
        let document = invoice.to_document();

        let froms: Vec<_> = document
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::KeyValue { label, value } => Some((label.as_str(), value.as_str())),
                _ => None,
            })
            .collect();
        assert!(froms.contains(&("From", "Your Business Name")));
        assert!(froms.contains(&("To", "Client Name")));
    }
}
