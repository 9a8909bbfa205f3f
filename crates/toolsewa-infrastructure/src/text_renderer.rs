//! Plain-text document renderer.
//!
//! Deterministic fallback renderer used by the CLI and the tests; binary
//! formats (PDF) come from external renderers implementing the same trait.

use toolsewa_core::document::{Block, Document, DocumentRenderer};
use toolsewa_core::error::Result;

const DIVIDER_WIDTH: usize = 40;

/// Renders documents to aligned UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_table(out: &mut String, headers: &[String], rows: &[Vec<String>]) {
        // Column widths: max of header and cell widths per column.
        let columns = headers.len();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().take(columns).enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let format_row = |cells: &[String], widths: &[usize]| -> String {
            cells
                .iter()
                .take(widths.len())
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        out.push_str(&format_row(headers, &widths));
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (columns.saturating_sub(1))));
        out.push('\n');
        for row in rows {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
        }
    }
}

impl DocumentRenderer for PlainTextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        let mut out = String::new();
        out.push_str(&document.title);
        out.push('\n');
        out.push_str(&"=".repeat(document.title.chars().count().max(1)));
        out.push('\n');

        for block in &document.blocks {
            match block {
                Block::Heading(text) => {
                    out.push('\n');
                    out.push_str(text);
                    out.push('\n');
                    out.push_str(&"-".repeat(text.chars().count().max(1)));
                    out.push('\n');
                }
                Block::Paragraph(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                Block::KeyValue { label, value } => {
                    out.push_str(label);
                    out.push_str(": ");
                    out.push_str(value);
                    out.push('\n');
                }
                Block::Table { headers, rows } => {
                    Self::render_table(&mut out, headers, rows);
                }
                Block::Divider => {
                    out.push_str(&"-".repeat(DIVIDER_WIDTH));
                    out.push('\n');
                }
            }
        }

        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use toolsewa_core::document::{Invoice, InvoiceItem};

    fn render_to_string(document: &Document) -> String {
        let bytes = PlainTextRenderer::new().render(document).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_renders_title_and_key_values() {
        let mut document = Document::new("INVOICE");
        document.push_key_value("From", "Sharma Traders");

        let text = render_to_string(&document);
        assert!(text.starts_with("INVOICE\n=======\n"));
        assert!(text.contains("From: Sharma Traders\n"));
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let mut document = Document::new("T");
        document.push(Block::Table {
            headers: vec!["Item".to_string(), "Total".to_string()],
            rows: vec![
                vec!["Service Charge".to_string(), "1180.00".to_string()],
                vec!["x".to_string(), "9.00".to_string()],
            ],
        });

        let text = render_to_string(&document);
        let lines: Vec<&str> = text.lines().collect();
        // header, rule, two rows after the title block
        assert!(lines.contains(&"Item            Total"));
        assert!(lines.contains(&"Service Charge  1180.00"));
        assert!(lines.contains(&"x               9.00"));
    }

    #[test]
    fn test_invoice_document_renders_grand_total() {
        let invoice = Invoice {
            business: "Sharma Traders".to_string(),
            client: "Acme".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            items: vec![InvoiceItem {
                description: "Service Charge".to_string(),
                quantity: 1.0,
                unit_price: 1_000.0,
                gst_rate: 18.0,
            }],
        };

        let text = render_to_string(&invoice.to_document());
        assert!(text.contains("Grand Total: Rs. 1180.00"));
    }

    #[test]
    fn test_deterministic_output() {
        let mut document = Document::new("T");
        document.push(Block::Paragraph("same".to_string()));
        assert_eq!(render_to_string(&document), render_to_string(&document));
    }
}
