//! Document domain model.

use serde::{Deserialize, Serialize};

/// One content element of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Section heading
    Heading(String),
    /// Free-running text
    Paragraph(String),
    /// Labelled single line, e.g. `Date: 2024-05-01`
    KeyValue { label: String, value: String },
    /// Tabular data with a header row
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Horizontal separator
    Divider,
}

/// A renderable document: a title plus ordered content blocks.
///
/// The model is deliberately renderer-agnostic; producing PDF or any other
/// binary output is an external concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Creates an empty document with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Appends a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Appends a labelled line.
    pub fn push_key_value(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.blocks.push(Block::KeyValue {
            label: label.into(),
            value: value.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut document = Document::new("Test");
        document.push(Block::Heading("A".to_string()));
        document.push_key_value("Date", "2024-05-01");
        document.push(Block::Divider);

        assert_eq!(document.blocks.len(), 3);
        assert_eq!(document.blocks[0], Block::Heading("A".to_string()));
        assert_eq!(document.blocks[2], Block::Divider);
    }
}
