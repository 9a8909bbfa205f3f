//! Document renderer trait.

use crate::document::model::Document;
use crate::error::Result;

/// Turns a structured [`Document`] into downloadable bytes.
///
/// Implementations are external collaborators (PDF, plain text, ...);
/// a rendering failure surfaces as a generic error the calling screen
/// displays, and never touches session state.
pub trait DocumentRenderer: Send + Sync {
    /// File extension produced by this renderer, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders the document to its output format.
    fn render(&self, document: &Document) -> Result<Vec<u8>>;
}
