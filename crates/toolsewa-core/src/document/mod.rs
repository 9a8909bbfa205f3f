//! Structured documents and their renderer seam.
//!
//! Tool screens build a [`Document`] from structured content; turning that
//! into a downloadable file is delegated to an external renderer behind the
//! [`DocumentRenderer`] trait.

pub mod invoice;
pub mod model;
pub mod renderer;
pub mod resume;

pub use invoice::{Invoice, InvoiceItem};
pub use model::{Block, Document};
pub use renderer::DocumentRenderer;
pub use resume::{EducationEntry, ExperienceEntry, PersonalDetails, Resume};
