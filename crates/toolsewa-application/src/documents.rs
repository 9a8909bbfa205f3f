//! Document generation services (invoice and resume).

use std::sync::Arc;

use toolsewa_core::document::{DocumentRenderer, Invoice, Resume};
use toolsewa_core::error::Result;

use crate::session_usecase::SessionUseCase;
use crate::tools::ToolOutcome;

/// Builds and renders documents behind the session gate.
///
/// The renderer is an external collaborator; a rendering failure surfaces
/// as an error to the calling screen and leaves session state untouched
/// (the consumed free use stands, nothing is recorded).
pub struct DocumentService {
    session: Arc<SessionUseCase>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl DocumentService {
    pub fn new(session: Arc<SessionUseCase>, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { session, renderer }
    }

    /// File extension of the configured renderer.
    pub fn extension(&self) -> &'static str {
        self.renderer.extension()
    }

    /// Invoice generator screen flow: gate, build, render, record.
    pub fn generate_invoice(&self, invoice: &Invoice) -> Result<ToolOutcome<Vec<u8>>> {
        if !self.session.request_gate()?.is_granted() {
            return Ok(ToolOutcome::LoginRequired);
        }
        let bytes = self.renderer.render(&invoice.to_document())?;
        self.session
            .record_activity("gst-invoice", "GST Invoice Generator", &invoice.summary())?;
        Ok(ToolOutcome::Completed(bytes))
    }

    /// Resume builder screen flow: gate, build, render, record.
    pub fn generate_resume(&self, resume: &Resume) -> Result<ToolOutcome<Vec<u8>>> {
        if !self.session.request_gate()?.is_granted() {
            return Ok(ToolOutcome::LoginRequired);
        }
        let bytes = self.renderer.render(&resume.to_document())?;
        self.session
            .record_activity("resume-builder", "Resume Builder", &resume.summary())?;
        Ok(ToolOutcome::Completed(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_usecase::test_support::in_memory_session;
    use toolsewa_core::ToolsewaError;
    use toolsewa_core::document::{Document, InvoiceItem, PersonalDetails};
    use toolsewa_infrastructure::PlainTextRenderer;

    fn sample_invoice() -> Invoice {
        Invoice {
            business: "Sharma Traders".to_string(),
            client: "Acme".to_string(),
            invoice_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            items: vec![InvoiceItem {
                description: "Service Charge".to_string(),
                quantity: 1.0,
                unit_price: 1_000.0,
                gst_rate: 18.0,
            }],
        }
    }

    struct FailingRenderer;

    impl DocumentRenderer for FailingRenderer {
        fn extension(&self) -> &'static str {
            "pdf"
        }
        fn render(&self, _document: &Document) -> Result<Vec<u8>> {
            Err(ToolsewaError::document("renderer exploded"))
        }
    }

    #[test]
    fn test_invoice_generation_records_activity() {
        let session = Arc::new(in_memory_session());
        session.login_with_email("a@b.com").unwrap();
        let service = DocumentService::new(session.clone(), Arc::new(PlainTextRenderer::new()));

        let outcome = service.generate_invoice(&sample_invoice()).unwrap();
        let bytes = outcome.completed().unwrap();
        assert!(!bytes.is_empty());

        let log = session.activity();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].tool_id, "gst-invoice");
        assert_eq!(log[0].result_summary, "Generated Invoice for ₹1180.00");
    }

    #[test]
    fn test_resume_generation_records_activity() {
        let session = Arc::new(in_memory_session());
        session.login_with_email("a@b.com").unwrap();
        let service = DocumentService::new(session.clone(), Arc::new(PlainTextRenderer::new()));

        let resume = Resume {
            personal: PersonalDetails {
                name: "Asha Verma".to_string(),
                ..PersonalDetails::default()
            },
            ..Resume::default()
        };
        let outcome = service.generate_resume(&resume).unwrap();
        assert!(outcome.completed().is_some());
        assert_eq!(
            session.activity()[0].result_summary,
            "Created Resume for Asha Verma"
        );
    }

    #[test]
    fn test_gate_blocks_third_anonymous_generation() {
        let session = Arc::new(in_memory_session());
        let service = DocumentService::new(session.clone(), Arc::new(PlainTextRenderer::new()));

        assert!(!service.generate_invoice(&sample_invoice()).unwrap().is_login_required());
        assert!(!service.generate_invoice(&sample_invoice()).unwrap().is_login_required());
        assert!(service.generate_invoice(&sample_invoice()).unwrap().is_login_required());
        assert!(session.login_prompt_visible());
    }

    #[test]
    fn test_render_failure_leaves_session_state_intact() {
        let session = Arc::new(in_memory_session());
        session.login_with_email("a@b.com").unwrap();
        let service = DocumentService::new(session.clone(), Arc::new(FailingRenderer));

        let err = service.generate_invoice(&sample_invoice()).unwrap_err();
        assert!(matches!(err, ToolsewaError::Document(_)));

        // Nothing recorded, account untouched.
        assert!(session.activity().is_empty());
        assert!(session.current_account().is_some());
    }
}
