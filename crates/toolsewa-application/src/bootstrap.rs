//! Composition root helpers.
//!
//! Wires the file-backed repositories into a ready [`SessionUseCase`]. The
//! session handle is created once at application start and injected into
//! every screen; there are no ambient singletons.

use std::path::Path;
use std::sync::Arc;

use toolsewa_core::error::Result;
use toolsewa_infrastructure::{
    JsonActivityRepository, JsonProfileRepository, JsonUsageRepository,
};

use crate::session_usecase::SessionUseCase;

/// Loads the session state manager over the file-backed stores.
///
/// `base_dir` overrides the platform config directory (used by tests);
/// pass `None` for the default location.
pub fn load_session(base_dir: Option<&Path>) -> Result<Arc<SessionUseCase>> {
    let session = SessionUseCase::load(
        Arc::new(JsonProfileRepository::new(base_dir)?),
        Arc::new(JsonUsageRepository::new(base_dir)?),
        Arc::new(JsonActivityRepository::new(base_dir)?),
    )?;
    Ok(Arc::new(session))
}
