//! Usage-gating domain models and persistence seam.
//!
//! The models here are the state of the gating machine: the anonymous usage
//! counter and the ephemeral outcome of a gate check. The machine itself
//! lives in `toolsewa-application`.

pub mod model;
pub mod repository;

pub use model::{FREE_USE_LIMIT, GateDecision, UsageCounter};
pub use repository::UsageRepository;
