//! Activity history domain model and persistence seam.

pub mod model;
pub mod repository;

pub use model::ActivityRecord;
pub use repository::ActivityRepository;
