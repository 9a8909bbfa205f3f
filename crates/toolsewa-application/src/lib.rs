pub mod assistant;
pub mod bootstrap;
pub mod documents;
pub mod session_usecase;
pub mod tools;

pub use assistant::AssistantService;
pub use bootstrap::load_session;
pub use documents::DocumentService;
pub use session_usecase::SessionUseCase;
pub use tools::{ToolOutcome, ToolRunner};
