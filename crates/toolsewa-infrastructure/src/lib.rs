pub mod completion_client;
pub mod config_service;
pub mod json_activity_repository;
pub mod json_profile_repository;
pub mod json_usage_repository;
pub mod paths;
pub mod storage;
pub mod text_renderer;

pub use completion_client::HttpCompletionClient;
pub use config_service::ConfigService;
pub use json_activity_repository::JsonActivityRepository;
pub use json_profile_repository::JsonProfileRepository;
pub use json_usage_repository::JsonUsageRepository;
pub use paths::ToolsewaPaths;
pub use text_renderer::PlainTextRenderer;
