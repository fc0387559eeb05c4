//! アダプタ実装（外界との接続）

pub mod console_notifier;
pub mod console_view;
pub mod endpoints;
pub mod file_json_log;
pub mod http_gateway;
pub mod memory_form;
pub mod prompt_form;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use console_notifier::{ConsoleNotifier, PlainNotifier};
pub use console_view::ConsoleView;
pub use endpoints::{load_endpoints_config, resolve_endpoints, Endpoints, EndpointsConfig};
pub use file_json_log::FileJsonLog;
pub use http_gateway::HttpCommentGateway;
pub use memory_form::MemoryForm;
pub use prompt_form::PromptForm;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrMirrorLog;
