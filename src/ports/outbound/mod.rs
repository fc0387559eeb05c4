//! Outbound ポート: アプリが外界（コメント API・フォーム・表示・通知・FS・ログ）を使うための trait

pub mod comment_gateway;
pub mod env_resolver;
pub mod form;
pub mod fs;
pub mod log;
pub mod notifier;
pub mod view;

pub use comment_gateway::{CommentGateway, GatewayError};
pub use env_resolver::EnvResolver;
pub use form::FormSurface;
pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use notifier::Notifier;
pub use view::ListView;
