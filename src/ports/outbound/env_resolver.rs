//! 環境変数解決 Outbound ポート

use crate::domain::Dirs;
use crate::error::Error;

/// 環境変数から実行時ディレクトリと API 上書きを解決する
pub trait EnvResolver: Send + Sync {
    /// config / state ディレクトリを解決する
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// GUESTBOOK_API によるベース URL の上書き（未設定・空なら None）
    fn api_base_from_env(&self) -> Option<String>;
}
