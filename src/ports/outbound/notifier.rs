//! ユーザー通知 Outbound ポート

use crate::domain::Notice;

/// ブロッキング通知（モーダルの alert 相当）
///
/// 実装は `adapter::ConsoleNotifier`（Enter 待ち）と
/// `adapter::PlainNotifier`（表示のみ、非対話用）。
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
