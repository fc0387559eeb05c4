//! ユーザー通知のコンソール実装（CLI 境界）
//!
//! stdin/stderr を用いた対話は adapter 層の責務。

use crate::domain::Notice;
use crate::ports::outbound::Notifier;
use std::io::{self, BufRead, Write};

/// 対話用のブロッキング通知
///
/// モーダルの alert に合わせ、メッセージを表示して Enter を待つ。
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice.message());
        eprint!("[Enter] ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

/// 非対話用: 表示のみでブロックしない（ワンショット・CI 向け）
#[derive(Debug, Clone, Default)]
pub struct PlainNotifier;

impl Notifier for PlainNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice.message());
    }
}
