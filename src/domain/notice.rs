//! ユーザー通知のドメイン型

/// ユーザーへ提示するブロッキング通知
///
/// 送信フローだけがユーザーに見える失敗を持つ。読み取りフローの失敗は
/// 診断ログのみで、通知にはならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// 入力不備（名前またはコメントが空）
    EmptyFields,
    /// 送信成功
    Submitted,
    /// エンドポイントによる拒否（非 2xx）
    SubmitFailed,
    /// トランスポート障害
    NetworkError,
}

impl Notice {
    /// 表示用メッセージ
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyFields => "Please enter your name and comment.",
            Self::Submitted => "Comment submitted!",
            Self::SubmitFailed => "Failed to submit comment.",
            Self::NetworkError => "Network error occurred.",
        }
    }
}
