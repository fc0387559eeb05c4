//! エラーハンドリング
//!
//! クレート全体で使うエラー型。sysexits 風の終了コードに対応付ける。

/// クレート共通のエラー型
///
/// 表示は変種を問わずメッセージのみ。終了コードは `exit_code()` で取る。
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// 引数の誤り（usage を表示すべきもの）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数の不足・不正
    #[error("{0}")]
    Env(String),
    /// JSON の解析失敗（設定ファイル等）
    #[error("{0}")]
    Json(String),
    /// I/O・HTTP の失敗
    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// sysexits 風の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Json(_) => 65,
            Self::Io(_) => 74,
        }
    }

    /// 使い方の誤りか（main が usage を表示するか判断する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("bad flag").exit_code(), 64);
        assert_eq!(Error::env("HOME is not set").exit_code(), 64);
        assert_eq!(Error::json("unexpected token").exit_code(), 65);
        assert_eq!(Error::io_msg("connection refused").exit_code(), 74);
    }

    #[test]
    fn test_is_usage() {
        assert!(Error::invalid_argument("bad flag").is_usage());
        assert!(!Error::io_msg("connection refused").is_usage());
        assert!(!Error::json("broken").is_usage());
    }

    #[test]
    fn test_display_is_message_only() {
        let err = Error::io_msg("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }
}
