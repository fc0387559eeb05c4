//! コメント API Outbound ポート
//!
//! usecase はこの trait 経由でのみ外部サービスへアクセスする。

use crate::domain::Comment;

/// ゲートウェイの失敗分類
///
/// `Rejected` はエンドポイントが非 2xx を返した場合（body はログ用の平文）。
/// `Transport` は完了しなかったリクエストや読めなかった・解釈できなかった
/// 応答など、捕捉された失敗すべて。
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("endpoint rejected request: HTTP {status}")]
    Rejected { status: u16, body: String },
    #[error("transport failure: {0}")]
    Transport(String),
}

/// コメント API（作成・一覧）の Outbound ポート
///
/// 実装は `adapter::HttpCommentGateway` やテスト用のスタブなど。
pub trait CommentGateway: Send + Sync {
    /// コメントを 1 件作成する。2xx なら Ok（成功時のボディは読まない）。
    fn submit(&self, comment: &Comment) -> Result<(), GatewayError>;

    /// コメント一覧を取得する
    fn fetch_all(&self) -> Result<Vec<Comment>, GatewayError>;
}
