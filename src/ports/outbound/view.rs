//! コメント一覧表示 Outbound ポート

use crate::domain::Comment;
use crate::error::Error;

/// 描画済み一覧の差し替え先
///
/// `replace` は読み取りが成功したときにしか呼ばれない。失敗時は呼ばれず、
/// 直前の表示がそのまま残る。
pub trait ListView: Send + Sync {
    /// 一覧全体を新しいレコード列で置き換える（レスポンス順のまま描画）
    fn replace(&self, comments: &[Comment]) -> Result<(), Error>;
}
