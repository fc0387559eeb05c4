//! 投稿フォーム Outbound ポート

use crate::domain::FormInput;
use crate::error::Error;

/// 著者・本文の 2 フィールドを持つ投稿フォームの抽象
///
/// 実装は対話プロンプト（`adapter::PromptForm`）や
/// 引数・テスト用の `adapter::MemoryForm`。
pub trait FormSurface: Send + Sync {
    /// 現在のフィールド値を読む。surface が閉じた場合（EOF）は None。
    fn read(&self) -> Result<Option<FormInput>, Error>;

    /// 両フィールドを空にする。送信が受理されたときだけ呼ばれる。
    fn clear(&self);
}
