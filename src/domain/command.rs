//! CLI コマンドのドメイン型

/// 解析済みのコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    Help,
    /// コメント一覧を 1 回表示する
    List,
    /// 位置引数のコメントを 1 回送信する（成功時は一覧も更新）
    Post { author: String, text: String },
    /// 対話ボード（起動時に一覧を読み込み、フォーム入力を繰り返す）
    Board,
}
