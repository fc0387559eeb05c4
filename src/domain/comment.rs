//! コメントとフォーム入力のドメイン型

use serde::{Deserialize, Serialize};

/// コメント 1 件
///
/// 作成リクエストのペイロードと読み取りレスポンスの要素を兼ねる。
/// ワイヤ上のキーは `username` / `comment` の 2 つで固定。
/// 読み取り側は寛容にデコードする（欠けたフィールドは空文字列、
/// 未知のフィールドは無視）。ID もタイムスタンプも持たず、
/// 並び順はレスポンス順のまま。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub comment: String,
}

impl Comment {
    pub fn new(username: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            comment: comment.into(),
        }
    }
}

/// フォーム入力（未検証の下書き）
///
/// 著者と本文の 2 フィールド。検証を通ったときだけ `Comment` になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub author: String,
    pub text: String,
}

impl FormInput {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// 前後の空白を除去し、両フィールドが非空なら `Comment` を返す
    pub fn validated(&self) -> Option<Comment> {
        let author = self.author.trim();
        let text = self.text.trim();
        if author.is_empty() || text.is_empty() {
            return None;
        }
        Some(Comment::new(author, text))
    }
}
