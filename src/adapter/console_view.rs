//! コメント一覧のコンソール表示実装

use crate::domain::Comment;
use crate::error::Error;
use crate::ports::outbound::ListView;

/// コンソールへの一覧表示
///
/// 置き換えのたびに全件を描画し直す。著者は太字（ANSI）で強調し、
/// `plain` のときはエスケープを使わない（非対話・パイプ出力向け）。
pub struct ConsoleView {
    plain: bool,
}

impl ConsoleView {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    /// 1 件分の表示行を組み立てる
    fn format_line(&self, comment: &Comment) -> String {
        if self.plain {
            format!("{}: {}", comment.username, comment.comment)
        } else {
            format!("\x1b[1m{}\x1b[0m: {}", comment.username, comment.comment)
        }
    }
}

impl ListView for ConsoleView {
    fn replace(&self, comments: &[Comment]) -> Result<(), Error> {
        for comment in comments {
            println!("{}", self.format_line(comment));
        }
        Ok(())
    }
}
