//! 投稿と一覧更新のユースケース（アダプター経由で I/O を行う）

use crate::domain::Notice;
use crate::error::Error;
use crate::ports::outbound::{
    now_iso8601, CommentGateway, FormSurface, GatewayError, ListView, Log, LogLevel, LogRecord,
    Notifier,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// submit 1 回分の結果（終了コードへの対応付けは CLI の責務）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 受理された（フォーム消去と一覧更新まで済み）
    Submitted,
    /// 入力不備のためリクエストを送らなかった
    Invalid,
    /// エンドポイントが非 2xx を返した
    Rejected,
    /// トランスポート障害で完了しなかった
    TransportFailed,
    /// フォーム surface が閉じた（EOF）
    Closed,
}

/// refresh 1 回分の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// 一覧を描画し直した（件数）
    Refreshed(usize),
    /// 失敗。表示は据え置き、診断ログのみ
    Failed,
}

/// ボードのユースケース依存
pub struct BoardDeps {
    pub gateway: Arc<dyn CommentGateway>,
    pub view: Arc<dyn ListView>,
    pub notifier: Arc<dyn Notifier>,
    pub log: Arc<dyn Log>,
}

/// 投稿フォームと一覧表示を結ぶユースケース
///
/// submit が受理されたときだけ refresh が走る。それ以外の経路では
/// 表示もフォームも変更しない。リトライ・バックオフは行わない。
pub struct BoardUseCase {
    deps: BoardDeps,
}

impl BoardUseCase {
    pub fn new(deps: BoardDeps) -> Self {
        Self { deps }
    }

    /// フォームを読み、検証し、作成リクエストを送る
    ///
    /// 受理されたら通知 → フォーム消去 → 一覧更新の順。拒否・障害時は
    /// 診断を記録して通知し、フォームはそのまま残す。
    pub fn submit(&self, form: &dyn FormSurface) -> Result<SubmitOutcome, Error> {
        let input = match form.read()? {
            Some(input) => input,
            None => return Ok(SubmitOutcome::Closed),
        };

        let comment = match input.validated() {
            Some(comment) => comment,
            None => {
                self.deps.notifier.notify(Notice::EmptyFields);
                return Ok(SubmitOutcome::Invalid);
            }
        };

        match self.deps.gateway.submit(&comment) {
            Ok(()) => {
                self.deps.notifier.notify(Notice::Submitted);
                form.clear();
                self.refresh();
                Ok(SubmitOutcome::Submitted)
            }
            Err(GatewayError::Rejected { status, body }) => {
                self.log_diag(LogLevel::Error, "creation request rejected", |m| {
                    m.insert("status".to_string(), serde_json::json!(status));
                    m.insert("body".to_string(), serde_json::json!(body));
                });
                self.deps.notifier.notify(Notice::SubmitFailed);
                Ok(SubmitOutcome::Rejected)
            }
            Err(GatewayError::Transport(message)) => {
                self.log_diag(LogLevel::Error, "creation request failed", |m| {
                    m.insert("error".to_string(), serde_json::json!(message));
                });
                self.deps.notifier.notify(Notice::NetworkError);
                Ok(SubmitOutcome::TransportFailed)
            }
        }
    }

    /// 一覧を読み込み、表示を置き換える
    ///
    /// 失敗時は表示に触れない（直前の描画が残る）。ユーザー通知もしない。
    pub fn refresh(&self) -> RefreshOutcome {
        match self.deps.gateway.fetch_all() {
            Ok(comments) => {
                if let Err(e) = self.deps.view.replace(&comments) {
                    self.log_diag(LogLevel::Warn, "failed to render comment list", |m| {
                        m.insert("error".to_string(), serde_json::json!(e.to_string()));
                    });
                    return RefreshOutcome::Failed;
                }
                self.log_diag(LogLevel::Debug, "comment list refreshed", |m| {
                    m.insert("count".to_string(), serde_json::json!(comments.len()));
                });
                RefreshOutcome::Refreshed(comments.len())
            }
            // 読み取りフローの失敗は通知せず、診断は warn で残す
            Err(GatewayError::Rejected { status, .. }) => {
                self.log_diag(LogLevel::Warn, "read request rejected", |m| {
                    m.insert("status".to_string(), serde_json::json!(status));
                });
                RefreshOutcome::Failed
            }
            Err(GatewayError::Transport(message)) => {
                self.log_diag(LogLevel::Warn, "read request failed", |m| {
                    m.insert("error".to_string(), serde_json::json!(message));
                });
                RefreshOutcome::Failed
            }
        }
    }

    /// 対話ボード: 起動時に一覧を読み込み、surface が閉じるまで submit を繰り返す
    pub fn run_board(&self, form: &dyn FormSurface) -> Result<(), Error> {
        self.refresh();
        loop {
            match self.submit(form)? {
                SubmitOutcome::Closed => return Ok(()),
                _ => continue,
            }
        }
    }

    fn log_diag(
        &self,
        level: LogLevel,
        message: &str,
        fill: impl FnOnce(&mut BTreeMap<String, serde_json::Value>),
    ) {
        let mut fields = BTreeMap::new();
        fill(&mut fields);
        let _ = self.deps.log.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("diagnostic".to_string()),
            fields: Some(fields),
        });
    }
}
