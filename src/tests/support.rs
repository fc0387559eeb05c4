//! フロー試験用のスタブアダプタ

use crate::domain::{Comment, FormInput, Notice};
use crate::error::Error;
use crate::ports::outbound::{
    CommentGateway, FormSurface, GatewayError, ListView, Log, LogRecord, Notifier,
};
use crate::usecase::{BoardDeps, BoardUseCase};
use std::sync::{Arc, Mutex};

/// 応答を固定し、呼び出しを記録するゲートウェイ
pub struct StubGateway {
    submit_response: Result<(), GatewayError>,
    fetch_response: Result<Vec<Comment>, GatewayError>,
    pub submitted: Mutex<Vec<Comment>>,
    pub fetch_calls: Mutex<usize>,
}

impl StubGateway {
    pub fn new(
        submit_response: Result<(), GatewayError>,
        fetch_response: Result<Vec<Comment>, GatewayError>,
    ) -> Self {
        Self {
            submit_response,
            fetch_response,
            submitted: Mutex::new(Vec::new()),
            fetch_calls: Mutex::new(0),
        }
    }

    pub fn submitted_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }
}

impl CommentGateway for StubGateway {
    fn submit(&self, comment: &Comment) -> Result<(), GatewayError> {
        self.submitted.lock().unwrap().push(comment.clone());
        self.submit_response.clone()
    }

    fn fetch_all(&self) -> Result<Vec<Comment>, GatewayError> {
        *self.fetch_calls.lock().unwrap() += 1;
        self.fetch_response.clone()
    }
}

/// replace の呼び出し内容を記録するビュー。None のままなら一度も描画されていない。
#[derive(Default)]
pub struct RecordingView {
    pub rendered: Mutex<Option<Vec<Comment>>>,
}

impl RecordingView {
    pub fn last_rendered(&self) -> Option<Vec<Comment>> {
        self.rendered.lock().unwrap().clone()
    }
}

impl ListView for RecordingView {
    fn replace(&self, comments: &[Comment]) -> Result<(), Error> {
        *self.rendered.lock().unwrap() = Some(comments.to_vec());
        Ok(())
    }
}

/// 通知を記録する Notifier
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// レコードを記録する Log
#[derive(Default)]
pub struct RecordingLog {
    pub records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// 読むと必ず閉じているフォーム（EOF 相当）
pub struct ClosedForm;

impl FormSurface for ClosedForm {
    fn read(&self) -> Result<Option<FormInput>, Error> {
        Ok(None)
    }

    fn clear(&self) {}
}

/// スタブ一式で BoardUseCase を組み立てる
pub fn board_with(
    gateway: StubGateway,
) -> (
    BoardUseCase,
    Arc<StubGateway>,
    Arc<RecordingView>,
    Arc<RecordingNotifier>,
    Arc<RecordingLog>,
) {
    let gateway = Arc::new(gateway);
    let view = Arc::new(RecordingView::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let log = Arc::new(RecordingLog::default());
    let board = BoardUseCase::new(BoardDeps {
        gateway: Arc::clone(&gateway) as Arc<dyn CommentGateway>,
        view: Arc::clone(&view) as Arc<dyn ListView>,
        notifier: Arc::clone(&notifier) as Arc<dyn Notifier>,
        log: Arc::clone(&log) as Arc<dyn Log>,
    });
    (board, gateway, view, notifier, log)
}
