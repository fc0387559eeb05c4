//! 一覧更新フローの試験

use super::support::{board_with, ClosedForm, StubGateway};
use crate::domain::Comment;
use crate::ports::outbound::GatewayError;
use crate::usecase::RefreshOutcome;

#[test]
fn test_refresh_replaces_view_with_response_order() {
    let gateway = StubGateway::new(
        Ok(()),
        Ok(vec![Comment::new("alice", "hi"), Comment::new("bob", "yo")]),
    );
    let (board, _gateway, view, notifier, _log) = board_with(gateway);

    let outcome = board.refresh();

    assert_eq!(outcome, RefreshOutcome::Refreshed(2));
    assert_eq!(
        view.last_rendered(),
        Some(vec![Comment::new("alice", "hi"), Comment::new("bob", "yo")])
    );
    // 読み取りフローはユーザーに通知しない
    assert!(notifier.notices().is_empty());
}

#[test]
fn test_refresh_with_empty_collection_renders_zero_items() {
    let gateway = StubGateway::new(Ok(()), Ok(Vec::new()));
    let (board, _gateway, view, _notifier, _log) = board_with(gateway);

    let outcome = board.refresh();

    assert_eq!(outcome, RefreshOutcome::Refreshed(0));
    assert_eq!(view.last_rendered(), Some(Vec::new()));
}

#[test]
fn test_rejected_read_leaves_view_untouched() {
    let gateway = StubGateway::new(
        Ok(()),
        Err(GatewayError::Rejected {
            status: 503,
            body: String::new(),
        }),
    );
    let (board, _gateway, view, notifier, log) = board_with(gateway);

    let outcome = board.refresh();

    assert_eq!(outcome, RefreshOutcome::Failed);
    assert!(view.last_rendered().is_none());
    assert!(notifier.notices().is_empty());

    let records = log.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "read request rejected");
    assert_eq!(
        records[0].fields.as_ref().unwrap()["status"],
        serde_json::json!(503)
    );
}

#[test]
fn test_transport_failure_leaves_view_untouched() {
    let gateway = StubGateway::new(
        Ok(()),
        Err(GatewayError::Transport("timed out".to_string())),
    );
    let (board, _gateway, view, _notifier, log) = board_with(gateway);

    let outcome = board.refresh();

    assert_eq!(outcome, RefreshOutcome::Failed);
    assert!(view.last_rendered().is_none());
    assert_eq!(log.records()[0].message, "read request failed");
}

#[test]
fn test_board_loads_list_once_at_startup() {
    let gateway = StubGateway::new(Ok(()), Ok(vec![Comment::new("alice", "hi")]));
    let (board, gateway, view, _notifier, _log) = board_with(gateway);

    // 閉じたフォームなら起動時の読み込みだけで終わる
    board.run_board(&ClosedForm).unwrap();

    assert_eq!(gateway.fetch_count(), 1);
    assert_eq!(view.last_rendered(), Some(vec![Comment::new("alice", "hi")]));
}
