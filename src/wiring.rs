//! 配線: 標準アダプタでユースケースを組み立てる

use std::sync::Arc;

use crate::adapter::{
    load_endpoints_config, resolve_endpoints, ConsoleNotifier, ConsoleView, FileJsonLog,
    HttpCommentGateway, PlainNotifier, StdEnvResolver, StdFileSystem, StderrMirrorLog,
};
use crate::cli::Config;
use crate::error::Error;
use crate::ports::outbound::{CommentGateway, EnvResolver, FileSystem, ListView, Log, Notifier};
use crate::usecase::{BoardDeps, BoardUseCase};

/// 組み立て済みアプリケーション
pub struct App {
    pub board: BoardUseCase,
    pub logger: Arc<dyn Log>,
}

/// 標準アダプタで App を組み立てる
///
/// エンドポイントは --api フラグ > GUESTBOOK_API > endpoints.json >
/// ビルトインの順で解決する。壊れた設定ファイルはここでエラーになる。
pub fn wire_app(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);

    let dirs = env.resolve_dirs()?;
    let endpoints_cfg = load_endpoints_config(fs.as_ref(), &dirs.endpoints_config_path())?;
    let endpoints = resolve_endpoints(
        config.api.as_deref(),
        env.api_base_from_env().as_deref(),
        endpoints_cfg.as_ref(),
    );

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        dirs.logs_dir().join("guestbook.jsonl"),
    ));
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(StderrMirrorLog::new(file_log))
    } else {
        file_log
    };

    let gateway: Arc<dyn CommentGateway> = Arc::new(HttpCommentGateway::new(endpoints));
    let view: Arc<dyn ListView> = Arc::new(ConsoleView::new(config.non_interactive));

    // ブロッキング通知（Enter 待ち）は対話ボードでだけ使う
    let board_mode = !config.help && !config.list && config.author.is_none();
    let notifier: Arc<dyn Notifier> = if board_mode && !config.non_interactive {
        Arc::new(ConsoleNotifier::new())
    } else {
        Arc::new(PlainNotifier)
    };

    let board = BoardUseCase::new(BoardDeps {
        gateway,
        view,
        notifier,
        log: Arc::clone(&logger),
    });

    Ok(App { board, logger })
}
