mod adapter;
mod cli;
mod domain;
mod error;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::{BoardCommand, FormInput};
use error::Error;
use ports::inbound::UseCaseRunner;
use ports::outbound::{now_iso8601, LogLevel, LogRecord};
use usecase::{RefreshOutcome, SubmitOutcome};
use wiring::{wire_app, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config)?;
        let command_name = cmd_name_for_log(&cmd);
        self.log_lifecycle("command started", command_name, None);

        let result: Result<i32, Error> = match cmd {
            BoardCommand::Help => {
                print_help();
                Ok(0)
            }
            BoardCommand::List => match self.app.board.refresh() {
                RefreshOutcome::Refreshed(_) => Ok(0),
                // 読み取り失敗は通知しない（診断はログ済み）。終了コードでだけ伝える。
                RefreshOutcome::Failed => Ok(74),
            },
            BoardCommand::Post { author, text } => {
                let form = adapter::MemoryForm::new(FormInput::new(author, text));
                let outcome = self.app.board.submit(&form)?;
                Ok(exit_code_for_submit(outcome))
            }
            BoardCommand::Board => {
                let form = adapter::PromptForm::new();
                self.app.board.run_board(&form)?;
                Ok(0)
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        self.log_lifecycle("command finished", command_name, Some(code));
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

impl Runner {
    fn log_lifecycle(&self, message: &str, command_name: &str, exit_code: Option<i32>) {
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                if let Some(code) = exit_code {
                    m.insert("exit_code".to_string(), serde_json::json!(code));
                }
                Some(m)
            },
        });
    }
}

fn cmd_name_for_log(cmd: &BoardCommand) -> &'static str {
    match cmd {
        BoardCommand::Help => "help",
        BoardCommand::List => "list",
        BoardCommand::Post { .. } => "post",
        BoardCommand::Board => "board",
    }
}

fn exit_code_for_submit(outcome: SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Submitted | SubmitOutcome::Closed => 0,
        SubmitOutcome::Invalid => 64,
        SubmitOutcome::Rejected | SubmitOutcome::TransportFailed => 74,
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("guestbook: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_app(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: guestbook [options] [author] [message...]");
}

fn print_help() {
    println!("Usage: guestbook [options] [author] [message...]");
    println!("Options:");
    println!("  -h, --help              Show this help message");
    println!("  -l, --list              Show the current comment list and exit");
    println!("  -a, --api <URL>         Override the API base URL (<URL>/comment, <URL>/comments)");
    println!("  --no-interactive        Do not prompt or wait for input (CI-friendly)");
    println!("  -v, --verbose           Mirror diagnostic log records to stderr");
    println!("  --generate <shell>      Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  GUESTBOOK_API    API base URL override (weaker than -a/--api)");
    println!("  GUESTBOOK_HOME   Home directory. Config: $GUESTBOOK_HOME/config/endpoints.json;");
    println!("                   logs: $GUESTBOOK_HOME/state/logs/guestbook.jsonl");
    println!("                   If unset, XDG directories (e.g. ~/.config/guestbook) are used.");
    println!();
    println!("Description:");
    println!("  Without arguments, opens the interactive board: loads the comment list once,");
    println!("  then reads name and comment from the prompt until EOF (Ctrl+D).");
    println!("  With <author> <message...>, posts a single comment and refreshes the list.");
    println!();
    println!("Examples:");
    println!("  guestbook");
    println!("  guestbook -l");
    println!("  guestbook alice Nice site!");
    println!("  guestbook -a http://localhost:3000 alice Hello from staging");
}
