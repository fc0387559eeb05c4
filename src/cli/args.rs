//! 引数解析（clap）

use crate::domain::BoardCommand;
use crate::error::Error;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -l / --list: 一覧を 1 回表示して終了
    pub list: bool,
    /// --no-interactive: プロンプトを出さない（CI 向け。引数なしならボードに入らずエラー）
    pub non_interactive: bool,
    /// -v / --verbose: 診断ログを stderr にも出力する
    pub verbose: bool,
    /// -a / --api: API ベース URL の上書き
    pub api: Option<String>,
    pub author: Option<String>,
    pub message_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            list: false,
            non_interactive: false,
            verbose: false,
            api: None,
            author: None,
            message_args: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("guestbook")
        .about("Post a comment to the comment service or show the comment list")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list")
                .short('l')
                .long("list")
                .help("Show the current comment list and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("api")
                .short('a')
                .long("api")
                .value_name("URL")
                .help("Override the API base URL (<URL>/comment and <URL>/comments)"),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Do not prompt or wait for input (CI-friendly)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror diagnostic log records to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Generate shell completion script (bash, zsh, fish)"),
        )
        .arg(clap::Arg::new("author").value_name("AUTHOR"))
        .arg(
            clap::Arg::new("message")
                .value_name("MESSAGE")
                .num_args(1..)
                .help("Comment text (joined with spaces)"),
        )
}

pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args())
}

/// 引数列から解析する（テスト用の入口を兼ねる）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }

    Ok(ParseOutcome::Config(Config {
        help: matches.get_flag("help"),
        list: matches.get_flag("list"),
        non_interactive: matches.get_flag("no-interactive"),
        verbose: matches.get_flag("verbose"),
        api: matches.get_one::<String>("api").cloned(),
        author: matches.get_one::<String>("author").cloned(),
        message_args: matches
            .get_many::<String>("message")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
    }))
}

/// Config からコマンドへの対応付け（優先順位: help > list > 位置引数 > ボード）
pub fn config_to_command(config: &Config) -> Result<BoardCommand, Error> {
    if config.help {
        return Ok(BoardCommand::Help);
    }
    if config.list {
        return Ok(BoardCommand::List);
    }
    if let Some(author) = &config.author {
        if config.message_args.is_empty() {
            return Err(Error::invalid_argument(
                "No message provided. Usage: guestbook <author> <message...>",
            ));
        }
        return Ok(BoardCommand::Post {
            author: author.clone(),
            text: config.message_args.join(" "),
        });
    }
    if config.non_interactive {
        return Err(Error::invalid_argument(
            "No author or message provided (interactive board disabled by --no-interactive).",
        ));
    }
    Ok(BoardCommand::Board)
}

/// 補完スクリプトを stdout へ出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
