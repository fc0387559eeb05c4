//! 引数解析の試験

use crate::cli::{config_to_command, parse_args_from, Config, ParseOutcome};
use crate::domain::BoardCommand;

fn parse(args: &[&str]) -> Config {
    match parse_args_from(args.iter().copied()).unwrap() {
        ParseOutcome::Config(c) => c,
        other => panic!("expected Config, got {:?}", other),
    }
}

#[test]
fn test_no_args_enters_board() {
    let config = parse(&["guestbook"]);
    assert_eq!(config_to_command(&config).unwrap(), BoardCommand::Board);
}

#[test]
fn test_list_flag() {
    let config = parse(&["guestbook", "-l"]);
    assert!(config.list);
    assert_eq!(config_to_command(&config).unwrap(), BoardCommand::List);
}

#[test]
fn test_help_takes_precedence() {
    let config = parse(&["guestbook", "-h", "-l", "alice", "hi"]);
    assert_eq!(config_to_command(&config).unwrap(), BoardCommand::Help);
}

#[test]
fn test_positionals_become_post() {
    let config = parse(&["guestbook", "alice", "hello", "world"]);
    assert_eq!(config.author.as_deref(), Some("alice"));
    assert_eq!(
        config_to_command(&config).unwrap(),
        BoardCommand::Post {
            author: "alice".to_string(),
            text: "hello world".to_string(),
        }
    );
}

#[test]
fn test_author_without_message_is_usage_error() {
    let config = parse(&["guestbook", "alice"]);
    let err = config_to_command(&config).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 64);
    assert!(err.to_string().contains("No message provided"));
}

#[test]
fn test_non_interactive_without_args_is_usage_error() {
    let config = parse(&["guestbook", "--no-interactive"]);
    let err = config_to_command(&config).unwrap_err();
    assert!(err.is_usage());
    assert!(err.to_string().contains("--no-interactive"));
}

#[test]
fn test_api_flag_is_captured() {
    let config = parse(&["guestbook", "-a", "http://localhost:3000", "-l"]);
    assert_eq!(config.api.as_deref(), Some("http://localhost:3000"));
}

#[test]
fn test_verbose_flag_is_captured() {
    let config = parse(&["guestbook", "-v"]);
    assert!(config.verbose);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let err = parse_args_from(["guestbook", "--bogus"]).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_generate_completion_outcome() {
    let outcome = parse_args_from(["guestbook", "--generate", "bash"]).unwrap();
    assert!(matches!(outcome, ParseOutcome::GenerateCompletion(_)));
}
