//! CLI 境界（引数解析）

pub mod args;

pub use args::{
    config_to_command, parse_args, parse_args_from, print_completion, Config, ParseOutcome,
};
