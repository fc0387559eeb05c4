//! Inbound ポート: CLI からユースケースを起動する trait

use crate::cli::Config;
use crate::error::Error;

/// 解析済み Config を受け取り、終了コードを返す
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
