//! 対話プロンプトによるフォーム実装（CLI 境界）

use crate::domain::FormInput;
use crate::error::Error;
use crate::ports::outbound::FormSurface;
use std::io::{self, BufRead, Write};

/// stdin からの対話入力フォーム
///
/// read のたびに著者と本文をプロンプトで尋ねる。EOF（Ctrl+D）で None。
pub struct PromptForm;

impl PromptForm {
    pub fn new() -> Self {
        Self
    }

    fn prompt_line(&self, label: &str) -> Result<Option<String>, Error> {
        eprint!("{}: ", label);
        io::stderr()
            .flush()
            .map_err(|e| Error::io_msg(e.to_string()))?;
        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(
            line.trim_end_matches(|c| c == '\n' || c == '\r').to_string(),
        ))
    }
}

impl Default for PromptForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for PromptForm {
    fn read(&self) -> Result<Option<FormInput>, Error> {
        let Some(author) = self.prompt_line("Name")? else {
            return Ok(None);
        };
        let Some(text) = self.prompt_line("Comment")? else {
            return Ok(None);
        };
        Ok(Some(FormInput::new(author, text)))
    }

    /// プロンプト入力は読み取りのたびに消費されるため、消去は不要
    fn clear(&self) {}
}
