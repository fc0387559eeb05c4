//! メモリ上のフォーム実装（位置引数からの送信・テスト用）

use crate::domain::FormInput;
use crate::error::Error;
use crate::ports::outbound::FormSurface;
use std::sync::Mutex;

/// フィールド値をメモリに保持するフォーム
///
/// CLI の位置引数からの 1 回送信に使う。テストではフィールドの
/// 消去・保持を snapshot で検証できる。
pub struct MemoryForm {
    state: Mutex<FormInput>,
}

impl MemoryForm {
    pub fn new(input: FormInput) -> Self {
        Self {
            state: Mutex::new(input),
        }
    }

    /// 現在のフィールド値
    pub fn snapshot(&self) -> FormInput {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl FormSurface for MemoryForm {
    fn read(&self) -> Result<Option<FormInput>, Error> {
        Ok(Some(self.snapshot()))
    }

    fn clear(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *state = FormInput::default();
    }
}
