//! stderr への診断ミラー（-v/--verbose 用）
//!
//! ファイルログへ書いたうえで、同じレコードの要点を stderr に整形して出す。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = &record.fields else {
        return String::new();
    };
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.len() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 内側の Log へ委譲しつつ stderr にも出す Log 実装
pub struct StderrMirrorLog {
    inner: Arc<dyn Log>,
}

impl StderrMirrorLog {
    pub fn new(inner: Arc<dyn Log>) -> Self {
        Self { inner }
    }
}

impl Log for StderrMirrorLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let summary = fields_summary(record);
        if summary.is_empty() {
            eprintln!("[log] {} {} {}", record.ts, record.level.as_str(), record.message);
        } else {
            eprintln!(
                "[log] {} {} {} {}",
                record.ts,
                record.level.as_str(),
                record.message,
                summary
            );
        }
        self.inner.log(record)
    }
}
