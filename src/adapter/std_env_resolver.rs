//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
///
/// GUESTBOOK_HOME が設定されていればその配下（config / state）を使い、
/// 無ければ XDG 規約（XDG_CONFIG_HOME / XDG_STATE_HOME、最後は HOME）に従う。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        if let Some(home) = env_non_empty("GUESTBOOK_HOME") {
            let root = PathBuf::from(home);
            return Ok(Dirs {
                config_dir: root.join("config"),
                state_dir: root.join("state"),
            });
        }

        let config_base = env_non_empty("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env_non_empty("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        let state_base = env_non_empty("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| env_non_empty("HOME").map(|h| PathBuf::from(h).join(".local/state")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(Dirs {
            config_dir: config_base.join("guestbook"),
            state_dir: state_base.join("guestbook"),
        })
    }

    fn api_base_from_env(&self) -> Option<String> {
        env_non_empty("GUESTBOOK_API")
    }
}
