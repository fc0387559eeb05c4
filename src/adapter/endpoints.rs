//! endpoints.json の読み込みとエンドポイント解決
//!
//! 優先順位: --api フラグ > GUESTBOOK_API > endpoints.json > ビルトイン。
//! 同一ソース内では post_url / list_url の明示指定が base_url より優先。

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use serde::Deserialize;
use std::path::Path;

/// ビルトインのエンドポイント（本番サービス）
const DEFAULT_POST_URL: &str =
    "https://u1pdslvmu5.execute-api.us-east-1.amazonaws.com/prod/comment";
const DEFAULT_LIST_URL: &str =
    "https://u1pdslvmu5.execute-api.us-east-1.amazonaws.com/prod/comments";

/// 解決済みエンドポイント（作成 URL と一覧 URL）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub post_url: String,
    pub list_url: String,
}

impl Endpoints {
    /// ベース URL から作成 URL と一覧 URL を導出する
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            post_url: format!("{}/comment", base),
            list_url: format!("{}/comments", base),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            post_url: DEFAULT_POST_URL.to_string(),
            list_url: DEFAULT_LIST_URL.to_string(),
        }
    }
}

/// endpoints.json のルート
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointsConfig {
    /// ベース URL（post_url / list_url の明示指定が無いときの導出元）
    pub base_url: Option<String>,
    pub post_url: Option<String>,
    pub list_url: Option<String>,
}

/// serde 用の内部構造
#[derive(Debug, Deserialize)]
struct EndpointsConfigRaw {
    #[serde(alias = "base")]
    base_url: Option<String>,
    post_url: Option<String>,
    list_url: Option<String>,
}

impl EndpointsConfig {
    /// JSON 文字列から解析する
    pub fn parse(contents: &str) -> Result<Self, Error> {
        let raw: EndpointsConfigRaw =
            serde_json::from_str(contents).map_err(|e| Error::json(e.to_string()))?;
        Ok(Self {
            base_url: raw.base_url,
            post_url: raw.post_url,
            list_url: raw.list_url,
        })
    }
}

/// endpoints.json を読み込む。ファイルが無ければ Ok(None)、
/// JSON が壊れていれば Err（メッセージにパスを含める）。
pub fn load_endpoints_config(
    fs: &dyn FileSystem,
    path: &Path,
) -> Result<Option<EndpointsConfig>, Error> {
    if !fs.exists(path) {
        return Ok(None);
    }
    let contents = fs.read_to_string(path)?;
    EndpointsConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

/// フラグ・環境変数・設定ファイル・ビルトインからエンドポイントを解決する
pub fn resolve_endpoints(
    flag_base: Option<&str>,
    env_base: Option<&str>,
    cfg: Option<&EndpointsConfig>,
) -> Endpoints {
    if let Some(base) = flag_base {
        return Endpoints::from_base(base);
    }
    if let Some(base) = env_base {
        return Endpoints::from_base(base);
    }
    if let Some(cfg) = cfg {
        let derived = cfg.base_url.as_deref().map(Endpoints::from_base);
        if derived.is_some() || cfg.post_url.is_some() || cfg.list_url.is_some() {
            let fallback = derived.unwrap_or_default();
            return Endpoints {
                post_url: cfg.post_url.clone().unwrap_or(fallback.post_url),
                list_url: cfg.list_url.clone().unwrap_or(fallback.list_url),
            };
        }
    }
    Endpoints::default()
}
