use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SUBMISSIONS_URL: &str = "https://leetcode.com/api/submissions/";
pub const DEFAULT_GRAPHQL_URL: &str = "https://leetcode.com/graphql/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub submissions_url: String,
    pub graphql_url: String,
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            submissions_url: DEFAULT_SUBMISSIONS_URL.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            request_timeout_secs: 30,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FetchConfig {
    pub offset: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifierConfig {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialClassifierConfig {
    api: Option<ApiConfig>,
    fetch: Option<FetchConfig>,
}

fn env_or_u64(var: &str, fallback: u64) -> u64 {
    match env::var(var) {
        Ok(v) => v.trim().parse::<u64>().ok().unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn env_or_u32(var: &str, fallback: u32) -> u32 {
    match env::var(var) {
        Ok(v) => v.trim().parse::<u32>().ok().unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

pub fn validate(cfg: &ClassifierConfig) -> Result<()> {
    if !is_http_url(&cfg.api.submissions_url) {
        return Err(anyhow!(
            "invalid submissions url `{}`: must start with http:// or https://",
            cfg.api.submissions_url
        ));
    }
    if !is_http_url(&cfg.api.graphql_url) {
        return Err(anyhow!(
            "invalid graphql url `{}`: must start with http:// or https://",
            cfg.api.graphql_url
        ));
    }
    if cfg.api.request_timeout_secs == 0 {
        return Err(anyhow!("invalid request timeout: must be >= 1 second"));
    }
    if cfg.api.user_agent.trim().is_empty() {
        return Err(anyhow!("invalid user agent: cannot be empty"));
    }
    Ok(())
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var("LC_CLASSIFIER_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let home = dirs::home_dir()?;
    Some(home.join(".lc-classifier").join("config.toml"))
}

fn merge_file_config(base: &mut ClassifierConfig, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(path)?;
    let parsed: PartialClassifierConfig = toml::from_str(&raw)
        .map_err(|err| anyhow!("failed to parse config {}: {err}", path.display()))?;
    if let Some(api) = parsed.api {
        base.api = api;
    }
    if let Some(fetch) = parsed.fetch {
        base.fetch = fetch;
    }
    Ok(())
}

fn apply_env_overrides(cfg: &mut ClassifierConfig) {
    cfg.api.submissions_url =
        env_or_string("LC_CLASSIFIER_SUBMISSIONS_URL", &cfg.api.submissions_url);
    cfg.api.graphql_url = env_or_string("LC_CLASSIFIER_GRAPHQL_URL", &cfg.api.graphql_url);
    cfg.api.request_timeout_secs =
        env_or_u64("LC_CLASSIFIER_TIMEOUT_SECS", cfg.api.request_timeout_secs);
    cfg.fetch.offset = env_or_u32("LC_CLASSIFIER_OFFSET", cfg.fetch.offset);
}

pub fn load_config_from(path: Option<&Path>) -> Result<ClassifierConfig> {
    let mut cfg = ClassifierConfig::default();
    if let Some(path) = path {
        merge_file_config(&mut cfg, path)?;
    }
    apply_env_overrides(&mut cfg);
    validate(&cfg)?;
    Ok(cfg)
}

pub fn load_config() -> Result<ClassifierConfig> {
    load_config_from(resolve_config_path().as_deref())
}
