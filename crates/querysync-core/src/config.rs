//! Layered configuration and path helpers.
//!
//! Uses Figment to merge built-in defaults + `querysync.toml` +
//! `querysync.<env>.toml` + `QUERYSYNC_*` env vars (`__` separates nesting,
//! e.g. `QUERYSYNC_SITE__PAGINATE=12`).
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// CSS class carried by every resettable sidebar filter.
pub const DEFAULT_FILTER_CLASS: &str = "keymap-filter";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Add a history entry per URL rewrite.
    Push,
    /// Overwrite the current history entry.
    #[default]
    Replace,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Path the site is served under, e.g. `/` or `/keymaps/`.
    pub base_path: String,
    /// Items per result page.
    pub paginate: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_path: "/".to_string(), paginate: 20 }
    }
}

impl SiteConfig {
    /// The base path with exactly one trailing slash.
    pub fn root(&self) -> String {
        format!("{}/", self.base_path.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    pub class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { class: DEFAULT_FILTER_CLASS.to_string() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    pub mode: HistoryMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SyncConfig {
    pub site: SiteConfig,
    pub filters: FilterConfig,
    pub history: HistoryConfig,
}

impl SyncConfig {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.site.paginate == 0 {
            return Err(Error::InvalidConfig("site.paginate must be at least 1".to_string()));
        }
        if !self.site.base_path.starts_with('/') {
            return Err(Error::InvalidConfig(format!(
                "site.base_path must be root-relative, got '{}'",
                self.site.base_path
            )));
        }
        if self.filters.class.trim().is_empty() {
            return Err(Error::InvalidConfig("filters.class must not be empty".to_string()));
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
    env: String,
    settings: SyncConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."), None)
    }

    /// Loads `querysync.toml` and its per-env overlay from `dir`. `env`
    /// falls back to `RUST_ENV`, then `dev`.
    pub fn load_from(dir: &Path, env: Option<&str>) -> anyhow::Result<Self> {
        let env_name = match env {
            Some(env) => env.to_string(),
            None => env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string()),
        };

        let mut figment = Figment::from(Serialized::defaults(SyncConfig::default()))
            .merge(Toml::file(dir.join("querysync.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("querysync.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("querysync.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("querysync.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("QUERYSYNC_").split("__"));

        let settings: SyncConfig = figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration for env '{}': {}", env_name, e))?;
        settings.validate()?;
        Ok(Self { figment, env: env_name, settings })
    }

    pub fn settings(&self) -> &SyncConfig {
        &self.settings
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    /// Raw access to any key, including ones outside [`SyncConfig`].
    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Expands `p` and joins it onto `base` unless it is already absolute.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
