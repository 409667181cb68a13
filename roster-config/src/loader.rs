use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::RosterConfig;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "ROSTER_CONFIG_PATH";
/// Environment variable holding the config as inline JSON.
pub const CONFIG_JSON_VAR: &str = "ROSTER_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "roster.toml",
    "roster.json",
    "config/roster.toml",
    "config/roster.json",
];

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl RosterConfig {
    /// Load configuration from the process environment and working
    /// directory. Evaluation order:
    /// 1) `$ROSTER_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$ROSTER_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default file,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same as [`RosterConfig::load_from_env`] with an explicit variable
    /// lookup and search root for the default files.
    pub fn load_with<F>(lookup: F, search_root: &Path) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = Self::resolve(lookup, search_root)?;
        config.validate().context("invalid roster configuration")?;
        Ok((config, source))
    }

    fn resolve<F>(lookup: F, search_root: &Path) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read roster config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid roster config {}", path.display())),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid roster config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse roster config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid roster config json: {err}"))
    }

    fn find_default_file(search_root: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| search_root.join(candidate))
            .find(|path| path.exists())
    }
}
