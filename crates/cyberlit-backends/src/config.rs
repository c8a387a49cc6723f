//! Configuration loading and backend factories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cyberlit_core::context::AssistantService;
use cyberlit_core::store::{KeyValueStore, MemoryStore};

use crate::assistant::{HttpAssistant, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::file_store::FileStore;

/// Which key-value backend holds learner state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    /// Nothing survives the process.
    Memory,
}

/// Connection settings for the assistant service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Top-level cyberlit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyberlitConfig {
    /// Directory holding one JSON file per stored key.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub storage: StorageKind,
    /// Replace the built-in question bank with a TOML file.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./cyberlit-data")
}

impl Default for CyberlitConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageKind::default(),
            question_bank: None,
            assistant: AssistantConfig::default(),
        }
    }
}

/// Sample config written by `cyberlit init`.
pub const SAMPLE_CONFIG: &str = r#"# cyberlit configuration
data_dir = "./cyberlit-data"
storage = "file"

# Replace the built-in questions with your own bank:
# question_bank = "questions.toml"

[assistant]
base_url = "${CYBERLIT_ASSISTANT_URL}"
timeout_secs = 30
"#;

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Unset variables resolve to the empty string.
pub fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `cyberlit.toml` in the current directory
/// 2. `~/.config/cyberlit/config.toml`
///
/// Environment variable overrides: `CYBERLIT_DATA_DIR`, `CYBERLIT_ASSISTANT_URL`.
pub fn load_config_from(path: Option<&Path>) -> Result<CyberlitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("cyberlit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CyberlitConfig::default(),
    };

    Ok(apply_env(config))
}

/// Parse config text and resolve `${VAR}` references in string fields.
pub fn parse_config_str(content: &str) -> Result<CyberlitConfig> {
    let mut config: CyberlitConfig = toml::from_str(content)?;
    config.data_dir = PathBuf::from(resolve_env_vars(&config.data_dir.to_string_lossy()));
    config.question_bank = config
        .question_bank
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));
    config.assistant.base_url = resolve_env_vars(&config.assistant.base_url);
    Ok(config)
}

fn apply_env(mut config: CyberlitConfig) -> CyberlitConfig {
    if let Ok(dir) = std::env::var("CYBERLIT_DATA_DIR") {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }
    if let Ok(url) = std::env::var("CYBERLIT_ASSISTANT_URL") {
        if !url.is_empty() {
            config.assistant.base_url = url;
        }
    }
    if config.assistant.base_url.is_empty() {
        config.assistant.base_url = default_base_url();
    }
    config
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("cyberlit"))
}

/// Create the configured key-value store.
pub fn create_store(config: &CyberlitConfig) -> Arc<dyn KeyValueStore> {
    match config.storage {
        StorageKind::File => Arc::new(FileStore::new(&config.data_dir)),
        StorageKind::Memory => Arc::new(MemoryStore::new()),
    }
}

/// Create the assistant client.
pub fn create_assistant(config: &CyberlitConfig) -> Result<Box<dyn AssistantService>> {
    let assistant = HttpAssistant::new(&config.assistant.base_url, config.assistant.timeout_secs)
        .context("failed to build assistant client")?;
    Ok(Box::new(assistant))
}
