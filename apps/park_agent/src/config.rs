use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parkvoice_core::NpsConfig;

/// Configuration for the park agent host
#[derive(Clone, Debug)]
pub struct ParkAgentConfig {
    pub nps: NpsConfig,
    /// Dialog wording overrides keyed by dialog name ("Park.List", ...)
    pub dialogs: HashMap<String, String>,
    /// REPL prompt
    pub prompt: String,
    /// File the configuration was read from, re-read on `:reload`
    pub path: PathBuf,
}

impl Default for ParkAgentConfig {
    fn default() -> Self {
        Self {
            nps: NpsConfig::default(),
            dialogs: HashMap::new(),
            prompt: std::env::var("PARK_AGENT_PROMPT").unwrap_or_else(|_| "you> ".to_string()),
            path: PathBuf::from(
                std::env::var("PARK_AGENT_CONFIG").unwrap_or_else(|_| "park_agent.toml".into()),
            ),
        }
    }
}

impl ParkAgentConfig {
    /// Load configuration from a TOML file (path via PARK_AGENT_CONFIG or ./park_agent.toml),
    /// overlaying values onto env-driven defaults.
    pub fn load() -> Self {
        let default = Self::default();
        let path = default.path.clone();
        Self::load_from(&path, default)
    }

    pub fn load_from(path: &Path, default: Self) -> Self {
        if !path.exists() {
            tracing::info!(target: "park_agent", path = %path.display(), "No TOML config found; using defaults/env");
            return default;
        }
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s, default),
            Err(e) => {
                tracing::warn!(target: "park_agent", error = %e, "Failed to read TOML; using defaults");
                default
            }
        }
    }

    pub fn from_toml_str(s: &str, default: Self) -> Self {
        match toml::from_str::<ParkAgentToml>(s) {
            Ok(t) => t.overlay(default),
            Err(e) => {
                tracing::warn!(target: "park_agent", error = %e, "Failed to parse TOML; using defaults");
                default
            }
        }
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct ParkAgentToml {
    pub prompt: Option<String>,
    pub nps: Option<NpsToml>,
    pub dialogs: Option<HashMap<String, String>>,
}

impl ParkAgentToml {
    fn overlay(self, mut base: ParkAgentConfig) -> ParkAgentConfig {
        if let Some(p) = self.prompt {
            base.prompt = p;
        }
        if let Some(n) = self.nps {
            n.apply(&mut base.nps);
        }
        if let Some(d) = self.dialogs {
            base.dialogs.extend(d);
        }
        base
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct NpsToml {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_ms: Option<u64>,
    pub limit: Option<u32>,
}

impl NpsToml {
    fn apply(self, n: &mut NpsConfig) {
        if let Some(x) = self.base_url {
            n.base_url = x;
        }
        if let Some(x) = self.api_key {
            n.api_key = x.trim().to_string();
        }
        if let Some(x) = self.user_agent {
            n.user_agent = x;
        }
        if let Some(x) = self.timeout_ms {
            n.timeout_ms = x;
        }
        if let Some(x) = self.limit {
            // 0 means "let the API pick"
            n.limit = (x > 0).then_some(x);
        }
    }
}
