use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

pub const CONFIG_FILE: &str = "console.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of a REST catalog service. Without one the console runs
    /// against the in-process backend.
    pub api_base_url: Option<String>,
    pub api_token: Option<String>,
    pub request_timeout_secs: Option<u64>,
    /// Re-fetch everything after a successful status write.
    pub refresh_after_mutation: bool,
    /// Mailbox size of each in-process record actor.
    pub channel_buffer: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_token: None,
            request_timeout_secs: None,
            refresh_after_mutation: true,
            channel_buffer: 32,
        }
    }
}

/// Reads `console.toml` from the working directory if present, then applies
/// `CONSOLE_*` environment overrides.
pub fn load_config() -> ConsoleConfig {
    let raw = fs::read_to_string(Path::new(CONFIG_FILE)).ok();
    ConsoleConfig::from_sources(raw.as_deref(), |key| std::env::var(key).ok())
}

impl ConsoleConfig {
    pub fn from_sources(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match file.map(toml::from_str::<ConsoleConfig>) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!(error = %e, "Ignoring malformed {}", CONFIG_FILE);
                ConsoleConfig::default()
            }
            None => ConsoleConfig::default(),
        };

        if config.channel_buffer == 0 {
            warn!("Ignoring channel_buffer = 0");
            config.channel_buffer = ConsoleConfig::default().channel_buffer;
        }

        if let Some(v) = env("CONSOLE_API_URL") {
            config.api_base_url = Some(v).filter(|v| !v.trim().is_empty());
        }
        if let Some(v) = env("CONSOLE_API_TOKEN") {
            config.api_token = Some(v).filter(|v| !v.is_empty());
        }
        if let Some(v) = env("CONSOLE_REQUEST_TIMEOUT_SECS") {
            match v.parse::<u64>() {
                Ok(secs) => config.request_timeout_secs = Some(secs),
                Err(_) => warn!(value = %v, "Ignoring CONSOLE_REQUEST_TIMEOUT_SECS"),
            }
        }
        if let Some(v) = env("CONSOLE_REFRESH_AFTER_MUTATION") {
            match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.refresh_after_mutation = true,
                "0" | "false" | "no" => config.refresh_after_mutation = false,
                _ => warn!(value = %v, "Ignoring CONSOLE_REFRESH_AFTER_MUTATION"),
            }
        }

        config
    }
}
