use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TracewrightConfig {
    pub storage: StorageConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Snapshot file the CLI loads, mutates, and rewrites each invocation.
    pub snapshot_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for TracewrightConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let snapshot_path = default_tracewright_dir()
            .join("conversation.json")
            .to_string_lossy()
            .into_owned();
        Self { snapshot_path }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Returns `~/.tracewright/`
pub fn default_tracewright_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".tracewright")
}

/// Returns the default config file path: `~/.tracewright/config.toml`
pub fn default_config_path() -> PathBuf {
    default_tracewright_dir().join("config.toml")
}

impl TracewrightConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            TracewrightConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (TRACEWRIGHT_SNAPSHOT, TRACEWRIGHT_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TRACEWRIGHT_SNAPSHOT") {
            self.storage.snapshot_path = val;
        }
        if let Ok(val) = std::env::var("TRACEWRIGHT_LOG_LEVEL") {
            self.log.level = val;
        }
    }

    /// Resolve the snapshot path, expanding `~` if needed.
    pub fn resolved_snapshot_path(&self) -> PathBuf {
        expand_tilde(&self.storage.snapshot_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests that read or write TRACEWRIGHT_* env vars must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn default_config_is_valid() {
        let config = TracewrightConfig::default();
        assert_eq!(config.log.level, "info");
        assert!(config.storage.snapshot_path.ends_with("conversation.json"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[storage]
snapshot_path = "/tmp/session.json"

[log]
level = "debug"
"#;
        let config: TracewrightConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.snapshot_path, "/tmp/session.json");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let config = TracewrightConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn load_from_reads_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nsnapshot_path = \"/tmp/file.json\"\n").unwrap();
        let config = TracewrightConfig::load_from(&path).unwrap();
        assert_eq!(config.storage.snapshot_path, "/tmp/file.json");
        // defaults still apply for unset sections
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn env_overrides_apply() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut config = TracewrightConfig::default();
        std::env::set_var("TRACEWRIGHT_SNAPSHOT", "/tmp/override.json");
        std::env::set_var("TRACEWRIGHT_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.storage.snapshot_path, "/tmp/override.json");
        assert_eq!(config.log.level, "trace");

        // Clean up
        std::env::remove_var("TRACEWRIGHT_SNAPSHOT");
        std::env::remove_var("TRACEWRIGHT_LOG_LEVEL");
    }
}
