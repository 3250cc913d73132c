use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::MatchThresholds;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub seed: SeedSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_strong_threshold")]
    pub strong_threshold: u8,
    #[serde(default = "default_moderate_threshold")]
    pub moderate_threshold: u8,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u16,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            strong_threshold: default_strong_threshold(),
            moderate_threshold: default_moderate_threshold(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl ScoringSettings {
    pub fn thresholds(&self) -> MatchThresholds {
        MatchThresholds {
            strong: self.strong_threshold,
            moderate: self.moderate_threshold,
        }
    }
}

fn default_strong_threshold() -> u8 { 70 }
fn default_moderate_threshold() -> u8 { 40 }
fn default_suggestion_limit() -> u16 { 5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedSettings {
    /// TOML seed file; the bundled roster is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRIPMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRIPMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TRIPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TRIPMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let scoring = &self.scoring;
        if scoring.strong_threshold > 100 || scoring.moderate_threshold > scoring.strong_threshold {
            return Err(ConfigError::Message(format!(
                "scoring thresholds must satisfy moderate <= strong <= 100 (got {} / {})",
                scoring.moderate_threshold, scoring.strong_threshold
            )));
        }
        if scoring.suggestion_limit == 0 {
            return Err(ConfigError::Message("scoring.suggestion_limit must be at least 1".to_string()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Environment overrides are process-wide; tests that load settings hold this
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_thresholds() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.thresholds(), MatchThresholds::default());
        assert_eq!(scoring.suggestion_limit, 5);
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9090\nhost = \"127.0.0.1\"").unwrap();

        std::env::set_var("TRIPMATCH__SERVER__PORT", "7070");
        let settings = Settings::load_from(file.path());
        std::env::remove_var("TRIPMATCH__SERVER__PORT");
        let settings = settings.unwrap();

        assert_eq!(settings.server.port, 7070);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[scoring]\nstrong_threshold = 80\n\n[seed]\npath = \"data/seed.toml\""
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.strong_threshold, 80);
        assert_eq!(settings.scoring.moderate_threshold, 40);
        assert_eq!(settings.seed.path.as_deref(), Some("data/seed.toml"));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[scoring]\nstrong_threshold = 30\nmoderate_threshold = 60").unwrap();

        assert!(Settings::load_from(file.path()).is_err());
    }
}
