use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
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
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_early_access_bonus")]
    pub early_access_bonus: f64,
    #[serde(default = "default_early_access_max_class")]
    pub early_access_max_class: u8,
    #[serde(default = "default_early_access_careers")]
    pub early_access_careers: Vec<String>,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            early_access_bonus: default_early_access_bonus(),
            early_access_max_class: default_early_access_max_class(),
            early_access_careers: default_early_access_careers(),
            max_recommendations: default_max_recommendations(),
        }
    }
}

fn default_early_access_bonus() -> f64 { 0.1 }
fn default_early_access_max_class() -> u8 { 10 }
fn default_early_access_careers() -> Vec<String> {
    vec!["teacher".to_string(), "graphic_designer".to_string()]
}
fn default_max_recommendations() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interest_weight")]
    pub interest: f64,
    #[serde(default = "default_aptitude_weight")]
    pub aptitude: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interest: default_interest_weight(),
            aptitude: default_aptitude_weight(),
        }
    }
}

fn default_interest_weight() -> f64 { 0.7 }
fn default_aptitude_weight() -> f64 { 0.3 }

impl From<&ScoringSettings> for ScoringWeights {
    fn from(settings: &ScoringSettings) -> Self {
        Self {
            interest: settings.weights.interest,
            aptitude: settings.weights.aptitude,
            early_access_bonus: settings.early_access_bonus,
            early_access_max_class: settings.early_access_max_class,
            early_access_careers: settings.early_access_careers.clone(),
            max_recommendations: settings.max_recommendations,
        }
    }
}

/// Optional alternative catalog; the built-in one is used when unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
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
    /// 4. Environment variables (prefixed with EDUPATH_)
    /// 5. `PORT` and `CATALOG_PATH` shortcuts
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EDUPATH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EDUPATH")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("scoring.early_access_careers")
                    .try_parsing(true),
            )
            .build()?;

        apply_env_shortcuts(settings)?.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring)
    }
}

/// Honour the conventional `PORT` and `CATALOG_PATH` variables
fn apply_env_shortcuts(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid PORT '{}': {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Ok(path) = env::var("CATALOG_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.interest, 0.7);
        assert_eq!(weights.aptitude, 0.3);
    }

    #[test]
    fn test_scoring_settings_match_engine_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scoring_weights(), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[scoring]\nearly_access_bonus = 0.2\n\n[server]\nport = 9000\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.early_access_bonus, 0.2);
        assert_eq!(settings.scoring.max_recommendations, 10);
        assert!(settings.catalog.path.is_none());
    }
}
