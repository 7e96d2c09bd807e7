use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_fit_score")]
    pub min_fit_score: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_fit_score: default_min_fit_score(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_fit_score() -> f64 { 60.0 }
fn default_max_results() -> usize { 5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_gmat_weight")]
    pub gmat: f64,
    #[serde(default = "default_gpa_weight")]
    pub gpa: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_career_weight")]
    pub career: f64,
    #[serde(default = "default_roi_weight")]
    pub roi: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            gmat: default_gmat_weight(),
            gpa: default_gpa_weight(),
            experience: default_experience_weight(),
            career: default_career_weight(),
            roi: default_roi_weight(),
        }
    }
}

fn default_gmat_weight() -> f64 { 0.30 }
fn default_gpa_weight() -> f64 { 0.20 }
fn default_experience_weight() -> f64 { 0.15 }
fn default_career_weight() -> f64 { 0.15 }
fn default_roi_weight() -> f64 { 0.20 }

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
    /// 3. Environment variables (prefixed with UNIFIT_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with UNIFIT_)
            // e.g., UNIFIT_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("UNIFIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("UNIFIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment overrides on top of the layered config
///
/// CATALOG_PATH is checked first, then UNIFIT_CATALOG__PATH, falling back to
/// the bundled data file.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let catalog_path = env::var("CATALOG_PATH")
        .or_else(|_| env::var("UNIFIT_CATALOG__PATH"))
        .unwrap_or_else(|_| "data/universities.json".to_string());

    Config::builder()
        .add_source(settings)
        .set_override("catalog.path", catalog_path)?
        .build()
}
