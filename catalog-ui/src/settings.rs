use config::{Config, ConfigError, File, Map};
use num_format::Locale;
use serde::Deserialize;
use snafu::ResultExt;
use strum::{AsRefStr, EnumString};

use crate::error::{
    Result,
    error::{ConfigSnafu, InvalidLocaleSnafu, MissingConfigurationSnafu},
};

/// Values that must be present before any screen embedding an edit dialog is built.
const REQUIRED_KEYS: [&str; 2] = ["store.url", "store.api_key"];

const ENV_PREFIX: &str = "SPECIES_CATALOG";

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub environment: Environment,
    pub store: postgrest::Settings,
    pub display_locale: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Local,
    Development,
    Test,
    Production,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self::layered(environment, None)
    }

    /// Layers `config/{environment}`, its `.secret` companion and
    /// `SPECIES_CATALOG__*` variables, later sources winning. Variables are
    /// read from the process unless `variables` is given.
    pub fn layered(
        environment: Environment,
        variables: Option<Map<String, String>>,
    ) -> Result<Self> {
        let environment = environment.as_ref();

        let config = Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name(&format!("config/{environment}.secret")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(variables),
            )
            .set_override("environment", environment)
            .context(ConfigSnafu)?
            .build()
            .context(ConfigSnafu)?;

        Self::from_config(config)
    }

    /// Deserializes settings from an already layered configuration, failing
    /// with a missing configuration error when a required value is absent or blank.
    pub fn from_config(config: Config) -> Result<Self> {
        for key in REQUIRED_KEYS {
            match config.get_string(key) {
                Ok(value) if !value.trim().is_empty() => {}
                Ok(_) | Err(ConfigError::NotFound(_)) => {
                    return MissingConfigurationSnafu { key }.fail();
                }
                Err(e) => return Err(e).context(ConfigSnafu),
            }
        }

        config.try_deserialize().context(ConfigSnafu)
    }

    pub fn locale(&self) -> Result<Locale> {
        match &self.display_locale {
            None => Ok(Locale::en),
            Some(name) => Locale::from_name(name).context(InvalidLocaleSnafu { name }),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
