use anyhow::Result;
use config::{builder::DefaultState, Config as ConfigLoader, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use student_records_api::{observability::LogFormat, ApiSettings};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub jwt_secret: String,
    pub include_link_headers: bool,
    /// JSON seed for the in-memory store; the store starts empty without one.
    pub fixture_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::build(
            ConfigLoader::builder()
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false))
                .add_source(Environment::with_prefix("STUDENT_RECORDS").try_parsing(true)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            jwt_secret: self.jwt_secret.clone(),
            include_link_headers: self.include_link_headers,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            jwt_secret: ApiSettings::default().jwt_secret,
            include_link_headers: false,
            fixture_path: None,
        }
    }
}
