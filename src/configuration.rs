use std::time::Duration;

use serde_aux::field_attributes::deserialize_number_from_string;

use crate::crm_client::CrmClient;
use crate::domain::SourceTag;
use crate::theme::{NavigationTarget, Theme};

#[derive(Debug)]
pub enum Environment {
    Development,
    Production
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production"
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. `development` and `production` are acceptable.",
                other
            ))
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
    pub landing: LandingSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String
}

/// The CRM endpoint lead submissions are forwarded to.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct UpstreamSettings {
    pub base_url: String,
    #[serde(default)]
    pub source: SourceTag,
}

impl UpstreamSettings {
    pub fn client(&self) -> Result<CrmClient, String> {
        CrmClient::new(&self.base_url, self.source.clone())
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct LandingSettings {
    #[serde(default)]
    pub theme: Theme,
    pub redirect_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub redirect_delay_milliseconds: u64,
    #[serde(default)]
    pub open_in: NavigationTarget,
    /// Merge `redirectUrl` into successful proxy responses.
    #[serde(default)]
    pub decorate_success_redirect: bool,
}

impl LandingSettings {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to determine current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("RUST_ENV")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(configuration_directory.join(environment_filename)))
        // e.g. `APP_UPSTREAM__BASE_URL=https://crm.example.com` sets `upstream.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
