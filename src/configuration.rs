use crate::domain::SubmitterEmail;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub rate_limit: RateLimitSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    // Environment variables are strings for the `config` crate, so integers need the
    // lenient deserializer from `serde-aux` to pick up `APP_APPLICATION__PORT` overrides.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    /// Where form notifications are delivered. Falls back to the sender account itself
    /// when no dedicated inbox is configured.
    pub recipient_email: Option<String>,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<SubmitterEmail, String> {
        SubmitterEmail::parse(self.sender_email.clone())
    }

    pub fn recipient(&self) -> Result<SubmitterEmail, String> {
        match &self.recipient_email {
            Some(address) => SubmitterEmail::parse(address.clone()),
            None => self.sender(),
        }
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct RateLimitSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_requests: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_seconds: u64,
}

impl RateLimitSettings {
    pub fn window(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.window_seconds)
    }
}

/// Reads `configuration.yaml` from the working directory, then layers `APP_`-prefixed
/// environment variables on top, e.g. `APP_APPLICATION__PORT=8001` would set
/// `Settings.application.port`. The double underscore separates nesting levels so that
/// field names themselves may contain single underscores.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
