use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{PaymentRequest, RequestError};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub gateway: GatewaySettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct GatewaySettings {
    pub base_url: String,
    pub pspid: String,
    pub currency: String,
    pub language: String,
}

impl GatewaySettings {
    /// A base request carrying the merchant's account parameters.
    pub fn payment_request(&self) -> Result<PaymentRequest, RequestError> {
        let mut request = PaymentRequest::new();
        request.set_gateway_url(&self.base_url)?;
        request.set_pspid(&self.pspid)?;
        request.set_currency(&self.currency)?;
        request.set_language(&self.language)?;
        Ok(request)
    }
}

pub fn get_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("failed to determine the current directory: {}", e))
    })?;
    let config_dir = base_path.join("configuration");

    // detect the running environment, default to `local`.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(environment_filename)))
        // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
