use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub graph: GraphConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the identity provider and the directory API.
/// Secrets are always injected here (file or environment), never compiled in.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GraphConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub login_url: String,
    pub scope: String,
    pub api_url: String,
    pub timeout_seconds: u64,
}

impl Settings {
    /// Layered load: defaults, `config/default`, `config/{APP_ENV}`, then
    /// `APP__`-prefixed environment variables. Missing credentials surface
    /// as a `ConfigError` here, before the server starts listening.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("graph.login_url", "https://login.microsoftonline.com")?
            .set_default("graph.scope", "https://graph.microsoft.com/.default")?
            .set_default("graph.api_url", "https://graph.microsoft.com/v1.0")?
            .set_default("graph.timeout_seconds", 30)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}
