use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{defaults, env, files};
use crate::authentication::JwtAuthConfig;

/// Service configuration.
///
/// Sources, lowest precedence first: `config/base.json`, `config/local.json`,
/// then `KEYSTONE__*` environment variables (a `.env` file is honoured).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub postgres: PostgresSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    #[serde(default = "default_token_ttl_seconds")]
    pub token_ttl_seconds: i64,
    /// `0` disables the authentication timeout.
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl AuthSettings {
    pub fn jwt_auth_config(&self) -> JwtAuthConfig {
        JwtAuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            token_ttl_in_seconds: self.token_ttl_seconds,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_millis > 0).then(|| Duration::from_millis(self.timeout_millis))
    }
}

/// Without a URL the service keeps accounts in memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostgresSettings {
    #[serde(default)]
    pub url: Option<Secret<String>>,
}

/// CORS origins allowed to call the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self::from(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AllowedOrigins {
    fn from(origins: Vec<String>) -> Self {
        Self(
            origins
                .into_iter()
                .map(|origin| origin.trim().trim_end_matches('/').to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }
}

impl Settings {
    /// Load settings from config files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(File::with_name(files::BASE_CONFIG).required(false))
            .add_source(File::with_name(files::LOCAL_CONFIG).required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load settings from a JSON document, still letting the environment override it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX)
        .prefix_separator(env::ENV_SEPARATOR)
        .separator(env::ENV_SEPARATOR)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("auth.allowed_origins")
}

fn default_host() -> String {
    defaults::HOST.to_string()
}

fn default_port() -> u16 {
    defaults::PORT
}

fn default_token_ttl_seconds() -> i64 {
    defaults::TOKEN_TTL_SECONDS
}

fn default_timeout_millis() -> u64 {
    defaults::AUTH_TIMEOUT_MILLIS
}
