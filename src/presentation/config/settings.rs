use std::env;
use std::fmt;
use std::str::FromStr;

/// Deployment tier the service runs under. Controls log formatting defaults
/// and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!(
                "unknown environment {:?} (expected development, test, or production)",
                other
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        })
    }
}

/// Everything the service reads from its environment, resolved once at
/// startup. Nothing else reads `std::env` after construction.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub identity: IdentitySettings,
    pub ai: AiGatewaySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct IdentitySettings {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct AiGatewaySettings {
    /// Absent credential means every digitization request is refused with a
    /// configuration error; it is not a startup failure.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub environment: Environment,
    pub json_format: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = parse_var("SERVER_PORT", 3000)?;
        let request_timeout_seconds = parse_var("AI_REQUEST_TIMEOUT_SECONDS", 120)?;

        let environment = match env::var("APP_ENV") {
            Ok(value) => value.parse().map_err(|message| SettingsError::Invalid {
                key: "APP_ENV",
                message,
            })?,
            Err(_) => Environment::Development,
        };

        Ok(Self {
            server: ServerSettings {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            identity: IdentitySettings {
                base_url: env::var("IDENTITY_BASE_URL").unwrap_or_default(),
                api_key: env::var("IDENTITY_API_KEY").unwrap_or_default(),
            },
            ai: AiGatewaySettings {
                api_key: env::var("AI_GATEWAY_API_KEY").ok().filter(|k| !k.is_empty()),
                base_url: env::var("AI_GATEWAY_BASE_URL")
                    .unwrap_or_else(|_| "https://ai.gateway.lovable.dev".to_string()),
                model: env::var("AI_MODEL")
                    .unwrap_or_else(|_| "google/gemini-2.5-flash".to_string()),
                request_timeout_seconds,
            },
            logging: LoggingSettings {
                environment,
                json_format: env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(matches!(environment, Environment::Production)),
            },
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, SettingsError> {
    match env::var(key) {
        Ok(value) => value.parse().map_err(|_| SettingsError::Invalid {
            key,
            message: format!("could not parse {:?}", value),
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
