// src/config.rs
use std::env;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Where outgoing mail goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpSettings {
    /// Plain local SMTP (Mailpit) for test and development.
    Local { host: String, port: u16 },
    /// Authenticated relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub email_from: String,
    pub smtp: SmtpSettings,
    pub resume_date_stamp: bool,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load configuration from the process environment.
    ///
    /// `.env.{RUST_ENV}` is read first, `.env` is the fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let smtp = if environment == "test" || environment == "development" {
            SmtpSettings::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", lookup("SMTP_PORT"), 1025)?,
            }
        } else {
            SmtpSettings::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 20)?;

        Ok(Self {
            host: required("HOST")?,
            port: parse_or("PORT", lookup("PORT"), 8080)?,
            database: DatabaseSettings {
                url: required("DATABASE_URL")?,
                max_connections,
                min_connections: max_connections.min(2),
                connect_timeout: Duration::from_secs(5),
                idle_timeout: Duration::from_secs(300),
            },
            email_from: required("EMAIL_FROM")?,
            smtp,
            resume_date_stamp: parse_flag("RESUME_DATE_STAMP", lookup("RESUME_DATE_STAMP"), true)?,
            run_migrations: parse_flag("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), false)?,
            environment,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(_) => Err(ConfigError::Invalid {
            key,
            value: raw.unwrap_or_default(),
        }),
    }
}
