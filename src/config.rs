//! Configuration management for Workbench.
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present). Values are read once at startup; handlers see them through
//! [`crate::AppState`].

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::site::Site;
use crate::{Error, Result};

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration, loading it on first use.
pub fn config() -> Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = Config::from_env()?;
    Ok(CONFIG.get_or_init(|| loaded))
}

/// Initialize configuration (call once at startup)
pub fn init() -> Result<&'static Config> {
    config()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub site: Site,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub git: GitIdentity,
    pub lab: LabConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(debug: bool) -> &'static str {
        if debug {
            "workbench=debug,tower_http=debug"
        } else {
            "workbench=info,tower_http=info"
        }
    }
}

/// Repository and committer details shown on the starter sites.
///
/// Unset variables become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub repo_url: String,
    pub user_name: String,
    pub user_email: String,
}

/// Settings for the Python lab dashboard.
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// Environment name shown on the dashboard (`FLASK_ENV`).
    pub environment: String,
    /// Explicit interpreter version, skips probing when set.
    pub python_version: Option<String>,
    pub notebook_url: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let site: Site = var("SITE", "mod0").parse().map_err(Error::Config)?;

        let port = var("PORT", "5000");
        let port = port
            .parse::<u16>()
            .map_err(|_| Error::Config(format!("Invalid PORT: {}", port)))?;

        let debug = parse_bool(&var("DEBUG", "true"))
            .ok_or_else(|| Error::Config("Invalid DEBUG: expected true or false".into()))?;

        let format: LogFormat = var("LOG_FORMAT", "pretty").parse().map_err(Error::Config)?;

        let git = GitIdentity {
            repo_url: site
                .repo_url_var()
                .and_then(&lookup)
                .unwrap_or_default(),
            user_name: var("GIT_USER_NAME", ""),
            user_email: var("GIT_USER_EMAIL", ""),
        };

        Ok(Self {
            site,
            server: ServerConfig {
                host: var("HOST", "0.0.0.0"),
                port,
                debug,
            },
            logging: LoggingConfig { format },
            git,
            lab: LabConfig {
                environment: var("FLASK_ENV", "development"),
                python_version: lookup("PYTHON_VERSION").filter(|v| !v.trim().is_empty()),
                notebook_url: var("NOTEBOOK_URL", "http://localhost:8888"),
            },
        })
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
