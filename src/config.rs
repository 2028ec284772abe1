use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::generate::media::DEFAULT_PLACEHOLDER_BASE_URL;
use crate::session::DEFAULT_SESSION_TIMEOUT;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,

    /// Answer every mock call immediately
    #[arg(long, env = "MOCK_INSTANT")]
    pub instant: bool,

    /// Reject sign-ups whose password confirmation differs
    #[arg(long, env = "ENFORCE_PASSWORD_MATCH")]
    pub enforce_password_match: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub mock: MockConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    pub auth_delay_ms: u64,
    pub thumbnail_delay_ms: u64,
    pub script_delay_ms: u64,
    pub video_delay_ms: u64,
    pub placeholder_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub enforce_password_match: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl SessionConfig {
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Defaults, then the config file, then `CLIPGEN_` env vars, then CLI flags.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("server.static_dir", "static")?
            .set_default("log.json", false)?
            .set_default("mock.auth_delay_ms", 1000)?
            .set_default("mock.thumbnail_delay_ms", 2000)?
            .set_default("mock.script_delay_ms", 2000)?
            .set_default("mock.video_delay_ms", 3000)?
            .set_default("mock.placeholder_base_url", DEFAULT_PLACEHOLDER_BASE_URL)?
            .set_default("auth.enforce_password_match", false)?
            .set_default("session.idle_timeout_secs", DEFAULT_SESSION_TIMEOUT.as_secs())?
            .set_default("session.sweep_interval_secs", 60)?;

        // An explicit path must exist; the cwd fallback is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path).required(true));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
        }

        // E.g. CLIPGEN_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("CLIPGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if cli.log_json {
            builder = builder.set_override("log.json", true)?;
        }
        if let Some(enforce) = cli.enforce_password_match {
            builder = builder.set_override("auth.enforce_password_match", enforce)?;
        }
        if cli.instant {
            for key in [
                "mock.auth_delay_ms",
                "mock.thumbnail_delay_ms",
                "mock.script_delay_ms",
                "mock.video_delay_ms",
            ] {
                builder = builder.set_override(key, 0)?;
            }
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_defaults() {
        let config = AppConfig::load_from_args([
            "clipgen",
            "--port",
            "4100",
            "--instant",
            "--enforce-password-match",
            "true",
        ])
        .unwrap();

        assert_eq!(config.server.port, 4100);
        assert_eq!(config.mock.video_delay_ms, 0);
        assert!(config.auth.enforce_password_match);
    }

    #[test]
    fn test_log_json_is_a_flag() {
        let config = AppConfig::load_from_args(["clipgen", "--log-json"]).unwrap();
        assert!(config.log.json);

        let config = AppConfig::load_from_args(["clipgen"]).unwrap();
        assert!(!config.log.json);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load_from_args(["clipgen", "--config", "/nonexistent/clipgen.yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duration_helpers() {
        let session = SessionConfig {
            idle_timeout_secs: 90,
            sweep_interval_secs: 0,
        };
        assert_eq!(session.idle_timeout(), Duration::from_secs(90));
        assert_eq!(session.sweep_interval(), Duration::from_secs(1));
    }
}
