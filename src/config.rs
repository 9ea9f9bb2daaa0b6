//! Runtime configuration: defaults, then environment, then command-line flags

use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_RUN_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOG: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Where `install.sh` and `uninstall.sh` are looked up.
    pub scripts_dir: PathBuf,
    /// Artificial pause before a playground run answers.
    pub run_delay_ms: u64,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            scripts_dir: PathBuf::from("."),
            run_delay_ms: DEFAULT_RUN_DELAY_MS,
            log: DEFAULT_LOG.to_string(),
        }
    }
}

/// Command-line flags; each one, when given, beats the environment.
#[derive(StructOpt, Debug, Clone, Default)]
pub struct Overrides {
    /// Address to bind
    #[structopt(long)]
    pub host: Option<String>,
    /// Port to listen on
    #[structopt(short, long)]
    pub port: Option<u16>,
    /// Directory holding install.sh and uninstall.sh
    #[structopt(long, parse(from_os_str))]
    pub scripts_dir: Option<PathBuf>,
    /// Delay before the playground answers a run, in milliseconds
    #[structopt(long)]
    pub run_delay_ms: Option<u64>,
    /// Log filter, e.g. `info` or `rift_site=debug`
    #[structopt(long)]
    pub log: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, which maps variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = non_empty("HOST", host)?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_number("PORT", &port)?;
        }
        if let Some(dir) = lookup("RIFT_SCRIPTS_DIR") {
            config.scripts_dir = PathBuf::from(non_empty("RIFT_SCRIPTS_DIR", dir)?);
        }
        if let Some(delay) = lookup("RIFT_RUN_DELAY_MS") {
            config.run_delay_ms = parse_number("RIFT_RUN_DELAY_MS", &delay)?;
        }
        if let Some(log) = lookup("RUST_LOG") {
            if !log.trim().is_empty() {
                config.log = log;
            }
        }

        Ok(config)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(dir) = overrides.scripts_dir {
            self.scripts_dir = dir;
        }
        if let Some(delay) = overrides.run_delay_ms {
            self.run_delay_ms = delay;
        }
        if let Some(log) = overrides.log {
            self.log = log;
        }
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty { var })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "0.0.0.0:5000");
        assert_eq!(config.run_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = from_pairs(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RIFT_SCRIPTS_DIR", "/srv/rift"),
            ("RIFT_RUN_DELAY_MS", "0"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.scripts_dir, PathBuf::from("/srv/rift"));
        assert_eq!(config.run_delay_ms, 0);
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn flags_beat_environment() {
        let config = from_pairs(&[("PORT", "8080"), ("RIFT_RUN_DELAY_MS", "250")])
            .unwrap()
            .apply(Overrides {
                port: Some(9000),
                ..Overrides::default()
            });
        assert_eq!(config.port, 9000);
        assert_eq!(config.run_delay_ms, 250);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert_eq!(
            from_pairs(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidNumber {
                var: "PORT",
                value: "eighty".to_string()
            })
        );
        assert!(from_pairs(&[("PORT", "70000")]).is_err());
        assert!(from_pairs(&[("RIFT_RUN_DELAY_MS", "-5")]).is_err());
    }

    #[test]
    fn empty_host_is_rejected_and_blank_log_ignored() {
        assert_eq!(from_pairs(&[("HOST", " ")]), Err(ConfigError::Empty { var: "HOST" }));
        assert_eq!(from_pairs(&[("RUST_LOG", "")]).unwrap().log, "info");
    }

    #[test]
    fn flags_parse_from_args() {
        let overrides = Overrides::from_iter(["serve", "--port", "7000", "--run-delay-ms", "10"]);
        assert_eq!(overrides.port, Some(7000));
        assert_eq!(overrides.run_delay_ms, Some(10));
        assert_eq!(overrides.host, None);
    }
}
