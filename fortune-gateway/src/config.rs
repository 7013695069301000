//! Environment configuration, resolved once at startup

use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use tracing::{info, warn};

/// Runtime configuration for the gateway
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend host name
    pub backend_dns: String,

    /// Backend port
    pub backend_port: u16,

    /// Address the gateway listens on
    pub bind_address: SocketAddr,

    /// Directory served at `/`
    pub static_dir: PathBuf,

    /// Directory holding the fortunes template
    pub template_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            backend_dns: try_load("BACKEND_DNS", "localhost"),
            backend_port: try_load("BACKEND_PORT", "9000"),
            bind_address: try_load("BIND_ADDRESS", "0.0.0.0:8080"),
            static_dir: try_load("STATIC_DIR", "./static"),
            template_dir: try_load("TEMPLATE_DIR", "./templates"),
        }
    }

    /// Base URL for every outbound backend call
    pub fn backend_url(&self) -> String {
        format!("http://{}:{}", self.backend_dns, self.backend_port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Defaults and overrides share one test so the process-global
    // environment is only touched from a single thread.
    #[test]
    fn test_defaults_and_overrides() {
        for key in [
            "BACKEND_DNS",
            "BACKEND_PORT",
            "BIND_ADDRESS",
            "STATIC_DIR",
            "TEMPLATE_DIR",
        ] {
            env::remove_var(key);
        }

        let config = Config::from_env();
        assert_eq!(config.backend_dns, "localhost");
        assert_eq!(config.backend_port, 9000);
        assert_eq!(config.bind_address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert_eq!(config.template_dir, PathBuf::from("./templates"));
        assert_eq!(config.backend_url(), "http://localhost:9000");

        env::set_var("BACKEND_DNS", "fortunes.internal");
        env::set_var("BACKEND_PORT", "9100");
        env::set_var("BIND_ADDRESS", "127.0.0.1:9999");

        let config = Config::from_env();
        assert_eq!(config.backend_url(), "http://fortunes.internal:9100");
        assert_eq!(config.bind_address, "127.0.0.1:9999".parse().unwrap());

        for key in ["BACKEND_DNS", "BACKEND_PORT", "BIND_ADDRESS"] {
            env::remove_var(key);
        }
    }
}
