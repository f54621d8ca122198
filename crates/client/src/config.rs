use serde::{Deserialize, Serialize};
use url::Url;

/// Default address of a local daemon's RPC listener.
pub const DEFAULT_REMOTE: &str = "http://127.0.0.1:5001";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the daemon, without the `/api/v0` suffix
    #[serde(default = "default_remote")]
    pub remote: Url,
    /// Overall per-request timeout; unset means wait until the daemon
    ///  answers or the call is cancelled
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_remote() -> Url {
    Url::parse(DEFAULT_REMOTE).expect("hardcoded URL must parse")
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Config {
    pub fn new(remote: Url) -> Self {
        Self {
            remote,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.remote.as_str(), "http://127.0.0.1:5001/");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_overrides_from_toml() {
        let config: Config = toml::from_str(
            r#"
            remote = "http://10.0.0.2:5002"
            timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.remote.port(), Some(5002));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.connect_timeout_secs, 10);
    }
}
