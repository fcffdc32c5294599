//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::models::prospect::ListDecodeMode;

pub const DEFAULT_HOST: &str = "app.prospety.com/api";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Settings needed to construct a [`crate::client::Client`].
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    /// Host and path prefix of the API, without scheme.
    #[serde(default = "default_host")]
    pub host: String,
    /// Request pacing; absent means unlimited.
    #[serde(default)]
    pub requests_per_second: Option<u32>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub list_decode_mode: ListDecodeMode,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: default_host(),
            requests_per_second: None,
            timeout_secs: default_timeout_secs(),
            list_decode_mode: ListDecodeMode::default(),
        }
    }
}

#[cfg(feature = "client")]
impl ClientConfig {
    /// Loads `{dir}/default.*`, then `{dir}/{profile}.*`, then `PROSPETY_*`
    /// environment variables, later sources overriding earlier ones.
    pub fn load(dir: &std::path::Path, profile: &str) -> Result<Self, config::ConfigError> {
        let default = dir.join("default");
        let profile = dir.join(profile);
        config::Config::builder()
            .add_source(config::File::with_name(&default.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&profile.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("PROSPETY"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(all(test, feature = "client"))]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_apply_to_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.yaml"), "api_key: secret\n").unwrap();

        let config = ClientConfig::load(dir.path(), "local").unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.requests_per_second, None);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.list_decode_mode, ListDecodeMode::FailFast);
    }

    #[test]
    fn profile_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "api_key: secret\nrequests_per_second: 5\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.yaml"),
            "host: staging.prospety.test/api\nlist_decode_mode: skip\n",
        )
        .unwrap();

        let config = ClientConfig::load(dir.path(), "staging").unwrap();

        assert_eq!(config.host, "staging.prospety.test/api");
        assert_eq!(config.requests_per_second, Some(5));
        assert_eq!(config.list_decode_mode, ListDecodeMode::Skip);
    }
}
