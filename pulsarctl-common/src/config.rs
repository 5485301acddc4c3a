/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Cluster connection settings
//!
//! Sources are layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML config file (`--config`, or `$CONFIG_DIR/pulsarctl/config.toml` when present)
//! 3. `PULSARCTL_*` environment variables
//! 4. flags given on the command line ([`ConfigOverrides`])

use std::path::Path;
use std::path::PathBuf;

use config::Config;
use config::Environment;
use config::File;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use url::Url;

pub const DEFAULT_WEB_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const ENV_PREFIX: &str = "PULSARCTL";

/// Connection settings for one Pulsar cluster's admin service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub web_service_url: String,
    pub auth_token: Option<String>,
    pub request_timeout_ms: u64,
    pub tls_allow_insecure: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            web_service_url: DEFAULT_WEB_SERVICE_URL.to_string(),
            auth_token: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            tls_allow_insecure: false,
        }
    }
}

/// Values supplied through command-line flags; `None` leaves lower layers alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub web_service_url: Option<String>,
    pub auth_token: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl ClusterConfig {
    /// Loads the layered configuration.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> PulsarctlResult<Self> {
        Self::load_with_env(
            config_file,
            overrides,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    fn load_with_env(
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
        environment: Environment,
    ) -> PulsarctlResult<Self> {
        let mut builder = Config::builder()
            .set_default("web_service_url", DEFAULT_WEB_SERVICE_URL)?
            .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS)?
            .set_default("tls_allow_insecure", false)?;

        match config_file {
            Some(path) => {
                debug!("loading pulsarctl config from {}", path.display());
                builder = builder.add_source(File::from(path));
            }
            None => {
                if let Some(path) = default_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        let cfg = builder
            .add_source(environment)
            .set_override_option("web_service_url", overrides.web_service_url.clone())?
            .set_override_option("auth_token", overrides.auth_token.clone())?
            .set_override_option("request_timeout_ms", overrides.request_timeout_ms)?
            .build()?;

        let cluster_config = cfg.try_deserialize::<ClusterConfig>()?;
        cluster_config.validate()?;
        Ok(cluster_config)
    }

    /// Checks that the URL is an absolute http(s) URL and the timeout is positive.
    pub fn validate(&self) -> PulsarctlResult<()> {
        let url = Url::parse(&self.web_service_url)
            .map_err(|e| PulsarctlError::config("web_service_url", format!("'{}': {e}", self.web_service_url)))?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(PulsarctlError::config(
                    "web_service_url",
                    format!("unsupported scheme '{other}', expected http or https"),
                ))
            }
        }
        if self.request_timeout_ms == 0 {
            return Err(PulsarctlError::config(
                "request_timeout_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// `$CONFIG_DIR/pulsarctl/config.toml`, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pulsarctl").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use config::Map;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = ClusterConfig::default();
        assert_eq!(config.web_service_url, DEFAULT_WEB_SERVICE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_explicit_file() {
        let file = write_config(
            r#"
web_service_url = "https://pulsar.example.com:8443"
auth_token = "secret"
request_timeout_ms = 5000
"#,
        );
        let config = ClusterConfig::load(Some(file.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.web_service_url, "https://pulsar.example.com:8443");
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout_ms, 5000);
        assert!(!config.tls_allow_insecure);
    }

    #[test]
    fn overrides_win_over_file() {
        let file = write_config("web_service_url = \"http://from-file:8080\"\n");
        let overrides = ConfigOverrides {
            web_service_url: Some("http://from-flag:8080".to_string()),
            auth_token: None,
            request_timeout_ms: Some(1000),
        };
        let config = ClusterConfig::load(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.web_service_url, "http://from-flag:8080");
        assert_eq!(config.request_timeout_ms, 1000);
    }

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let mut source = Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config(
            r#"
web_service_url = "http://from-file:8080"
auth_token = "file-token"
request_timeout_ms = 5000
"#,
        );
        let env = environment(&[
            ("PULSARCTL_WEB_SERVICE_URL", "http://from-env:8080"),
            ("PULSARCTL_REQUEST_TIMEOUT_MS", "7000"),
            ("OTHER_AUTH_TOKEN", "ignored"),
        ]);
        let config = ClusterConfig::load_with_env(Some(file.path()), &ConfigOverrides::default(), env).unwrap();
        assert_eq!(config.web_service_url, "http://from-env:8080");
        assert_eq!(config.request_timeout_ms, 7000);
        assert_eq!(config.auth_token.as_deref(), Some("file-token"));
    }

    #[test]
    fn flags_override_environment() {
        let env = environment(&[
            ("PULSARCTL_WEB_SERVICE_URL", "http://from-env:8080"),
            ("PULSARCTL_AUTH_TOKEN", "env-token"),
        ]);
        let overrides = ConfigOverrides {
            web_service_url: Some("https://from-flag:8443".to_string()),
            ..ConfigOverrides::default()
        };
        let config = ClusterConfig::load_with_env(None, &overrides, env).unwrap();
        assert_eq!(config.web_service_url, "https://from-flag:8443");
        assert_eq!(config.auth_token.as_deref(), Some("env-token"));
    }

    #[test]
    fn invalid_environment_value_is_rejected() {
        let env = environment(&[("PULSARCTL_WEB_SERVICE_URL", "ftp://from-env:21")]);
        let err = ClusterConfig::load_with_env(None, &ConfigOverrides::default(), env).unwrap_err();
        assert!(err.to_string().contains("web_service_url"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = ClusterConfig::load(
            Some(Path::new("/nonexistent/pulsarctl/config.toml")),
            &ConfigOverrides::default(),
        );
        assert!(matches!(result, Err(PulsarctlError::ConfigParseFailed { .. })));
    }

    #[test]
    fn validate_rejects_bad_scheme() {
        let config = ClusterConfig {
            web_service_url: "pulsar://localhost:6650".to_string(),
            ..ClusterConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'pulsar'"));
    }

    #[test]
    fn validate_rejects_unparsable_url() {
        let config = ClusterConfig {
            web_service_url: "localhost".to_string(),
            ..ClusterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = ClusterConfig {
            request_timeout_ms: 0,
            ..ClusterConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("request_timeout_ms"));
    }

    #[test]
    fn default_config_path_ends_with_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("pulsarctl/config.toml"));
        }
    }
}
