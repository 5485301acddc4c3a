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

//! Unified error system for pulsarctl
//!
//! Every crate in the workspace returns [`PulsarctlResult`]. Errors fall into
//! three groups:
//!
//! - **Argument errors** ([`ArgumentError`]): detected locally before any request is sent
//! - **Remote errors** ([`PulsarctlError::Remote`]): status and reason reported by the admin API
//! - **Everything else**: network, configuration, serialization and I/O failures

mod argument;
mod network;

use std::io;

pub use argument::ArgumentError;
pub use network::NetworkError;
use thiserror::Error;

/// Main error type for all pulsarctl operations
///
/// # Examples
///
/// ```rust
/// use pulsarctl_error::PulsarctlError;
/// use pulsarctl_error::PulsarctlResult;
///
/// fn lookup(tenant: &str) -> PulsarctlResult<()> {
///     if tenant == "missing" {
///         return Err(PulsarctlError::remote(404, "Tenant does not exist"));
///     }
///     Ok(())
/// }
///
/// let err = lookup("missing").unwrap_err();
/// assert_eq!(err.to_string(), "code: 404 reason: Tenant does not exist");
/// ```
#[derive(Debug, Error)]
pub enum PulsarctlError {
    // ============================================================================
    // Local Errors
    // ============================================================================
    /// Argument arity, resource name or flag validation errors
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    // ============================================================================
    // Remote Errors
    // ============================================================================
    /// Non-success response returned by the admin API, surfaced verbatim
    #[error("code: {code} reason: {reason}")]
    Remote { code: u16, reason: String },

    /// Transport level failures (connection, timeout, malformed URL)
    #[error(transparent)]
    Network(#[from] NetworkError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration could not be loaded or failed validation
    #[error("Invalid configuration for '{key}': {reason}")]
    ConfigParseFailed { key: String, reason: String },

    // ============================================================================
    // Serialization and I/O Errors
    // ============================================================================
    /// Response body or request payload could not be (de)serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Writing command output failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PulsarctlError {
    /// Create a remote error from a response status and reason
    #[inline]
    pub fn remote(code: u16, reason: impl Into<String>) -> Self {
        Self::Remote {
            code,
            reason: reason.into(),
        }
    }

    /// Create a name arity error with the given message
    #[inline]
    pub fn arity(message: impl Into<String>) -> Self {
        Self::Argument(ArgumentError::arity(message))
    }

    /// Create an invalid resource name error
    #[inline]
    pub fn invalid_name(kind: &'static str, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Argument(ArgumentError::invalid_name(kind, name, reason))
    }

    /// Create a flag validation error
    #[inline]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Argument(ArgumentError::validation(field, reason))
    }

    /// Create a configuration error
    #[inline]
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Status code of a remote error, `None` for local errors
    #[inline]
    pub fn remote_code(&self) -> Option<u16> {
        match self {
            Self::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the error was raised before any request left the process
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Argument(_) | Self::ConfigParseFailed { .. })
    }
}

// ============================================================================
// Error Conversion Implementations
// ============================================================================

#[cfg(feature = "with_serde")]
impl From<serde_json::Error> for PulsarctlError {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(feature = "with_config")]
impl From<config::ConfigError> for PulsarctlError {
    fn from(e: config::ConfigError) -> Self {
        let key = match &e {
            config::ConfigError::NotFound(key) => key.clone(),
            config::ConfigError::Type { key: Some(key), .. } => key.clone(),
            _ => "unknown".to_string(),
        };
        Self::ConfigParseFailed {
            key,
            reason: e.to_string(),
        }
    }
}

/// Result type alias for pulsarctl operations
pub type PulsarctlResult<T> = std::result::Result<T, PulsarctlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_display_contains_code_and_reason() {
        let err = PulsarctlError::remote(404, "Tenant does not exist");
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Tenant does not exist"));
        assert_eq!(err.remote_code(), Some(404));
        assert!(!err.is_local());
    }

    #[test]
    fn arity_error_is_transparent() {
        let err = PulsarctlError::arity("only one argument is allowed to be used as a name");
        assert_eq!(err.to_string(), "only one argument is allowed to be used as a name");
        assert!(err.is_local());
        assert_eq!(err.remote_code(), None);
    }

    #[test]
    fn invalid_name_error_mentions_kind() {
        let err = PulsarctlError::invalid_name("tenant", "a b", "contains invalid character ' '");
        assert_eq!(err.to_string(), "Invalid tenant name 'a b': contains invalid character ' '");
    }

    #[test]
    fn network_error_converts() {
        let err: PulsarctlError = NetworkError::connection_failed("http://localhost:8080", "refused").into();
        assert!(matches!(err, PulsarctlError::Network(_)));
        assert!(!err.is_local());
    }

    #[test]
    fn io_error_converts() {
        let err: PulsarctlError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(err.to_string().contains("pipe closed"));
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serde_json_error_converts() {
        let parse: Result<Vec<String>, _> = serde_json::from_str("{not json");
        let err: PulsarctlError = parse.unwrap_err().into();
        assert!(matches!(err, PulsarctlError::Serialization(_)));
    }
}
