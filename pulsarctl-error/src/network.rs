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

//! Transport errors talking to the admin service

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection to the admin service failed
    #[error("Connection failed to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    /// Request did not complete within the configured timeout
    #[error("Request timeout to {url} after {timeout_ms}ms")]
    RequestTimeout { url: String, timeout_ms: u64 },

    /// Admin service URL could not be parsed or extended
    #[error("Invalid admin service url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Response body could not be read
    #[error("Receive failed from {url}: {reason}")]
    ReceiveFailed { url: String, reason: String },
}

impl NetworkError {
    #[inline]
    pub fn connection_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn request_timeout(url: impl Into<String>, timeout_ms: u64) -> Self {
        Self::RequestTimeout {
            url: url.into(),
            timeout_ms,
        }
    }

    #[inline]
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn receive_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReceiveFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
