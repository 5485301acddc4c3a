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
use std::time::Duration;

use pulsarctl_common::config::ClusterConfig;
use pulsarctl_error::NetworkError;
use pulsarctl_error::PulsarctlResult;
use reqwest::blocking::Client;
use reqwest::header::HeaderValue;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::transport::AdminRequest;
use crate::transport::AdminTransport;
use crate::transport::HttpMethod;
use crate::transport::HttpResult;

const USER_AGENT: &str = concat!("pulsarctl-rust/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport backed by `reqwest`
pub struct BlockingHttpTransport {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
    timeout_ms: u64,
}

impl BlockingHttpTransport {
    pub fn new(config: &ClusterConfig) -> PulsarctlResult<Self> {
        let base_url = Url::parse(&config.web_service_url)
            .map_err(|e| NetworkError::invalid_url(&config.web_service_url, e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(NetworkError::invalid_url(&config.web_service_url, "cannot be used as a base url").into());
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .danger_accept_invalid_certs(config.tls_allow_insecure)
            .build()
            .map_err(|e| NetworkError::connection_failed(base_url.as_str(), e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
            timeout_ms: config.request_timeout_ms,
        })
    }

    /// Appends the request's segments to the base URL, percent-encoding each one.
    pub fn url_for(&self, request: &AdminRequest) -> PulsarctlResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NetworkError::invalid_url(self.base_url.as_str(), "cannot be used as a base url"))?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl AdminTransport for BlockingHttpTransport {
    fn send(&self, request: AdminRequest) -> PulsarctlResult<HttpResult> {
        let url = self.url_for(&request)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.into(), url.clone());
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                NetworkError::request_timeout(url.as_str(), self.timeout_ms)
            } else {
                NetworkError::connection_failed(url.as_str(), e.to_string())
            }
        })?;

        let code = response.status().as_u16();
        let content = response
            .text()
            .map_err(|e| NetworkError::receive_failed(url.as_str(), e.to_string()))?;
        if !(200..300).contains(&code) {
            debug!("{} {} returned status {}", request.method, url, code);
        }
        Ok(HttpResult { code, content })
    }
}
