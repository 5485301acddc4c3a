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
use pulsarctl_error::PulsarctlResult;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

/// One request against the admin service, relative to its base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRequest {
    pub method: HttpMethod,
    /// Unencoded path segments, e.g. `["admin", "v2", "tenants"]`
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<String>,
}

impl AdminRequest {
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResult {
    pub code: u16,
    pub content: String,
}

impl HttpResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations only fail for transport problems; non-2xx statuses are
/// returned as a normal [`HttpResult`].
#[cfg_attr(test, mockall::automock)]
pub trait AdminTransport {
    fn send(&self, request: AdminRequest) -> PulsarctlResult<HttpResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_collects_parts() {
        let request = AdminRequest::new(HttpMethod::Post, ["admin", "v2", "persistent", "t", "ns", "topic", "messageTTL"])
            .query("messageTTL", 10)
            .json_body("10");
        assert_eq!(request.path(), "admin/v2/persistent/t/ns/topic/messageTTL");
        assert_eq!(request.query, vec![("messageTTL".to_string(), "10".to_string())]);
        assert_eq!(request.body.as_deref(), Some("10"));
    }

    #[test]
    fn method_display_is_uppercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Get.to_string(), "GET");
    }

    #[test]
    fn success_range() {
        assert!(HttpResult { code: 204, content: String::new() }.is_success());
        assert!(!HttpResult { code: 404, content: String::new() }.is_success());
        assert!(!HttpResult { code: 307, content: String::new() }.is_success());
    }
}
