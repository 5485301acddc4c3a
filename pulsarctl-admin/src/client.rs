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
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::http::BlockingHttpTransport;
use crate::transport::AdminRequest;
use crate::transport::AdminTransport;
use crate::transport::HttpMethod;
use crate::transport::HttpResult;
use crate::types::ErrorBody;

const ADMIN_V2: [&str; 2] = ["admin", "v2"];

/// Admin client for the `/admin/v2` REST API
///
/// Resource operations live in the [`Tenants`](crate::Tenants),
/// [`Namespaces`](crate::Namespaces) and [`Topics`](crate::Topics) impls.
pub struct PulsarAdminClient<T = BlockingHttpTransport> {
    transport: T,
}

impl<T> PulsarAdminClient<T>
where
    T: AdminTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub(crate) fn v2_request(method: HttpMethod, segments: &[&str]) -> AdminRequest {
        AdminRequest::new(method, ADMIN_V2.iter().chain(segments.iter()).copied())
    }

    /// Sends the request; any non-2xx status becomes [`PulsarctlError::Remote`].
    pub(crate) fn execute(&self, request: AdminRequest) -> PulsarctlResult<String> {
        let result = self.transport.send(request)?;
        if result.is_success() {
            Ok(result.content)
        } else {
            Err(remote_error(result))
        }
    }

    pub(crate) fn execute_json<R>(&self, request: AdminRequest) -> PulsarctlResult<R>
    where
        R: DeserializeOwned,
    {
        let content = self.execute(request)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub(crate) fn execute_unit(&self, request: AdminRequest) -> PulsarctlResult<()> {
        self.execute(request).map(|_| ())
    }

    /// For policy getters that answer `null` or an empty body when unset.
    pub(crate) fn execute_optional_i32(&self, request: AdminRequest) -> PulsarctlResult<Option<i32>> {
        let content = self.execute(request)?;
        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<i32>>(content)?)
    }
}

/// Reason precedence: JSON `reason` field, raw body, canonical status text.
pub(crate) fn remote_error(result: HttpResult) -> PulsarctlError {
    let reason = serde_json::from_str::<ErrorBody>(&result.content)
        .map(|body| body.reason)
        .ok()
        .or_else(|| {
            let body = result.content.trim();
            (!body.is_empty()).then(|| body.to_string())
        })
        .or_else(|| {
            StatusCode::from_u16(result.code)
                .ok()
                .and_then(|status| status.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "unknown error".to_string());
    PulsarctlError::remote(result.code, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockAdminTransport;

    fn result(code: u16, content: &str) -> HttpResult {
        HttpResult {
            code,
            content: content.to_string(),
        }
    }

    #[test]
    fn remote_error_prefers_json_reason() {
        let err = remote_error(result(404, r#"{"reason":"Tenant does not exist"}"#));
        assert_eq!(err.to_string(), "code: 404 reason: Tenant does not exist");
    }

    #[test]
    fn remote_error_falls_back_to_body() {
        let err = remote_error(result(500, "  internal failure \n"));
        assert_eq!(err.to_string(), "code: 500 reason: internal failure");
    }

    #[test]
    fn remote_error_falls_back_to_status_text() {
        let err = remote_error(result(409, ""));
        assert_eq!(err.to_string(), "code: 409 reason: Conflict");
    }

    #[test]
    fn v2_request_prefixes_admin_path() {
        let request = PulsarAdminClient::<MockAdminTransport>::v2_request(HttpMethod::Get, &["tenants"]);
        assert_eq!(request.path(), "admin/v2/tenants");
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[test]
    fn execute_passes_success_body_through() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(result(200, r#"["public"]"#)));
        let client = PulsarAdminClient::new(transport);
        let tenants: Vec<String> = client
            .execute_json(PulsarAdminClient::<MockAdminTransport>::v2_request(HttpMethod::Get, &["tenants"]))
            .unwrap();
        assert_eq!(tenants, vec!["public"]);
    }

    #[test]
    fn execute_optional_handles_null_and_empty() {
        let mut transport = MockAdminTransport::new();
        let mut bodies = vec!["", "null", "3600"].into_iter();
        transport
            .expect_send()
            .times(3)
            .returning(move |_| Ok(result(200, bodies.next().unwrap_or_default())));
        let client = PulsarAdminClient::new(transport);
        let request = || PulsarAdminClient::<MockAdminTransport>::v2_request(HttpMethod::Get, &["x"]);
        assert_eq!(client.execute_optional_i32(request()).unwrap(), None);
        assert_eq!(client.execute_optional_i32(request()).unwrap(), None);
        assert_eq!(client.execute_optional_i32(request()).unwrap(), Some(3600));
    }

    #[test]
    fn execute_json_reports_bad_payload() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(result(200, "not json")));
        let client = PulsarAdminClient::new(transport);
        let outcome: PulsarctlResult<Vec<String>> =
            client.execute_json(PulsarAdminClient::<MockAdminTransport>::v2_request(HttpMethod::Get, &["tenants"]));
        assert!(matches!(outcome, Err(PulsarctlError::Serialization(_))));
    }
}
