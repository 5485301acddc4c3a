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
use pulsarctl_common::NamespaceName;
use pulsarctl_common::TenantName;
use pulsarctl_error::PulsarctlResult;
use serde_json::json;

use crate::client::PulsarAdminClient;
use crate::transport::AdminRequest;
use crate::transport::AdminTransport;
use crate::transport::HttpMethod;

const NAMESPACES: &str = "namespaces";
const MESSAGE_TTL: &str = "messageTTL";

pub trait Namespaces {
    /// `GET /admin/v2/namespaces/{tenant}`
    fn get_namespaces(&self, tenant: &TenantName) -> PulsarctlResult<Vec<String>>;

    /// `PUT /admin/v2/namespaces/{tenant}/{namespace}`; `None` keeps the server's bundle count
    fn create_namespace(&self, namespace: &NamespaceName, bundles: Option<u32>) -> PulsarctlResult<()>;

    /// `DELETE /admin/v2/namespaces/{tenant}/{namespace}`
    fn delete_namespace(&self, namespace: &NamespaceName) -> PulsarctlResult<()>;

    /// `GET /admin/v2/namespaces/{tenant}/{namespace}/topics`
    fn get_namespace_topics(&self, namespace: &NamespaceName) -> PulsarctlResult<Vec<String>>;

    /// `POST /admin/v2/namespaces/{tenant}/{namespace}/messageTTL`
    fn set_namespace_message_ttl(&self, namespace: &NamespaceName, ttl_seconds: i32) -> PulsarctlResult<()>;

    /// `GET /admin/v2/namespaces/{tenant}/{namespace}/messageTTL`
    fn get_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>>;
}

impl<T> PulsarAdminClient<T>
where
    T: AdminTransport,
{
    fn namespace_request(method: HttpMethod, namespace: &NamespaceName, suffix: Option<&str>) -> AdminRequest {
        let mut segments = vec![NAMESPACES, namespace.tenant().as_str(), namespace.local_name()];
        segments.extend(suffix);
        Self::v2_request(method, &segments)
    }
}

impl<T> Namespaces for PulsarAdminClient<T>
where
    T: AdminTransport,
{
    fn get_namespaces(&self, tenant: &TenantName) -> PulsarctlResult<Vec<String>> {
        self.execute_json(Self::v2_request(HttpMethod::Get, &[NAMESPACES, tenant.as_str()]))
    }

    fn create_namespace(&self, namespace: &NamespaceName, bundles: Option<u32>) -> PulsarctlResult<()> {
        let mut request = Self::namespace_request(HttpMethod::Put, namespace, None);
        if let Some(num_bundles) = bundles {
            request = request.json_body(json!({ "bundles": { "numBundles": num_bundles } }).to_string());
        }
        self.execute_unit(request)
    }

    fn delete_namespace(&self, namespace: &NamespaceName) -> PulsarctlResult<()> {
        self.execute_unit(Self::namespace_request(HttpMethod::Delete, namespace, None))
    }

    fn get_namespace_topics(&self, namespace: &NamespaceName) -> PulsarctlResult<Vec<String>> {
        self.execute_json(Self::namespace_request(HttpMethod::Get, namespace, Some("topics")))
    }

    fn set_namespace_message_ttl(&self, namespace: &NamespaceName, ttl_seconds: i32) -> PulsarctlResult<()> {
        let request =
            Self::namespace_request(HttpMethod::Post, namespace, Some(MESSAGE_TTL)).json_body(ttl_seconds.to_string());
        self.execute_unit(request)
    }

    fn get_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>> {
        self.execute_optional_i32(Self::namespace_request(HttpMethod::Get, namespace, Some(MESSAGE_TTL)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResult;
    use crate::transport::MockAdminTransport;

    fn respond(code: u16, content: &'static str) -> impl FnMut(AdminRequest) -> PulsarctlResult<HttpResult> {
        move |_| {
            Ok(HttpResult {
                code,
                content: content.to_string(),
            })
        }
    }

    fn public_default() -> NamespaceName {
        NamespaceName::public_default()
    }

    #[test]
    fn get_namespaces_hits_tenant_path() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == HttpMethod::Get && req.path() == "admin/v2/namespaces/public")
            .times(1)
            .returning(respond(200, r#"["public/default","public/functions"]"#));
        let client = PulsarAdminClient::new(transport);
        let namespaces = client.get_namespaces(&TenantName::parse("public").unwrap()).unwrap();
        assert_eq!(namespaces, vec!["public/default", "public/functions"]);
    }

    #[test]
    fn create_namespace_without_bundles_sends_no_body() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == HttpMethod::Put && req.path() == "admin/v2/namespaces/public/default" && req.body.is_none())
            .times(1)
            .returning(respond(204, ""));
        PulsarAdminClient::new(transport)
            .create_namespace(&public_default(), None)
            .unwrap();
    }

    #[test]
    fn create_namespace_with_bundles_sends_policies() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.body.as_deref() == Some(r#"{"bundles":{"numBundles":16}}"#))
            .times(1)
            .returning(respond(204, ""));
        PulsarAdminClient::new(transport)
            .create_namespace(&public_default(), Some(16))
            .unwrap();
    }

    #[test]
    fn set_namespace_message_ttl_posts_value() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == HttpMethod::Post
                    && req.path() == "admin/v2/namespaces/public/default/messageTTL"
                    && req.body.as_deref() == Some("60")
            })
            .times(1)
            .returning(respond(204, ""));
        PulsarAdminClient::new(transport)
            .set_namespace_message_ttl(&public_default(), 60)
            .unwrap();
    }

    #[test]
    fn get_namespace_message_ttl_reads_value() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == HttpMethod::Get && req.path() == "admin/v2/namespaces/public/default/messageTTL")
            .returning(respond(200, "120"));
        let ttl = PulsarAdminClient::new(transport)
            .get_namespace_message_ttl(&public_default())
            .unwrap();
        assert_eq!(ttl, Some(120));
    }

    #[test]
    fn get_namespace_topics_hits_topics_path() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path() == "admin/v2/namespaces/public/default/topics")
            .returning(respond(200, r#"["persistent://public/default/a"]"#));
        let topics = PulsarAdminClient::new(transport)
            .get_namespace_topics(&public_default())
            .unwrap();
        assert_eq!(topics, vec!["persistent://public/default/a"]);
    }
}
