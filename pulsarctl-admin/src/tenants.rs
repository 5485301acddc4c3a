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
use pulsarctl_common::TenantName;
use pulsarctl_error::PulsarctlResult;

use crate::client::PulsarAdminClient;
use crate::transport::AdminTransport;
use crate::transport::HttpMethod;
use crate::types::TenantInfo;

const TENANTS: &str = "tenants";

pub trait Tenants {
    /// `GET /admin/v2/tenants`
    fn list_tenants(&self) -> PulsarctlResult<Vec<String>>;

    /// `GET /admin/v2/tenants/{tenant}`
    fn get_tenant(&self, tenant: &TenantName) -> PulsarctlResult<TenantInfo>;

    /// `PUT /admin/v2/tenants/{tenant}`
    fn create_tenant(&self, tenant: &TenantName, info: &TenantInfo) -> PulsarctlResult<()>;

    /// `DELETE /admin/v2/tenants/{tenant}`
    fn delete_tenant(&self, tenant: &TenantName) -> PulsarctlResult<()>;
}

impl<T> Tenants for PulsarAdminClient<T>
where
    T: AdminTransport,
{
    fn list_tenants(&self) -> PulsarctlResult<Vec<String>> {
        self.execute_json(Self::v2_request(HttpMethod::Get, &[TENANTS]))
    }

    fn get_tenant(&self, tenant: &TenantName) -> PulsarctlResult<TenantInfo> {
        self.execute_json(Self::v2_request(HttpMethod::Get, &[TENANTS, tenant.as_str()]))
    }

    fn create_tenant(&self, tenant: &TenantName, info: &TenantInfo) -> PulsarctlResult<()> {
        let body = serde_json::to_string(info)?;
        self.execute_unit(Self::v2_request(HttpMethod::Put, &[TENANTS, tenant.as_str()]).json_body(body))
    }

    fn delete_tenant(&self, tenant: &TenantName) -> PulsarctlResult<()> {
        self.execute_unit(Self::v2_request(HttpMethod::Delete, &[TENANTS, tenant.as_str()]))
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::PulsarctlError;

    use super::*;
    use crate::transport::HttpResult;
    use crate::transport::MockAdminTransport;

    fn ok(content: &str) -> PulsarctlResult<HttpResult> {
        Ok(HttpResult {
            code: 200,
            content: content.to_string(),
        })
    }

    #[test]
    fn list_tenants_keeps_server_order() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == HttpMethod::Get && req.path() == "admin/v2/tenants")
            .times(1)
            .returning(|_| ok(r#"["sample","public"]"#));
        let client = PulsarAdminClient::new(transport);
        assert_eq!(client.list_tenants().unwrap(), vec!["sample", "public"]);
    }

    #[test]
    fn create_tenant_sends_json_body() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == HttpMethod::Put
                    && req.path() == "admin/v2/tenants/sample"
                    && req.body.as_deref() == Some(r#"{"adminRoles":[],"allowedClusters":["standalone"]}"#)
            })
            .times(1)
            .returning(|_| {
                Ok(HttpResult {
                    code: 204,
                    content: String::new(),
                })
            });
        let client = PulsarAdminClient::new(transport);
        let info = TenantInfo {
            admin_roles: vec![],
            allowed_clusters: vec!["standalone".to_string()],
        };
        client
            .create_tenant(&TenantName::parse("sample").unwrap(), &info)
            .unwrap();
    }

    #[test]
    fn get_tenant_surfaces_remote_error() {
        let mut transport = MockAdminTransport::new();
        transport.expect_send().returning(|_| {
            Ok(HttpResult {
                code: 404,
                content: r#"{"reason":"Tenant does not exist"}"#.to_string(),
            })
        });
        let client = PulsarAdminClient::new(transport);
        let err = client.get_tenant(&TenantName::parse("ghost").unwrap()).unwrap_err();
        assert!(matches!(err, PulsarctlError::Remote { code: 404, .. }));
    }
}
