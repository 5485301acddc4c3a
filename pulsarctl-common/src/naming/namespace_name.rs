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
use std::fmt;
use std::str::FromStr;

use cheetah_string::CheetahString;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;

use crate::naming::check_named_entity;
use crate::naming::tenant_name::TenantName;
use crate::naming::DEFAULT_NAMESPACE;
use crate::naming::PUBLIC_TENANT;

/// A validated `<tenant>/<namespace>` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceName {
    tenant: TenantName,
    local_name: CheetahString,
}

impl NamespaceName {
    /// Parses `<tenant>/<namespace>`.
    pub fn parse(name: &str) -> PulsarctlResult<Self> {
        let Some((tenant, local_name)) = name.split_once('/') else {
            return Err(PulsarctlError::invalid_name(
                "namespace",
                name,
                "it should be in the format of <tenant>/<namespace>",
            ));
        };
        let tenant = TenantName::parse(tenant)
            .map_err(|_| PulsarctlError::invalid_name("namespace", name, "the tenant part is not valid"))?;
        Self::new(tenant, local_name)
    }

    pub fn new(tenant: TenantName, local_name: &str) -> PulsarctlResult<Self> {
        if let Some(reason) = check_named_entity(local_name) {
            return Err(PulsarctlError::invalid_name(
                "namespace",
                format!("{tenant}/{local_name}"),
                reason,
            ));
        }
        Ok(Self {
            tenant,
            local_name: CheetahString::from(local_name),
        })
    }

    /// `public/default`
    pub fn public_default() -> Self {
        Self {
            tenant: TenantName::from_static(PUBLIC_TENANT),
            local_name: CheetahString::from_static_str(DEFAULT_NAMESPACE),
        }
    }

    #[inline]
    pub fn tenant(&self) -> &TenantName {
        &self.tenant
    }

    #[inline]
    pub fn local_name(&self) -> &str {
        self.local_name.as_str()
    }
}

impl FromStr for NamespaceName {
    type Err = PulsarctlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tenant, self.local_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tenant_and_namespace() {
        let ns = NamespaceName::parse("public/default").unwrap();
        assert_eq!(ns.tenant().as_str(), "public");
        assert_eq!(ns.local_name(), "default");
        assert_eq!(ns.to_string(), "public/default");
        assert_eq!(ns, NamespaceName::public_default());
    }

    #[test]
    fn parse_requires_separator() {
        let err = NamespaceName::parse("public").unwrap_err();
        assert!(err.to_string().contains("<tenant>/<namespace>"));
    }

    #[test]
    fn parse_rejects_extra_segments() {
        assert!(NamespaceName::parse("public/default/extra").is_err());
    }

    #[test]
    fn parse_rejects_bad_tenant() {
        let err = NamespaceName::parse(" /default").unwrap_err();
        assert!(err.to_string().contains("tenant part"));
    }

    #[test]
    fn parse_rejects_empty_namespace() {
        assert!(NamespaceName::parse("public/").is_err());
    }
}
