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

/// A validated tenant name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantName(CheetahString);

impl TenantName {
    pub fn parse(name: &str) -> PulsarctlResult<Self> {
        if let Some(reason) = check_named_entity(name) {
            return Err(PulsarctlError::invalid_name("tenant", name, reason));
        }
        Ok(Self(CheetahString::from(name)))
    }

    /// Wraps a compile-time constant known to be valid.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(CheetahString::from_static_str(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for TenantName {
    type Err = PulsarctlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TenantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_tenant() {
        let tenant = TenantName::parse("public").unwrap();
        assert_eq!(tenant.as_str(), "public");
        assert_eq!(tenant.to_string(), "public");
    }

    #[test]
    fn parse_rejects_slash() {
        let err = TenantName::parse("public/default").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid tenant name 'public/default': contains invalid character '/'"
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert!("".parse::<TenantName>().is_err());
    }
}
