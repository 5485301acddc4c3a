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

//! Topic names
//!
//! Accepted input forms:
//!
//! | Input                                 | Resolved                                 |
//! |---------------------------------------|------------------------------------------|
//! | `my-topic`                            | `persistent://public/default/my-topic`   |
//! | `tenant/ns/my-topic`                  | `persistent://tenant/ns/my-topic`        |
//! | `non-persistent://tenant/ns/my-topic` | unchanged                                |

use std::fmt;
use std::str::FromStr;

use cheetah_string::CheetahString;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use strum::Display;
use strum::EnumString;

use crate::naming::namespace_name::NamespaceName;
use crate::naming::tenant_name::TenantName;

const DOMAIN_SEPARATOR: &str = "://";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum TopicDomain {
    #[default]
    #[strum(serialize = "persistent")]
    Persistent,
    #[strum(serialize = "non-persistent")]
    NonPersistent,
}

/// A fully resolved `<domain>://<tenant>/<namespace>/<topic>` name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicName {
    domain: TopicDomain,
    namespace: NamespaceName,
    local_name: CheetahString,
}

impl TopicName {
    pub fn parse(name: &str) -> PulsarctlResult<Self> {
        let complete_name = if name.contains(DOMAIN_SEPARATOR) {
            name.to_string()
        } else {
            let segments = name.split('/').count();
            match segments {
                1 => format!(
                    "{}{DOMAIN_SEPARATOR}{}/{name}",
                    TopicDomain::Persistent,
                    NamespaceName::public_default()
                ),
                3 => format!("{}{DOMAIN_SEPARATOR}{name}", TopicDomain::Persistent),
                _ => {
                    return Err(PulsarctlError::invalid_name(
                        "topic",
                        name,
                        "it should be in the format of <tenant>/<namespace>/<topic> or <topic>",
                    ))
                }
            }
        };

        let (domain, rest) = complete_name
            .split_once(DOMAIN_SEPARATOR)
            .unwrap_or(("", complete_name.as_str()));
        let domain = TopicDomain::from_str(domain).map_err(|_| {
            PulsarctlError::invalid_name(
                "topic",
                name,
                format!("the domain only can be specified as 'persistent' or 'non-persistent', got '{domain}'"),
            )
        })?;

        let parts: Vec<&str> = rest.splitn(3, '/').collect();
        let [tenant, namespace, local_name] = parts[..] else {
            return Err(PulsarctlError::invalid_name(
                "topic",
                name,
                "it should be in the format of <tenant>/<namespace>/<topic>",
            ));
        };
        if local_name.is_empty() {
            return Err(PulsarctlError::invalid_name("topic", name, "topic name can not be empty"));
        }
        if local_name.contains('/') {
            return Err(PulsarctlError::invalid_name(
                "topic",
                name,
                "the topic part can not contain '/'",
            ));
        }

        let tenant = TenantName::parse(tenant)
            .map_err(|_| PulsarctlError::invalid_name("topic", name, "the tenant part is not valid"))?;
        let namespace = NamespaceName::new(tenant, namespace)
            .map_err(|_| PulsarctlError::invalid_name("topic", name, "the namespace part is not valid"))?;

        Ok(Self {
            domain,
            namespace,
            local_name: CheetahString::from(local_name),
        })
    }

    #[inline]
    pub fn domain(&self) -> TopicDomain {
        self.domain
    }

    #[inline]
    pub fn namespace(&self) -> &NamespaceName {
        &self.namespace
    }

    #[inline]
    pub fn local_name(&self) -> &str {
        self.local_name.as_str()
    }

    /// Unencoded REST path segments: `[domain, tenant, namespace, topic]`
    pub fn path_segments(&self) -> [&str; 4] {
        [
            match self.domain {
                TopicDomain::Persistent => "persistent",
                TopicDomain::NonPersistent => "non-persistent",
            },
            self.namespace.tenant().as_str(),
            self.namespace.local_name(),
            self.local_name.as_str(),
        ]
    }
}

impl FromStr for TopicName {
    type Err = PulsarctlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DOMAIN_SEPARATOR}{}/{}",
            self.domain, self.namespace, self.local_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_resolves_to_public_default() {
        let topic = TopicName::parse("my-topic").unwrap();
        assert_eq!(topic.to_string(), "persistent://public/default/my-topic");
        assert_eq!(topic.domain(), TopicDomain::Persistent);
        assert_eq!(topic.namespace(), &NamespaceName::public_default());
        assert_eq!(topic.local_name(), "my-topic");
    }

    #[test]
    fn three_part_name_gets_persistent_domain() {
        let topic = TopicName::parse("tenant/ns/my-topic").unwrap();
        assert_eq!(topic.to_string(), "persistent://tenant/ns/my-topic");
    }

    #[test]
    fn complete_name_is_kept() {
        let topic = TopicName::parse("non-persistent://tenant/ns/my-topic").unwrap();
        assert_eq!(topic.domain(), TopicDomain::NonPersistent);
        assert_eq!(topic.to_string(), "non-persistent://tenant/ns/my-topic");
        assert_eq!(
            topic.path_segments(),
            ["non-persistent", "tenant", "ns", "my-topic"]
        );
    }

    #[test]
    fn two_part_short_name_is_rejected() {
        let err = TopicName::parse("tenant/my-topic").unwrap_err();
        assert!(err
            .to_string()
            .contains("<tenant>/<namespace>/<topic> or <topic>"));
    }

    #[test]
    fn unknown_domain_is_rejected() {
        let err = TopicName::parse("http://tenant/ns/my-topic").unwrap_err();
        assert!(err.to_string().contains("got 'http'"));
    }

    #[test]
    fn missing_local_name_is_rejected() {
        assert!(TopicName::parse("persistent://tenant/ns/").is_err());
        assert!(TopicName::parse("persistent://tenant/ns").is_err());
    }

    #[test]
    fn legacy_cluster_names_are_rejected() {
        assert!(TopicName::parse("persistent://tenant/cluster/ns/my-topic").is_err());
    }

    #[test]
    fn domain_display_round_trips() {
        assert_eq!(TopicDomain::Persistent.to_string(), "persistent");
        assert_eq!(
            "non-persistent".parse::<TopicDomain>().unwrap(),
            TopicDomain::NonPersistent
        );
    }
}
