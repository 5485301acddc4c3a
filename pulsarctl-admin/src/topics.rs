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
use pulsarctl_common::TopicDomain;
use pulsarctl_common::TopicName;
use pulsarctl_error::PulsarctlResult;

use crate::client::PulsarAdminClient;
use crate::transport::AdminRequest;
use crate::transport::AdminTransport;
use crate::transport::HttpMethod;
use crate::types::TopicList;

const PARTITIONS: &str = "partitions";
const PARTITIONED: &str = "partitioned";
const MESSAGE_TTL: &str = "messageTTL";
const PARTITION_SUFFIX: &str = "-partition-";

pub trait Topics {
    /// Persistent topics of a namespace. Partition segments of partitioned
    /// topics are folded into their parent.
    fn list_topics(&self, namespace: &NamespaceName) -> PulsarctlResult<TopicList>;

    /// Non-partitioned when `partitions == 0`.
    fn create_topic(&self, topic: &TopicName, partitions: u32) -> PulsarctlResult<()>;

    fn delete_topic(&self, topic: &TopicName, force: bool, non_partitioned: bool) -> PulsarctlResult<()>;

    /// `POST .../{topic}/messageTTL?messageTTL={ttl}`
    fn set_message_ttl(&self, topic: &TopicName, ttl_seconds: i32) -> PulsarctlResult<()>;

    fn get_message_ttl(&self, topic: &TopicName) -> PulsarctlResult<Option<i32>>;

    fn remove_message_ttl(&self, topic: &TopicName) -> PulsarctlResult<()>;
}

impl<T> PulsarAdminClient<T>
where
    T: AdminTransport,
{
    fn topic_request(method: HttpMethod, topic: &TopicName, suffix: Option<&str>) -> AdminRequest {
        let mut segments = topic.path_segments().to_vec();
        segments.extend(suffix);
        Self::v2_request(method, &segments)
    }
}

impl<T> Topics for PulsarAdminClient<T>
where
    T: AdminTransport,
{
    fn list_topics(&self, namespace: &NamespaceName) -> PulsarctlResult<TopicList> {
        let domain = TopicDomain::Persistent.to_string();
        let base = [domain.as_str(), namespace.tenant().as_str(), namespace.local_name()];

        let partitioned: Vec<String> = self.execute_json(Self::v2_request(
            HttpMethod::Get,
            &[base[0], base[1], base[2], PARTITIONED],
        ))?;
        let mut non_partitioned: Vec<String> = self.execute_json(Self::v2_request(HttpMethod::Get, &base))?;
        non_partitioned.retain(|topic| {
            partition_parent(topic)
                .map(|parent| !partitioned.iter().any(|p| p == parent))
                .unwrap_or(true)
        });

        Ok(TopicList {
            partitioned,
            non_partitioned,
        })
    }

    fn create_topic(&self, topic: &TopicName, partitions: u32) -> PulsarctlResult<()> {
        let request = if partitions == 0 {
            Self::topic_request(HttpMethod::Put, topic, None)
        } else {
            Self::topic_request(HttpMethod::Put, topic, Some(PARTITIONS)).json_body(partitions.to_string())
        };
        self.execute_unit(request)
    }

    fn delete_topic(&self, topic: &TopicName, force: bool, non_partitioned: bool) -> PulsarctlResult<()> {
        let suffix = (!non_partitioned).then_some(PARTITIONS);
        let request = Self::topic_request(HttpMethod::Delete, topic, suffix).query("force", force);
        self.execute_unit(request)
    }

    fn set_message_ttl(&self, topic: &TopicName, ttl_seconds: i32) -> PulsarctlResult<()> {
        let request = Self::topic_request(HttpMethod::Post, topic, Some(MESSAGE_TTL)).query(MESSAGE_TTL, ttl_seconds);
        self.execute_unit(request)
    }

    fn get_message_ttl(&self, topic: &TopicName) -> PulsarctlResult<Option<i32>> {
        self.execute_optional_i32(Self::topic_request(HttpMethod::Get, topic, Some(MESSAGE_TTL)))
    }

    fn remove_message_ttl(&self, topic: &TopicName) -> PulsarctlResult<()> {
        self.execute_unit(Self::topic_request(HttpMethod::Delete, topic, Some(MESSAGE_TTL)))
    }
}

/// `persistent://t/ns/a-partition-3` -> `persistent://t/ns/a`
fn partition_parent(topic: &str) -> Option<&str> {
    let (parent, index) = topic.rsplit_once(PARTITION_SUFFIX)?;
    index.parse::<u32>().ok().map(|_| parent)
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::PulsarctlError;

    use super::*;
    use crate::transport::HttpResult;
    use crate::transport::MockAdminTransport;

    fn topic() -> TopicName {
        TopicName::parse("persistent://public/default/orders").unwrap()
    }

    fn no_content(_: AdminRequest) -> PulsarctlResult<HttpResult> {
        Ok(HttpResult {
            code: 204,
            content: String::new(),
        })
    }

    #[test]
    fn partition_parent_strips_numeric_suffix() {
        assert_eq!(partition_parent("persistent://t/ns/a-partition-0"), Some("persistent://t/ns/a"));
        assert_eq!(partition_parent("persistent://t/ns/a-partition-x"), None);
        assert_eq!(partition_parent("persistent://t/ns/a"), None);
    }

    #[test]
    fn set_message_ttl_uses_query_param() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == HttpMethod::Post
                    && req.path() == "admin/v2/persistent/public/default/orders/messageTTL"
                    && req.query == vec![("messageTTL".to_string(), "10".to_string())]
                    && req.body.is_none()
            })
            .times(1)
            .returning(no_content);
        PulsarAdminClient::new(transport).set_message_ttl(&topic(), 10).unwrap();
    }

    #[test]
    fn set_message_ttl_returns_remote_error_verbatim() {
        let mut transport = MockAdminTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(HttpResult {
                code: 404,
                content: r#"{"reason":"Tenant does not exist"}"#.to_string(),
            })
        });
        let err = PulsarAdminClient::new(transport)
            .set_message_ttl(&topic(), 10)
            .unwrap_err();
        assert!(matches!(&err, PulsarctlError::Remote { code: 404, reason } if reason == "Tenant does not exist"));
    }

    #[test]
    fn create_partitioned_topic_sends_partition_count() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == HttpMethod::Put
                    && req.path() == "admin/v2/persistent/public/default/orders/partitions"
                    && req.body.as_deref() == Some("4")
            })
            .times(1)
            .returning(no_content);
        PulsarAdminClient::new(transport).create_topic(&topic(), 4).unwrap();
    }

    #[test]
    fn create_non_partitioned_topic_has_no_suffix() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path() == "admin/v2/persistent/public/default/orders" && req.body.is_none())
            .times(1)
            .returning(no_content);
        PulsarAdminClient::new(transport).create_topic(&topic(), 0).unwrap();
    }

    #[test]
    fn delete_topic_selects_path_and_force() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == HttpMethod::Delete
                    && req.path() == "admin/v2/persistent/public/default/orders"
                    && req.query == vec![("force".to_string(), "true".to_string())]
            })
            .times(1)
            .returning(no_content);
        PulsarAdminClient::new(transport)
            .delete_topic(&topic(), true, true)
            .unwrap();
    }

    #[test]
    fn list_topics_folds_partitions_and_keeps_order() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path() == "admin/v2/persistent/public/default/partitioned")
            .times(1)
            .returning(|_| {
                Ok(HttpResult {
                    code: 200,
                    content: r#"["persistent://public/default/p"]"#.to_string(),
                })
            });
        transport
            .expect_send()
            .withf(|req| req.path() == "admin/v2/persistent/public/default")
            .times(1)
            .returning(|_| {
                Ok(HttpResult {
                    code: 200,
                    content: r#"["persistent://public/default/z","persistent://public/default/p-partition-0","persistent://public/default/a"]"#
                        .to_string(),
                })
            });
        let list = PulsarAdminClient::new(transport)
            .list_topics(&NamespaceName::public_default())
            .unwrap();
        assert_eq!(list.partitioned, vec!["persistent://public/default/p"]);
        assert_eq!(
            list.non_partitioned,
            vec!["persistent://public/default/z", "persistent://public/default/a"]
        );
    }

    #[test]
    fn remove_message_ttl_deletes_policy() {
        let mut transport = MockAdminTransport::new();
        transport
            .expect_send()
            .withf(|req| req.method == HttpMethod::Delete && req.path().ends_with("orders/messageTTL"))
            .times(1)
            .returning(no_content);
        PulsarAdminClient::new(transport).remove_message_ttl(&topic()).unwrap();
    }
}
