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

//! `pulsarctl topics ...`

mod create_topic_sub_command;
mod delete_topic_sub_command;
mod get_message_ttl_sub_command;
mod list_topics_sub_command;
mod remove_message_ttl_sub_command;
mod set_message_ttl_sub_command;

pub use create_topic_sub_command::create_topic;
pub use create_topic_sub_command::CreateTopicSubCommand;
pub use delete_topic_sub_command::delete_topic;
pub use delete_topic_sub_command::DeleteTopicSubCommand;
pub use get_message_ttl_sub_command::get_message_ttl;
pub use get_message_ttl_sub_command::GetMessageTtlSubCommand;
pub use list_topics_sub_command::list_topics;
pub use list_topics_sub_command::ListTopicsSubCommand;
pub use remove_message_ttl_sub_command::remove_message_ttl;
pub use remove_message_ttl_sub_command::RemoveMessageTtlSubCommand;
pub use set_message_ttl_sub_command::set_message_ttl;
pub use set_message_ttl_sub_command::SetMessageTtlSubCommand;

use crate::commands::registry::ResourceGroup;

pub(crate) const TOPIC_PERMISSION: &str = "This command requires tenant admin permissions.";

pub(crate) const ARG_ERROR: (&str, &str) = (
    "the topic name is not specified or the topic name is specified more than one",
    "[✖]  the topic name is not specified or the topic name is specified more than one",
);

pub(crate) const TOPIC_NAME_ERRORS: &[(&str, &str)] = &[
    (
        "the topic name is not in the format of <tenant>/<namespace>/<topic> or <topic>",
        "[✖]  Invalid topic name 'a/b': it should be in the format of <tenant>/<namespace>/<topic> or <topic>",
    ),
    (
        "the topic domain is neither persistent nor non-persistent",
        "[✖]  Invalid topic name 'http://public/default/a': the domain only can be specified as 'persistent' or 'non-persistent', got 'http'",
    ),
    (
        "the topic name is empty",
        "[✖]  Invalid topic name 'public/default/': topic name can not be empty",
    ),
];

pub(crate) const NAMESPACE_ERRORS: &[(&str, &str)] = &[
    (
        "the tenant does not exist",
        "[✖]  code: 404 reason: Tenant does not exist",
    ),
    (
        "the namespace does not exist",
        "[✖]  code: 404 reason: Namespace does not exist",
    ),
];

pub(crate) const TOPIC_NOT_FOUND: (&str, &str) = (
    "the topic does not exist",
    "[✖]  code: 404 reason: Topic not found",
);

pub fn group() -> ResourceGroup {
    ResourceGroup::new("topics", "Operations about topics")
        .verb(ListTopicsSubCommand::verb())
        .verb(CreateTopicSubCommand::verb())
        .verb(DeleteTopicSubCommand::verb())
        .verb(SetMessageTtlSubCommand::verb())
        .verb(GetMessageTtlSubCommand::verb())
        .verb(RemoveMessageTtlSubCommand::verb())
}
