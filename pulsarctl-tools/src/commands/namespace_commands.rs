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

//! `pulsarctl namespaces ...`

mod create_namespace_sub_command;
mod delete_namespace_sub_command;
mod get_message_ttl_sub_command;
mod list_namespaces_sub_command;
mod namespace_topics_sub_command;
mod set_message_ttl_sub_command;

pub use create_namespace_sub_command::create_namespace;
pub use create_namespace_sub_command::CreateNamespaceSubCommand;
pub use delete_namespace_sub_command::delete_namespace;
pub use delete_namespace_sub_command::DeleteNamespaceSubCommand;
pub use get_message_ttl_sub_command::get_message_ttl;
pub use get_message_ttl_sub_command::GetMessageTtlSubCommand;
pub use list_namespaces_sub_command::list_namespaces;
pub use list_namespaces_sub_command::ListNamespacesSubCommand;
pub use namespace_topics_sub_command::list_namespace_topics;
pub use namespace_topics_sub_command::NamespaceTopicsSubCommand;
pub use set_message_ttl_sub_command::set_message_ttl;
pub use set_message_ttl_sub_command::SetMessageTtlSubCommand;

use crate::commands::registry::ResourceGroup;

pub(crate) const TENANT_ADMIN_PERMISSION: &str = "This command requires tenant admin permissions.";

pub(crate) const NAMESPACE_ERRORS: &[(&str, &str)] = &[
    (
        "the namespace name is not specified or more than one name is given",
        "[✖]  the name is not specified or specified more than once",
    ),
    (
        "the namespace name is not in the form <tenant>/<namespace>",
        "[✖]  Invalid namespace name 'public': it should be in the format of <tenant>/<namespace>",
    ),
    (
        "the tenant does not exist",
        "[✖]  code: 404 reason: Tenant does not exist",
    ),
    (
        "the namespace does not exist",
        "[✖]  code: 404 reason: Namespace does not exist",
    ),
];

pub fn group() -> ResourceGroup {
    ResourceGroup::new("namespaces", "Operations about namespaces")
        .verb(ListNamespacesSubCommand::verb())
        .verb(CreateNamespaceSubCommand::verb())
        .verb(DeleteNamespaceSubCommand::verb())
        .verb(NamespaceTopicsSubCommand::verb())
        .verb(SetMessageTtlSubCommand::verb())
        .verb(GetMessageTtlSubCommand::verb())
}
