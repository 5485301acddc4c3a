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
use clap::Args;
use pulsarctl_common::TopicName;
use pulsarctl_error::PulsarctlResult;

use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::TOPIC_NAME_NOT_SPECIFIED;
use crate::commands::registry::VerbCommand;
use crate::commands::topic_commands::ARG_ERROR;
use crate::commands::topic_commands::NAMESPACE_ERRORS;
use crate::commands::topic_commands::TOPIC_NAME_ERRORS;
use crate::commands::topic_commands::TOPIC_PERMISSION;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

#[derive(Debug, Clone, Args)]
pub struct RemoveMessageTtlSubCommand {
    #[arg(value_name = "TOPIC")]
    names: Vec<String>,
}

impl RemoveMessageTtlSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Remove Message TTL for a topic")
            .permission(TOPIC_PERMISSION)
            .example("Remove Message TTL for a topic", "pulsarctl topics remove-message-ttl topic")
            .output("normal output", "Remove message TTL successfully for [topic]")
            .outputs(&[ARG_ERROR])
            .outputs(TOPIC_NAME_ERRORS)
            .outputs(NAMESPACE_ERRORS);
        VerbCommand::new::<Self>("remove-message-ttl", "Remove Message TTL for a topic", descriptor)
    }
}

impl CommandExecute for RemoveMessageTtlSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let topic = TopicName::parse(name_arg::exactly_one(&self.names, TOPIC_NAME_NOT_SPECIFIED)?)?;
        remove_message_ttl(ctx, &topic)
    }
}

pub fn remove_message_ttl(ctx: &mut CommandContext<'_>, topic: &TopicName) -> PulsarctlResult<()> {
    ctx.admin()?.remove_message_ttl(topic)?;
    ctx.println(format_args!("Remove message TTL successfully for [{topic}]"))
}
