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
use crate::commands::topic_commands::TOPIC_NAME_ERRORS;
use crate::commands::topic_commands::TOPIC_NOT_FOUND;
use crate::commands::topic_commands::TOPIC_PERMISSION;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

#[derive(Debug, Clone, Args)]
pub struct DeleteTopicSubCommand {
    #[arg(value_name = "TOPIC")]
    names: Vec<String>,

    #[arg(short = 'f', long = "force", help = "Close all producers, consumers and replicators before deleting")]
    force: bool,

    #[arg(short = 'n', long = "non-partitioned", help = "Delete a non-partitioned topic")]
    non_partitioned: bool,
}

impl DeleteTopicSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Delete a topic. The topic cannot be deleted if there are any active subscriptions or producers connected to it")
            .permission(TOPIC_PERMISSION)
            .example("Delete a partitioned topic (topic-name)", "pulsarctl topics delete (topic-name)")
            .example(
                "Delete a non-partitioned topic (topic-name)",
                "pulsarctl topics delete (topic-name) --non-partitioned",
            )
            .example(
                "Delete a topic (topic-name) forcefully",
                "pulsarctl topics delete --force (topic-name)",
            )
            .output("normal output", "Delete topic (topic-name) successfully")
            .outputs(&[ARG_ERROR])
            .outputs(TOPIC_NAME_ERRORS)
            .outputs(&[TOPIC_NOT_FOUND]);
        VerbCommand::new::<Self>("delete", "Delete a topic", descriptor)
    }
}

impl CommandExecute for DeleteTopicSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let topic = TopicName::parse(name_arg::exactly_one(&self.names, TOPIC_NAME_NOT_SPECIFIED)?)?;
        delete_topic(ctx, &topic, self.force, self.non_partitioned)
    }
}

pub fn delete_topic(
    ctx: &mut CommandContext<'_>,
    topic: &TopicName,
    force: bool,
    non_partitioned: bool,
) -> PulsarctlResult<()> {
    ctx.admin()?.delete_topic(topic, force, non_partitioned)?;
    ctx.println(format_args!("Delete topic {topic} successfully"))
}
