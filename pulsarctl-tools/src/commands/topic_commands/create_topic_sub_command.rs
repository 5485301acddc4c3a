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
pub struct CreateTopicSubCommand {
    #[arg(value_name = "TOPIC")]
    names: Vec<String>,

    #[arg(
        short = 'p',
        long = "partitions",
        default_value_t = 0,
        help = "Number of partitions, 0 creates a non-partitioned topic"
    )]
    partitions: u32,
}

impl CreateTopicSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Create a non-partitioned or partitioned topic")
            .permission(TOPIC_PERMISSION)
            .example("Create a non-partitioned topic (topic-name)", "pulsarctl topics create (topic-name)")
            .example(
                "Create a partitioned topic (topic-name) with (partitions-num) partitions",
                "pulsarctl topics create (topic-name) --partitions (partitions-num)",
            )
            .output("normal output", "Create topic (topic-name) with (partitions-num) partitions successfully")
            .outputs(&[ARG_ERROR])
            .outputs(TOPIC_NAME_ERRORS)
            .outputs(NAMESPACE_ERRORS)
            .output(
                "the topic already exists",
                "[✖]  code: 409 reason: This topic already exists",
            );
        VerbCommand::new::<Self>("create", "Create a topic with n partitions", descriptor)
    }
}

impl CommandExecute for CreateTopicSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let topic = TopicName::parse(name_arg::exactly_one(&self.names, TOPIC_NAME_NOT_SPECIFIED)?)?;
        create_topic(ctx, &topic, self.partitions)
    }
}

pub fn create_topic(ctx: &mut CommandContext<'_>, topic: &TopicName, partitions: u32) -> PulsarctlResult<()> {
    ctx.admin()?.create_topic(topic, partitions)?;
    ctx.println(format_args!(
        "Create topic {topic} with {partitions} partitions successfully"
    ))
}
