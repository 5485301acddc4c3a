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
use pulsarctl_common::NamespaceName;
use pulsarctl_error::PulsarctlResult;
use tabled::Tabled;

use crate::cli::formatters::OutputFormat;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::Arity;
use crate::commands::registry::VerbCommand;
use crate::commands::topic_commands::NAMESPACE_ERRORS;
use crate::commands::topic_commands::TOPIC_PERMISSION;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::OutputArgs;

#[derive(Debug, Clone, Args)]
pub struct ListTopicsSubCommand {
    /// Defaults to `public/default`
    #[arg(value_name = "TENANT/NAMESPACE")]
    names: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Tabled)]
struct TopicRow<'a> {
    #[tabled(rename = "Topic Name")]
    name: &'a str,
    #[tabled(rename = "Partitioned")]
    partitioned: &'static str,
}

impl ListTopicsSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("List all exist topics under the specified namespace")
            .permission(TOPIC_PERMISSION)
            .example("List all exist topics under the namespace public/default", "pulsarctl topics list")
            .example(
                "List all exist topics under the namespace (tenant/namespace)",
                "pulsarctl topics list (tenant/namespace)",
            )
            .output(
                "normal output",
                "+----------------------------------+-------------+\n\
                 | Topic Name                       | Partitioned |\n\
                 +----------------------------------+-------------+\n\
                 | persistent://public/default/p    | Y           |\n\
                 +----------------------------------+-------------+\n\
                 | persistent://public/default/np   | N           |\n\
                 +----------------------------------+-------------+",
            )
            .output(
                "more than one namespace is given",
                "[✖]  only one argument is allowed to be used as a name",
            )
            .outputs(NAMESPACE_ERRORS);
        VerbCommand::new::<Self>("list", "List all exist topics under the specified namespace", descriptor)
    }
}

impl CommandExecute for ListTopicsSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let namespace = match name_arg::bind(&self.names, Arity::ZeroOrOne)? {
            Some(name) => NamespaceName::parse(name)?,
            None => NamespaceName::public_default(),
        };
        list_topics(ctx, &namespace, self.output.format)
    }
}

/// Partitioned topics first, then non-partitioned ones, each in server order.
pub fn list_topics(ctx: &mut CommandContext<'_>, namespace: &NamespaceName, format: OutputFormat) -> PulsarctlResult<()> {
    let topics = ctx.admin()?.list_topics(namespace)?;
    ctx.render(format, &topics, || {
        let partitioned = topics.partitioned.iter().map(|name| TopicRow {
            name: name.as_str(),
            partitioned: "Y",
        });
        let non_partitioned = topics.non_partitioned.iter().map(|name| TopicRow {
            name: name.as_str(),
            partitioned: "N",
        });
        partitioned.chain(non_partitioned).collect()
    })
}
