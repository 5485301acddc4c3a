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
use crate::commands::name_arg::NAME_NOT_SPECIFIED;
use crate::commands::namespace_commands::NAMESPACE_ERRORS;
use crate::commands::namespace_commands::TENANT_ADMIN_PERMISSION;
use crate::commands::registry::VerbCommand;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::OutputArgs;

#[derive(Debug, Clone, Args)]
pub struct NamespaceTopicsSubCommand {
    #[arg(value_name = "TENANT/NAMESPACE")]
    names: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Tabled)]
struct TopicRow<'a> {
    #[tabled(rename = "Topic Name")]
    name: &'a str,
}

impl NamespaceTopicsSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Get the list of topics of a namespace")
            .permission(TENANT_ADMIN_PERMISSION)
            .example("Get the list of topics of a namespace", "pulsarctl namespaces topics (tenant/namespace)")
            .output(
                "normal output",
                "+--------------------------------+\n\
                 | Topic Name                     |\n\
                 +--------------------------------+\n\
                 | persistent://public/default/a  |\n\
                 +--------------------------------+",
            )
            .outputs(NAMESPACE_ERRORS);
        VerbCommand::new::<Self>("topics", "Get the list of topics of a namespace", descriptor)
    }
}

impl CommandExecute for NamespaceTopicsSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let namespace = NamespaceName::parse(name_arg::exactly_one(&self.names, NAME_NOT_SPECIFIED)?)?;
        list_namespace_topics(ctx, &namespace, self.output.format)
    }
}

pub fn list_namespace_topics(
    ctx: &mut CommandContext<'_>,
    namespace: &NamespaceName,
    format: OutputFormat,
) -> PulsarctlResult<()> {
    let topics = ctx.admin()?.get_namespace_topics(namespace)?;
    ctx.render(format, &topics, || {
        topics.iter().map(|t| TopicRow { name: t.as_str() }).collect()
    })
}
