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
use pulsarctl_common::TenantName;
use pulsarctl_error::PulsarctlResult;
use tabled::Tabled;

use crate::cli::formatters::OutputFormat;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::ONLY_ONE_NAME;
use crate::commands::namespace_commands::TENANT_ADMIN_PERMISSION;
use crate::commands::registry::VerbCommand;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::OutputArgs;

#[derive(Debug, Clone, Args)]
pub struct ListNamespacesSubCommand {
    #[arg(value_name = "TENANT")]
    names: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Tabled)]
struct NamespaceRow<'a> {
    #[tabled(rename = "Namespace Name")]
    name: &'a str,
}

impl ListNamespacesSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Get the list of namespaces of a tenant")
            .permission(TENANT_ADMIN_PERMISSION)
            .example("Get the list of namespaces of a tenant", "pulsarctl namespaces list <tenant name>")
            .output(
                "normal output",
                "+------------------+\n\
                 | Namespace Name   |\n\
                 +------------------+\n\
                 | public/default   |\n\
                 +------------------+\n\
                 | public/functions |\n\
                 +------------------+",
            )
            .output(
                "you must specify a tenant name, please check if the tenant name is provided",
                "[✖]  only one argument is allowed to be used as a name",
            )
            .output(
                "the tenant name not exist, please check if tenant name exists",
                "[✖]  code: 404 reason: Tenant does not exist",
            );
        VerbCommand::new::<Self>("list", "Get the list of namespaces of a tenant", descriptor)
    }
}

impl CommandExecute for ListNamespacesSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let tenant = TenantName::parse(name_arg::exactly_one(&self.names, ONLY_ONE_NAME)?)?;
        list_namespaces(ctx, &tenant, self.output.format)
    }
}

pub fn list_namespaces(ctx: &mut CommandContext<'_>, tenant: &TenantName, format: OutputFormat) -> PulsarctlResult<()> {
    let namespaces = ctx.admin()?.get_namespaces(tenant)?;
    ctx.render(format, &namespaces, || {
        namespaces
            .iter()
            .map(|ns| NamespaceRow { name: ns.as_str() })
            .collect()
    })
}
