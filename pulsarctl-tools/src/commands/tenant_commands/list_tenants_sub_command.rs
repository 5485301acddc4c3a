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
use pulsarctl_error::PulsarctlResult;
use tabled::Tabled;

use crate::cli::formatters::OutputFormat;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::registry::VerbCommand;
use crate::commands::tenant_commands::SUPER_USER_PERMISSION;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::OutputArgs;

#[derive(Debug, Clone, Args)]
pub struct ListTenantsSubCommand {
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Tabled)]
struct TenantRow<'a> {
    #[tabled(rename = "Tenant Name")]
    name: &'a str,
}

impl ListTenantsSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("List all existing tenants")
            .permission(SUPER_USER_PERMISSION)
            .example("List all existing tenants", "pulsarctl tenants list")
            .output(
                "normal output",
                "+-------------+\n| Tenant Name |\n+-------------+\n| public      |\n+-------------+\n| sample      |\n+-------------+",
            );
        VerbCommand::new::<Self>("list", "List all existing tenants", descriptor)
    }
}

impl CommandExecute for ListTenantsSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        list_tenants(ctx, self.output.format)
    }
}

pub fn list_tenants(ctx: &mut CommandContext<'_>, format: OutputFormat) -> PulsarctlResult<()> {
    let tenants = ctx.admin()?.list_tenants()?;
    ctx.render(format, &tenants, || {
        tenants.iter().map(|name| TenantRow { name: name.as_str() }).collect()
    })
}
