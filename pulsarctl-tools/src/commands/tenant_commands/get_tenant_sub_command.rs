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
use pulsarctl_admin::types::TenantInfo;
use pulsarctl_common::TenantName;
use pulsarctl_error::PulsarctlResult;
use tabled::Tabled;

use crate::cli::formatters::OutputFormat;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::ONLY_ONE_NAME;
use crate::commands::registry::VerbCommand;
use crate::commands::tenant_commands::SUPER_USER_PERMISSION;
use crate::commands::tenant_commands::TENANT_NAME_INVALID;
use crate::commands::tenant_commands::TENANT_NOT_EXIST;
use crate::commands::tenant_commands::TENANT_ONLY_ONE_NAME;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::OutputArgs;

#[derive(Debug, Clone, Args)]
pub struct GetTenantSubCommand {
    #[arg(value_name = "TENANT")]
    names: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Tabled)]
struct TenantInfoRow {
    #[tabled(rename = "Admin Roles")]
    admin_roles: String,
    #[tabled(rename = "Allowed Clusters")]
    allowed_clusters: String,
}

impl From<&TenantInfo> for TenantInfoRow {
    fn from(info: &TenantInfo) -> Self {
        Self {
            admin_roles: info.admin_roles.join(","),
            allowed_clusters: info.allowed_clusters.join(","),
        }
    }
}

impl GetTenantSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Get the configuration of a tenant")
            .permission(SUPER_USER_PERMISSION)
            .example("Get the configuration of tenant (tenant-name)", "pulsarctl tenants get (tenant-name)")
            .output(
                "normal output",
                "+-------------+------------------+\n\
                 | Admin Roles | Allowed Clusters |\n\
                 +-------------+------------------+\n\
                 | admin       | standalone       |\n\
                 +-------------+------------------+",
            )
            .outputs(&[TENANT_ONLY_ONE_NAME, TENANT_NAME_INVALID])
            .outputs(&[TENANT_NOT_EXIST]);
        VerbCommand::new::<Self>("get", "Get the configuration of a tenant", descriptor)
    }
}

impl CommandExecute for GetTenantSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let tenant = TenantName::parse(name_arg::exactly_one(&self.names, ONLY_ONE_NAME)?)?;
        get_tenant(ctx, &tenant, self.output.format)
    }
}

pub fn get_tenant(ctx: &mut CommandContext<'_>, tenant: &TenantName, format: OutputFormat) -> PulsarctlResult<()> {
    let info = ctx.admin()?.get_tenant(tenant)?;
    ctx.render(format, &info, || vec![TenantInfoRow::from(&info)])
}

