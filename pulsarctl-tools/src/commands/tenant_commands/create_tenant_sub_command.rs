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

use crate::cli::validators;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::NAME_NOT_SPECIFIED;
use crate::commands::registry::VerbCommand;
use crate::commands::tenant_commands::SUPER_USER_PERMISSION;
use crate::commands::tenant_commands::TENANT_NAME_INVALID;
use crate::commands::tenant_commands::TENANT_NAME_NOT_SPECIFIED;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

#[derive(Debug, Clone, Args)]
pub struct CreateTenantSubCommand {
    #[arg(value_name = "TENANT")]
    names: Vec<String>,

    #[arg(
        short = 'r',
        long = "admin-roles",
        value_delimiter = ',',
        help = "Allowed admins to access the tenant, comma separated"
    )]
    admin_roles: Vec<String>,

    #[arg(
        short = 'c',
        long = "allowed-clusters",
        value_delimiter = ',',
        required = true,
        help = "Clusters the tenant may use, comma separated"
    )]
    allowed_clusters: Vec<String>,
}

impl CreateTenantSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Create a tenant")
            .permission(SUPER_USER_PERMISSION)
            .example(
                "Create a tenant named (tenant-name)",
                "pulsarctl tenants create (tenant-name) --allowed-clusters standalone",
            )
            .example(
                "Create a tenant with admin roles",
                "pulsarctl tenants create (tenant-name) -r admin,ops -c standalone",
            )
            .output("normal output", "Create tenant (tenant-name) successfully")
            .outputs(&[TENANT_NAME_NOT_SPECIFIED, TENANT_NAME_INVALID])
            .output(
                "the tenant already exists",
                "[✖]  code: 409 reason: Tenant already exists",
            );
        VerbCommand::new::<Self>("create", "Create a tenant", descriptor)
    }
}

impl CommandExecute for CreateTenantSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let tenant = TenantName::parse(name_arg::exactly_one(&self.names, NAME_NOT_SPECIFIED)?)?;
        validators::validate_list_entries(&self.admin_roles, "admin-roles")?;
        validators::validate_non_empty_list(&self.allowed_clusters, "allowed-clusters")?;
        let info = TenantInfo {
            admin_roles: trimmed(&self.admin_roles),
            allowed_clusters: trimmed(&self.allowed_clusters),
        };
        create_tenant(ctx, &tenant, &info)
    }
}

fn trimmed(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_string()).collect()
}

pub fn create_tenant(ctx: &mut CommandContext<'_>, tenant: &TenantName, info: &TenantInfo) -> PulsarctlResult<()> {
    ctx.admin()?.create_tenant(tenant, info)?;
    ctx.println(format_args!("Create tenant {tenant} successfully"))
}
