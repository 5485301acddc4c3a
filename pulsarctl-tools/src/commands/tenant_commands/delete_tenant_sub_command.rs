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

use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::NAME_NOT_SPECIFIED;
use crate::commands::registry::VerbCommand;
use crate::commands::tenant_commands::SUPER_USER_PERMISSION;
use crate::commands::tenant_commands::TENANT_NAME_INVALID;
use crate::commands::tenant_commands::TENANT_NAME_NOT_SPECIFIED;
use crate::commands::tenant_commands::TENANT_NOT_EXIST;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

#[derive(Debug, Clone, Args)]
pub struct DeleteTenantSubCommand {
    #[arg(value_name = "TENANT")]
    names: Vec<String>,
}

impl DeleteTenantSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Delete a tenant")
            .permission(SUPER_USER_PERMISSION)
            .example("Delete a tenant named (tenant-name)", "pulsarctl tenants delete (tenant-name)")
            .output("normal output", "Delete tenant (tenant-name) successfully")
            .outputs(&[TENANT_NAME_NOT_SPECIFIED, TENANT_NAME_INVALID])
            .outputs(&[TENANT_NOT_EXIST])
            .output(
                "the tenant still has namespaces",
                "[✖]  code: 409 reason: The tenant still has active namespaces",
            );
        VerbCommand::new::<Self>("delete", "Delete a tenant", descriptor)
    }
}

impl CommandExecute for DeleteTenantSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let tenant = TenantName::parse(name_arg::exactly_one(&self.names, NAME_NOT_SPECIFIED)?)?;
        delete_tenant(ctx, &tenant)
    }
}

pub fn delete_tenant(ctx: &mut CommandContext<'_>, tenant: &TenantName) -> PulsarctlResult<()> {
    ctx.admin()?.delete_tenant(tenant)?;
    ctx.println(format_args!("Delete tenant {tenant} successfully"))
}
