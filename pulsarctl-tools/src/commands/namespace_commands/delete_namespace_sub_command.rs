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

use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::NAME_NOT_SPECIFIED;
use crate::commands::namespace_commands::NAMESPACE_ERRORS;
use crate::commands::namespace_commands::TENANT_ADMIN_PERMISSION;
use crate::commands::registry::VerbCommand;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

#[derive(Debug, Clone, Args)]
pub struct DeleteNamespaceSubCommand {
    #[arg(value_name = "TENANT/NAMESPACE")]
    names: Vec<String>,
}

impl DeleteNamespaceSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Delete a namespace. The namespace needs to be empty")
            .permission(TENANT_ADMIN_PERMISSION)
            .example("deletes a namespace", "pulsarctl namespaces delete (tenant/namespace)")
            .output("normal output", "Deleted (tenant/namespace) successfully")
            .outputs(NAMESPACE_ERRORS)
            .output(
                "the namespace still has topics",
                "[✖]  code: 409 reason: Cannot delete non empty namespace",
            );
        VerbCommand::new::<Self>("delete", "Delete a namespace", descriptor)
    }
}

impl CommandExecute for DeleteNamespaceSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let namespace = NamespaceName::parse(name_arg::exactly_one(&self.names, NAME_NOT_SPECIFIED)?)?;
        delete_namespace(ctx, &namespace)
    }
}

pub fn delete_namespace(ctx: &mut CommandContext<'_>, namespace: &NamespaceName) -> PulsarctlResult<()> {
    ctx.admin()?.delete_namespace(namespace)?;
    ctx.println(format_args!("Deleted {namespace} successfully"))
}
