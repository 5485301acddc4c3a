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
pub struct CreateNamespaceSubCommand {
    #[arg(value_name = "TENANT/NAMESPACE")]
    names: Vec<String>,

    #[arg(
        short = 'b',
        long = "bundles",
        default_value_t = 0,
        help = "Number of bundles to activate, 0 keeps the broker default"
    )]
    bundles: u32,
}

impl CreateNamespaceSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Create a new namespace")
            .permission(TENANT_ADMIN_PERMISSION)
            .example("creates a namespace named (namespace-name)", "pulsarctl namespaces create (tenant/namespace)")
            .example(
                "creates a namespace with 16 bundles",
                "pulsarctl namespaces create (tenant/namespace) --bundles 16",
            )
            .output("normal output", "Created (tenant/namespace) successfully")
            .outputs(NAMESPACE_ERRORS)
            .output(
                "the namespace already exists",
                "[✖]  code: 409 reason: Namespace already exists",
            );
        VerbCommand::new::<Self>("create", "Create a new namespace", descriptor)
    }
}

impl CommandExecute for CreateNamespaceSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let namespace = NamespaceName::parse(name_arg::exactly_one(&self.names, NAME_NOT_SPECIFIED)?)?;
        create_namespace(ctx, &namespace, (self.bundles > 0).then_some(self.bundles))
    }
}

pub fn create_namespace(
    ctx: &mut CommandContext<'_>,
    namespace: &NamespaceName,
    bundles: Option<u32>,
) -> PulsarctlResult<()> {
    ctx.admin()?.create_namespace(namespace, bundles)?;
    ctx.println(format_args!("Created {namespace} successfully"))
}
