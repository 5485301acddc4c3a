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

use crate::cli::validators;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::NAME_NOT_SPECIFIED;
use crate::commands::namespace_commands::NAMESPACE_ERRORS;
use crate::commands::namespace_commands::TENANT_ADMIN_PERMISSION;
use crate::commands::registry::VerbCommand;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

#[derive(Debug, Clone, Args)]
pub struct SetMessageTtlSubCommand {
    #[arg(value_name = "TENANT/NAMESPACE")]
    names: Vec<String>,

    #[arg(
        short = 't',
        long = "messageTTL",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Message TTL in seconds"
    )]
    message_ttl: i32,
}

impl SetMessageTtlSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Set the message TTL of a namespace")
            .permission(TENANT_ADMIN_PERMISSION)
            .example(
                "Set the message TTL of a namespace",
                "pulsarctl namespaces set-message-ttl (tenant/namespace) --messageTTL 10",
            )
            .output("normal output", "Set message TTL successfully for [(tenant/namespace)]")
            .outputs(NAMESPACE_ERRORS);
        VerbCommand::new::<Self>("set-message-ttl", "Set the message TTL of a namespace", descriptor)
    }
}

impl CommandExecute for SetMessageTtlSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let namespace = NamespaceName::parse(name_arg::exactly_one(&self.names, NAME_NOT_SPECIFIED)?)?;
        validators::validate_message_ttl(self.message_ttl, "messageTTL")?;
        set_message_ttl(ctx, &namespace, self.message_ttl)
    }
}

pub fn set_message_ttl(ctx: &mut CommandContext<'_>, namespace: &NamespaceName, ttl_seconds: i32) -> PulsarctlResult<()> {
    ctx.admin()?.set_namespace_message_ttl(namespace, ttl_seconds)?;
    ctx.println(format_args!("Set message TTL successfully for [{namespace}]"))
}
