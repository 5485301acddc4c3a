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
use pulsarctl_common::TopicName;
use pulsarctl_error::PulsarctlResult;

use crate::cli::validators;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::name_arg;
use crate::commands::name_arg::TOPIC_NAME_NOT_SPECIFIED;
use crate::commands::registry::VerbCommand;
use crate::commands::topic_commands::ARG_ERROR;
use crate::commands::topic_commands::NAMESPACE_ERRORS;
use crate::commands::topic_commands::TOPIC_NAME_ERRORS;
use crate::commands::topic_commands::TOPIC_PERMISSION;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

#[derive(Debug, Clone, Args)]
pub struct SetMessageTtlSubCommand {
    #[arg(value_name = "TOPIC")]
    names: Vec<String>,

    #[arg(
        short = 't',
        long = "ttl",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Message TTL in seconds"
    )]
    ttl: i32,
}

impl SetMessageTtlSubCommand {
    pub fn verb() -> VerbCommand {
        let descriptor = CommandDescriptor::new("Set Message TTL for a topic")
            .permission(TOPIC_PERMISSION)
            .example("Set Message TTL for a topic", "pulsarctl topics set-message-ttl topic -t 10")
            .output("normal output", "Set message TTL successfully for [topic]")
            .outputs(&[ARG_ERROR])
            .outputs(TOPIC_NAME_ERRORS)
            .outputs(NAMESPACE_ERRORS);
        VerbCommand::new::<Self>("set-message-ttl", "Set Message TTL for a topic", descriptor)
    }
}

impl CommandExecute for SetMessageTtlSubCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let topic = TopicName::parse(name_arg::exactly_one(&self.names, TOPIC_NAME_NOT_SPECIFIED)?)?;
        validators::validate_message_ttl(self.ttl, "ttl")?;
        set_message_ttl(ctx, &topic, self.ttl)
    }
}

pub fn set_message_ttl(ctx: &mut CommandContext<'_>, topic: &TopicName, ttl_seconds: i32) -> PulsarctlResult<()> {
    ctx.admin()?.set_message_ttl(topic, ttl_seconds)?;
    ctx.println(format_args!("Set message TTL successfully for [{topic}]"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        args: SetMessageTtlSubCommand,
    }

    #[test]
    fn parses_short_ttl_flag() {
        let cli = Cli::parse_from(["set-message-ttl", "persistent://public/default/a", "-t", "10"]);
        assert_eq!(cli.args.names, vec!["persistent://public/default/a"]);
        assert_eq!(cli.args.ttl, 10);
    }

    #[test]
    fn ttl_defaults_to_zero_and_accepts_negative_input() {
        let cli = Cli::parse_from(["set-message-ttl", "a"]);
        assert_eq!(cli.args.ttl, 0);

        let cli = Cli::parse_from(["set-message-ttl", "a", "--ttl", "-5"]);
        assert_eq!(cli.args.ttl, -5);
    }
}
