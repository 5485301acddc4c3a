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

//! Explicit command tree
//!
//! Each resource module exposes a `group()` factory returning a
//! [`ResourceGroup`]; the program entry point registers them into a
//! [`CommandRegistry`], which both builds the clap tree and dispatches the
//! parsed matches.

use clap::ArgMatches;
use clap::Args;
use clap::Command;
use clap::FromArgMatches;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use tabled::Tabled;
use tracing::debug;

use crate::cli::formatters::TableFormatter;
use crate::commands::descriptor::CommandDescriptor;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;

/// Root verb printing every registered command
pub const SHOW_COMMANDS: &str = "commands";

type RunFn = fn(&ArgMatches, &mut CommandContext<'_>) -> PulsarctlResult<()>;

/// One `<resource> <verb>` command: help metadata, flag definitions and handler
pub struct VerbCommand {
    name: &'static str,
    about: &'static str,
    descriptor: CommandDescriptor,
    augment: fn(Command) -> Command,
    run: RunFn,
}

impl VerbCommand {
    /// Binds the verb to its argument struct `A`, whose
    /// [`CommandExecute`] impl is the handler.
    pub fn new<A>(name: &'static str, about: &'static str, descriptor: CommandDescriptor) -> Self
    where
        A: Args + FromArgMatches + CommandExecute,
    {
        Self {
            name,
            about,
            descriptor,
            augment: <A as Args>::augment_args,
            run: run_parsed::<A>,
        }
    }

    pub fn command(&self) -> Command {
        (self.augment)(
            Command::new(self.name)
                .about(self.about)
                .long_about(self.descriptor.render()),
        )
    }

    pub fn run(&self, matches: &ArgMatches, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        (self.run)(matches, ctx)
    }
}

fn run_parsed<A>(matches: &ArgMatches, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()>
where
    A: FromArgMatches + CommandExecute,
{
    let args = A::from_arg_matches(matches).map_err(|e| PulsarctlError::validation("arguments", e.to_string()))?;
    args.execute(ctx)
}

/// All verbs of one resource, e.g. `topics`
pub struct ResourceGroup {
    name: &'static str,
    about: &'static str,
    verbs: Vec<VerbCommand>,
}

impl ResourceGroup {
    pub fn new(name: &'static str, about: &'static str) -> Self {
        Self {
            name,
            about,
            verbs: Vec::new(),
        }
    }

    #[inline]
    pub fn verb(mut self, verb: VerbCommand) -> Self {
        self.verbs.push(verb);
        self
    }

    pub fn find(&self, verb: &str) -> Option<&VerbCommand> {
        self.verbs.iter().find(|v| v.name == verb)
    }

    pub fn command(&self) -> Command {
        self.verbs.iter().fold(
            Command::new(self.name)
                .about(self.about)
                .subcommand_required(true)
                .arg_required_else_help(true),
            |cmd, verb| cmd.subcommand(verb.command()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct CommandSummary {
    #[tabled(rename = "Category")]
    pub category: &'static str,

    #[tabled(rename = "Command")]
    pub command: &'static str,

    #[tabled(rename = "Remark")]
    pub remark: &'static str,
}

/// The full command tree, assembled explicitly by the caller
#[derive(Default)]
pub struct CommandRegistry {
    groups: Vec<ResourceGroup>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn register(mut self, group: ResourceGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn find(&self, group: &str, verb: &str) -> Option<&VerbCommand> {
        self.groups.iter().find(|g| g.name == group)?.find(verb)
    }

    /// Every verb in registration order
    pub fn summary(&self) -> Vec<CommandSummary> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.verbs.iter().map(move |verb| CommandSummary {
                    category: group.name,
                    command: verb.name,
                    remark: verb.about,
                })
            })
            .collect()
    }

    /// Adds the resource groups and the `commands` verb to `root`.
    pub fn augment(&self, root: Command) -> Command {
        self.groups
            .iter()
            .fold(root, |cmd, group| cmd.subcommand(group.command()))
            .subcommand(Command::new(SHOW_COMMANDS).about("List every available command"))
    }

    /// Runs the verb selected in `matches`.
    pub fn dispatch(&self, matches: &ArgMatches, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()> {
        let (group_name, group_matches) = matches.subcommand().ok_or_else(|| {
            PulsarctlError::validation("command", "no command specified, use --help for usage information")
        })?;
        if group_name == SHOW_COMMANDS {
            return ctx.println(TableFormatter::format_tabled(&self.summary()));
        }
        let (verb_name, verb_matches) = group_matches
            .subcommand()
            .ok_or_else(|| PulsarctlError::validation(group_name, "no verb specified"))?;
        let verb = self
            .find(group_name, verb_name)
            .ok_or_else(|| PulsarctlError::validation(group_name, format!("unknown verb '{verb_name}'")))?;
        debug!("running {} {}", group_name, verb_name);
        verb.run(verb_matches, ctx)
    }
}
