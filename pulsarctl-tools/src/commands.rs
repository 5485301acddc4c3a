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

pub mod descriptor;
pub mod name_arg;
pub mod namespace_commands;
pub mod registry;
pub mod tenant_commands;
pub mod topic_commands;

use std::fmt::Display;
use std::io::Write;

use clap::Args;
use pulsarctl_admin::AdminFactory;
use pulsarctl_admin::PulsarAdmin;
use pulsarctl_error::PulsarctlResult;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::formatters::Formatter;
use crate::cli::formatters::JsonFormatter;
use crate::cli::formatters::OutputFormat;
use crate::cli::formatters::TableFormatter;
use crate::cli::formatters::YamlFormatter;

/// Execution behavior shared by every verb.
///
/// `execute` receives the raw, unvalidated arguments: it binds the name
/// argument, validates flags and only then asks the context for a client.
pub trait CommandExecute {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> PulsarctlResult<()>;
}

/// What a handler may touch: a lazy admin client and the output sink.
pub struct CommandContext<'a> {
    factory: &'a dyn AdminFactory,
    out: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    pub fn new(factory: &'a dyn AdminFactory, out: &'a mut dyn Write) -> Self {
        Self { factory, out }
    }

    /// Builds the admin client. Call only after all local validation passed.
    pub fn admin(&self) -> PulsarctlResult<Box<dyn PulsarAdmin>> {
        self.factory.create()
    }

    /// Writes one success line.
    pub fn println(&mut self, line: impl Display) -> PulsarctlResult<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Renders `value` in the requested format. Tables are built from
    /// `rows`, in the order given.
    pub fn render<T, R, F>(&mut self, format: OutputFormat, value: &T, rows: F) -> PulsarctlResult<()>
    where
        T: Serialize + ?Sized,
        R: Tabled,
        F: FnOnce() -> Vec<R>,
    {
        let text = match format {
            OutputFormat::Table => TableFormatter::format_tabled(&rows()),
            OutputFormat::Json => JsonFormatter.format(&value)?,
            OutputFormat::Yaml => YamlFormatter.format(&value)?,
        };
        writeln!(self.out, "{}", text.trim_end())?;
        Ok(())
    }
}

/// `--output/-o` for verbs that print a value
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    pub format: OutputFormat,
}

