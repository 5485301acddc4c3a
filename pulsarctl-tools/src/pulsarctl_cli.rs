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
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::ArgMatches;
use clap::Args;
use clap::Command;
use clap::FromArgMatches;
use clap_complete::generate;
use clap_complete::Shell;
use pulsarctl_admin::AdminFactory;
use pulsarctl_admin::PulsarAdmin;
use pulsarctl_common::config::ClusterConfig;
use pulsarctl_common::config::ConfigOverrides;
use pulsarctl_common::log;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use tracing::debug;
use tracing::Level;

use crate::commands::registry::CommandRegistry;
use crate::commands::CommandContext;
use crate::ui::output;

pub const BIN_NAME: &str = "pulsarctl";

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

/// Flags accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path of the TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "admin-service-url",
        value_name = "URL",
        global = true,
        help = "URL of the Pulsar admin service, eg: 'http://localhost:8080'"
    )]
    pub admin_service_url: Option<String>,

    #[arg(long = "token", value_name = "TOKEN", global = true, help = "Authentication token")]
    pub token: Option<String>,

    #[arg(
        long = "request-timeout-ms",
        value_name = "MILLIS",
        global = true,
        help = "Timeout of each admin request in milliseconds"
    )]
    pub request_timeout_ms: Option<u64>,

    #[arg(short = 'v', long = "verbose", global = true, help = "Log debug output to stderr")]
    pub verbose: bool,

    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        value_enum,
        help = "Generate shell completion script"
    )]
    pub completion: Option<Shell>,
}

impl GlobalArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            web_service_url: self.admin_service_url.clone(),
            auth_token: self.token.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Loads [`ClusterConfig`] when a handler first asks for a client, so a
/// rejected invocation never reads configuration or opens a connection.
pub struct ConfiguredAdminFactory {
    config_file: Option<PathBuf>,
    overrides: ConfigOverrides,
}

impl ConfiguredAdminFactory {
    pub fn new(config_file: Option<PathBuf>, overrides: ConfigOverrides) -> Self {
        Self { config_file, overrides }
    }
}

impl AdminFactory for ConfiguredAdminFactory {
    fn create(&self) -> PulsarctlResult<Box<dyn PulsarAdmin>> {
        ClusterConfig::load(self.config_file.as_deref(), &self.overrides)?.create()
    }
}

/// The `pulsarctl` shell: parses argv, runs one verb, prints the failure
/// line and picks the exit code.
pub struct PulsarctlCli {
    registry: CommandRegistry,
}

impl PulsarctlCli {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn command(&self) -> Command {
        let root = Command::new(BIN_NAME)
            .about("CLI for administering Apache Pulsar clusters")
            .version(env!("CARGO_PKG_VERSION"));
        self.registry.augment(GlobalArgs::augment_args(root))
    }

    /// Runs one invocation against the configured cluster and returns the exit code.
    pub fn run<I, T>(&self, argv: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.run_with(argv, None, out, err)
    }

    /// Like [`run`](Self::run) but with a caller supplied client factory.
    pub fn run_with_factory<I, T>(
        &self,
        argv: I,
        factory: &dyn AdminFactory,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.run_with(argv, Some(factory), out, err)
    }

    fn run_with<I, T>(
        &self,
        argv: I,
        factory: Option<&dyn AdminFactory>,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command().try_get_matches_from(argv) {
            Ok(matches) => matches,
            Err(e) => return report_usage(e, out, err),
        };
        match self.execute_matches(&matches, factory, out) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                let _ = output::write_failure(err, &e);
                EXIT_FAILURE
            }
        }
    }

    /// Runs the verb selected in `matches`. Without a `factory`, the client is
    /// built from the layered configuration.
    pub fn execute_matches(
        &self,
        matches: &ArgMatches,
        factory: Option<&dyn AdminFactory>,
        out: &mut dyn Write,
    ) -> PulsarctlResult<()> {
        let globals =
            GlobalArgs::from_arg_matches(matches).map_err(|e| PulsarctlError::validation("arguments", e.to_string()))?;
        if globals.verbose {
            log::init_logger_with_level(Level::DEBUG);
        } else {
            log::init_logger();
        }

        if let Some(shell) = globals.completion {
            debug!("generating {} completion", shell);
            generate(shell, &mut self.command(), BIN_NAME, out);
            return Ok(());
        }

        let configured = ConfiguredAdminFactory::new(globals.config.clone(), globals.overrides());
        let factory = factory.unwrap_or(&configured);
        self.registry.dispatch(matches, &mut CommandContext::new(factory, out))
    }
}

/// Help and version go to `out` with success; usage errors go to `err`.
fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", e.render());
            EXIT_SUCCESS
        }
        _ => {
            let _ = write!(err, "{}", e.render());
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> PulsarctlCli {
        PulsarctlCli::new(CommandRegistry::new())
    }

    #[test]
    fn command_tree_is_consistent() {
        cli().command().debug_assert();
    }

    #[test]
    fn global_flags_map_to_overrides() {
        let matches = cli()
            .command()
            .try_get_matches_from(["pulsarctl", "-s", "https://pulsar:8443", "--token", "t0k", "--request-timeout-ms", "500"])
            .unwrap();
        let globals = GlobalArgs::from_arg_matches(&matches).unwrap();
        let overrides = globals.overrides();
        assert_eq!(overrides.web_service_url.as_deref(), Some("https://pulsar:8443"));
        assert_eq!(overrides.auth_token.as_deref(), Some("t0k"));
        assert_eq!(overrides.request_timeout_ms, Some(500));
    }

    #[test]
    fn completion_is_written_to_out() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = cli().run(["pulsarctl", "--generate-completion", "bash"], &mut out, &mut err);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains(BIN_NAME));
    }

    #[test]
    fn help_exits_successfully() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(cli().run(["pulsarctl", "--help"], &mut out, &mut err), EXIT_SUCCESS);
        assert!(err.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("--admin-service-url"));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(cli().run(["pulsarctl", "--bogus"], &mut out, &mut err), EXIT_FAILURE);
        assert!(!err.is_empty());
    }
}
