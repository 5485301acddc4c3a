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
use std::io;

use pulsarctl_tools::commands::namespace_commands;
use pulsarctl_tools::commands::registry::CommandRegistry;
use pulsarctl_tools::commands::tenant_commands;
use pulsarctl_tools::commands::topic_commands;
use pulsarctl_tools::pulsarctl_cli::PulsarctlCli;

fn main() {
    let registry = CommandRegistry::new()
        .register(tenant_commands::group())
        .register(namespace_commands::group())
        .register(topic_commands::group());
    let cli = PulsarctlCli::new(registry);
    let code = cli.run(std::env::args_os(), &mut io::stdout().lock(), &mut io::stderr().lock());
    std::process::exit(code);
}
