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

//! CLI output formatters
//!
//! Provides multiple output formats: Table, JSON, YAML

mod json_formatter;
mod table_formatter;
mod yaml_formatter;

use clap::ValueEnum;
pub use json_formatter::JsonFormatter;
use pulsarctl_error::PulsarctlResult;
use serde::Serialize;
pub use table_formatter::TableFormatter;
pub use yaml_formatter::YamlFormatter;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

/// Formatter for serializable values
pub trait Formatter {
    /// Format data to string
    fn format<T: Serialize>(&self, data: &T) -> PulsarctlResult<String>;
}
