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

//! Long help text shared by every verb

use std::fmt::Write;

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub desc: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub desc: String,
    pub out: String,
}

/// Help metadata for one verb: purpose, permission, examples and sample
/// outputs. Built once at registration and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDescriptor {
    used_for: String,
    permission: String,
    examples: Vec<Example>,
    outputs: Vec<Output>,
}

impl CommandDescriptor {
    #[inline]
    pub fn new(used_for: impl Into<String>) -> Self {
        Self {
            used_for: used_for.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = permission.into();
        self
    }

    #[inline]
    pub fn example(mut self, desc: impl Into<String>, command: impl Into<String>) -> Self {
        self.examples.push(Example {
            desc: desc.into(),
            command: command.into(),
        });
        self
    }

    #[inline]
    pub fn output(mut self, desc: impl Into<String>, out: impl Into<String>) -> Self {
        self.outputs.push(Output {
            desc: desc.into(),
            out: out.into(),
        });
        self
    }

    /// Appends a shared list of `(description, output)` pairs.
    pub fn outputs(self, outputs: &[(&str, &str)]) -> Self {
        outputs
            .iter()
            .fold(self, |descriptor, (desc, out)| descriptor.output(*desc, *out))
    }

    /// Renders the `USED FOR` / `REQUIRED PERMISSION` / `EXAMPLES` / `OUTPUT`
    /// sections. Empty sections are left out.
    pub fn render(&self) -> String {
        let mut text = String::new();
        section(&mut text, "USED FOR", std::iter::once(self.used_for.as_str()));
        if !self.permission.is_empty() {
            section(&mut text, "REQUIRED PERMISSION", std::iter::once(self.permission.as_str()));
        }
        if !self.examples.is_empty() {
            let body = self
                .examples
                .iter()
                .map(|e| format!("#{}\n{}", e.desc, e.command))
                .collect::<Vec<_>>()
                .join("\n\n");
            section(&mut text, "EXAMPLES", body.lines());
        }
        if !self.outputs.is_empty() {
            let body = self
                .outputs
                .iter()
                .map(|o| format!("#{}\n{}", o.desc, o.out))
                .collect::<Vec<_>>()
                .join("\n\n");
            section(&mut text, "OUTPUT", body.lines());
        }
        text.trim_end().to_string()
    }
}

fn section<'a>(text: &mut String, title: &str, lines: impl Iterator<Item = &'a str>) {
    let _ = writeln!(text, "{title}:");
    for line in lines {
        if line.is_empty() {
            text.push('\n');
        } else {
            let _ = writeln!(text, "{INDENT}{line}");
        }
    }
    text.push('\n');
}
