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

//! Failure and status lines

use std::fmt::Display;
use std::io;
use std::io::Write;

use colored::Colorize;

/// Prefix of every failure line
pub const FAILURE_GLYPH: &str = "[✖]";

/// `[✖]  <error>`, with the glyph in red when the terminal supports it
pub fn format_failure(err: &dyn Display) -> String {
    format!("{}  {}", FAILURE_GLYPH.red().bold(), err)
}

/// Write the failure line for `err` to `out`
pub fn write_failure(out: &mut dyn Write, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "{}", format_failure(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_failure_keeps_message_verbatim() {
        let line = format_failure(&"code: 404 reason: Tenant does not exist");
        assert!(line.contains(FAILURE_GLYPH));
        assert!(line.ends_with("  code: 404 reason: Tenant does not exist"));
    }

    #[test]
    fn test_write_failure_is_single_line() {
        let mut buf = Vec::new();
        write_failure(&mut buf, &"only one argument is allowed to be used as a name").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with("only one argument is allowed to be used as a name\n"));
    }
}
