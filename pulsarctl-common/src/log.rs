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
use std::str::FromStr;

use tracing::Level;

/// Level used when `RUST_LOG` is unset or unparsable. Command output goes to
/// stdout, so the CLI stays quiet unless asked.
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// Initializes the logger from the `RUST_LOG` environment variable.
///
/// Log lines are written to stderr with level and line numbers so they never
/// interleave with tables printed on stdout.
pub fn init_logger() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    init_logger_with_level(level);
}

pub fn init_logger_with_level(level: Level) {
    // A subscriber may already be installed when the shell is driven from tests.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_line_number(true)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}

/// Parses a level name case-insensitively, `None` for anything unknown.
pub fn parse_level(level: &str) -> Option<Level> {
    Level::from_str(level.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_known_levels() {
        assert_eq!(parse_level("ERROR"), Some(Level::ERROR));
        assert_eq!(parse_level("warn"), Some(Level::WARN));
        assert_eq!(parse_level(" info "), Some(Level::INFO));
        assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
    }

    #[test]
    fn parse_level_rejects_unknown() {
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn init_logger_twice_does_not_panic() {
        init_logger_with_level(Level::DEBUG);
        init_logger();
    }
}
