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

//! pulsarctl - command-line administration for Apache Pulsar
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      CLI shell (pulsarctl_cli)          │
//! │  - global flags, logging, completion    │
//! │  - failure line + exit code             │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │      CommandRegistry (commands/)        │
//! │  - resource groups -> verb commands     │
//! │  - descriptor, name binding, handler    │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │      AdminFactory -> PulsarAdmin        │
//! │  - built only after arguments validate  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```bash
//! pulsarctl namespaces list public
//! pulsarctl topics set-message-ttl persistent://public/default/orders -t 10
//! ```

// CLI presentation layer
pub mod cli {
    //! CLI presentation helpers
    //!
    //! - [`formatters`] - Output formatters (JSON, YAML, Table)
    //! - [`validators`] - Flag validators

    pub mod formatters;
    pub mod validators;
}

// UI utilities for terminal output
pub mod ui;

// Resource commands and the registry they are assembled into
pub mod commands;

// CLI entry point
pub mod pulsarctl_cli;
