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

//! Pulsar admin client
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Resource traits (tenants/namespaces/  │
//! │   topics) + PulsarAdmin umbrella        │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │   PulsarAdminClient                     │
//! │  - REST paths, bodies, error mapping    │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │   AdminTransport                        │
//! │  - BlockingHttpTransport (reqwest)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every operation is a single blocking request/response. There are no retries.

pub mod client;
pub mod factory;
pub mod http;
pub mod namespaces;
pub mod tenants;
pub mod topics;
pub mod transport;
pub mod types;

pub use client::PulsarAdminClient;
pub use factory::AdminFactory;
pub use http::BlockingHttpTransport;
pub use namespaces::Namespaces;
pub use tenants::Tenants;
pub use topics::Topics;

/// Everything a command handler may call on the remote admin service
pub trait PulsarAdmin: Tenants + Namespaces + Topics {}

impl<T> PulsarAdmin for T where T: Tenants + Namespaces + Topics {}
