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
use pulsarctl_common::config::ClusterConfig;
use pulsarctl_error::PulsarctlResult;
use tracing::debug;

use crate::client::PulsarAdminClient;
use crate::http::BlockingHttpTransport;
use crate::PulsarAdmin;

/// Builds the admin client on demand.
///
/// Command handlers call [`AdminFactory::create`] only once their arguments
/// have validated, so a bad invocation never opens a connection.
pub trait AdminFactory {
    fn create(&self) -> PulsarctlResult<Box<dyn PulsarAdmin>>;
}

impl AdminFactory for ClusterConfig {
    fn create(&self) -> PulsarctlResult<Box<dyn PulsarAdmin>> {
        debug!("creating admin client for {}", self.web_service_url);
        let transport = BlockingHttpTransport::new(self)?;
        Ok(Box::new(PulsarAdminClient::new(transport)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_config_builds_client() {
        let config = ClusterConfig::default();
        assert!(config.create().is_ok());
    }

    #[test]
    fn invalid_url_is_reported_on_create() {
        let config = ClusterConfig {
            web_service_url: "mailto:admin@example.com".to_string(),
            ..ClusterConfig::default()
        };
        assert!(config.create().is_err());
    }
}
