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

//! CLI input validators
//!
//! Flag checks that run before any admin client is built

use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;

/// Validate a message TTL in seconds
pub fn validate_message_ttl(ttl: i32, field: &str) -> PulsarctlResult<()> {
    if ttl < 0 {
        return Err(PulsarctlError::validation(
            field,
            format!("must be a non-negative number of seconds, got {ttl}"),
        ));
    }
    Ok(())
}

/// Validate a comma separated list flag: no blank entries
pub fn validate_list_entries(values: &[String], field: &str) -> PulsarctlResult<()> {
    match values.iter().position(|v| v.trim().is_empty()) {
        Some(index) => Err(PulsarctlError::validation(
            field,
            format!("entry {} is empty", index + 1),
        )),
        None => Ok(()),
    }
}

/// Validate a list flag that must carry at least one entry
pub fn validate_non_empty_list(values: &[String], field: &str) -> PulsarctlResult<()> {
    if values.is_empty() {
        return Err(PulsarctlError::validation(field, "at least one value is required"));
    }
    validate_list_entries(values, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message_ttl() {
        assert!(validate_message_ttl(0, "ttl").is_ok());
        assert!(validate_message_ttl(3600, "ttl").is_ok());

        let err = validate_message_ttl(-1, "ttl").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed for 'ttl': must be a non-negative number of seconds, got -1"
        );
        assert!(err.is_local());
    }

    #[test]
    fn test_validate_list_entries() {
        let roles = vec!["admin".to_string(), "ops".to_string()];
        assert!(validate_list_entries(&roles, "admin-roles").is_ok());
        assert!(validate_list_entries(&[], "admin-roles").is_ok());

        let blank = vec!["admin".to_string(), " ".to_string()];
        let err = validate_list_entries(&blank, "admin-roles").unwrap_err();
        assert!(err.to_string().contains("entry 2 is empty"));
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list(&[], "allowed-clusters").is_err());
        assert!(validate_non_empty_list(&["standalone".to_string()], "allowed-clusters").is_ok());
    }
}
