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

//! Errors raised while binding and validating command-line input

use thiserror::Error;

/// Locally detected input errors; these never reach the network
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    /// Wrong number of positional name arguments
    #[error("{message}")]
    Arity { message: String },

    /// Malformed tenant, namespace or topic name
    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: String,
    },

    /// Flag value out of range or otherwise rejected
    #[error("Validation failed for '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },
}

impl ArgumentError {
    #[inline]
    pub fn arity(message: impl Into<String>) -> Self {
        Self::Arity {
            message: message.into(),
        }
    }

    #[inline]
    pub fn invalid_name(kind: &'static str, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            kind,
            name: name.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
