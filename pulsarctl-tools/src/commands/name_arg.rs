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

//! Positional name binding
//!
//! Every verb takes its target resource as positional arguments collected
//! into a `Vec<String>`. Binding checks the count before anything else runs,
//! so an arity error never reaches the network.

use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;

/// Default arity error, also used when more than one name is given to a
/// verb that accepts zero or one.
pub const ONLY_ONE_NAME: &str = "only one argument is allowed to be used as a name";

pub const NAME_NOT_SPECIFIED: &str = "the name is not specified or specified more than once";

pub const TOPIC_NAME_NOT_SPECIFIED: &str =
    "the topic name is not specified or the topic name is specified more than one";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one name, otherwise fail with the given message
    ExactlyOne(&'static str),
    ZeroOrOne,
}

/// Binds the positional names under `arity`.
///
/// Returns `None` only for [`Arity::ZeroOrOne`] with no names given.
pub fn bind(names: &[String], arity: Arity) -> PulsarctlResult<Option<&str>> {
    match (arity, names) {
        (_, [name]) => Ok(Some(name.as_str())),
        (Arity::ZeroOrOne, []) => Ok(None),
        (Arity::ZeroOrOne, _) => Err(PulsarctlError::arity(ONLY_ONE_NAME)),
        (Arity::ExactlyOne(message), _) => Err(PulsarctlError::arity(message)),
    }
}

/// Binds exactly one name.
pub fn exactly_one<'a>(names: &'a [String], message: &'static str) -> PulsarctlResult<&'a str> {
    bind(names, Arity::ExactlyOne(message))?.ok_or_else(|| PulsarctlError::arity(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn exactly_one_accepts_single_name() {
        let args = names(&["public"]);
        assert_eq!(exactly_one(&args, ONLY_ONE_NAME).unwrap(), "public");
    }

    #[test]
    fn exactly_one_rejects_zero_and_many() {
        let err = exactly_one(&[], TOPIC_NAME_NOT_SPECIFIED).unwrap_err();
        assert_eq!(err.to_string(), TOPIC_NAME_NOT_SPECIFIED);

        let args = names(&["a", "b"]);
        let err = exactly_one(&args, ONLY_ONE_NAME).unwrap_err();
        assert_eq!(err.to_string(), ONLY_ONE_NAME);
        assert!(err.is_local());
    }

    #[test]
    fn zero_or_one() {
        assert_eq!(bind(&[], Arity::ZeroOrOne).unwrap(), None);
        let args = names(&["public/default"]);
        assert_eq!(bind(&args, Arity::ZeroOrOne).unwrap(), Some("public/default"));
        let args = names(&["a", "b"]);
        assert_eq!(bind(&args, Arity::ZeroOrOne).unwrap_err().to_string(), ONLY_ONE_NAME);
    }
}
