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

//! Structured identifiers for tenants, namespaces and topics

pub mod namespace_name;
pub mod tenant_name;
pub mod topic_name;

pub const PUBLIC_TENANT: &str = "public";
pub const DEFAULT_NAMESPACE: &str = "default";

/// Pre-computed valid character bitmap for named entities
/// Allows: 0-9, a-z, A-Z, -, =, :, ., _
const VALID_CHAR_BIT_MAP: [bool; 128] = {
    let mut map = [false; 128];
    map['-' as usize] = true;
    map['=' as usize] = true;
    map[':' as usize] = true;
    map['.' as usize] = true;
    map['_' as usize] = true;

    let mut i = b'0';
    while i <= b'9' {
        map[i as usize] = true;
        i += 1;
    }

    let mut i = b'A';
    while i <= b'Z' {
        map[i as usize] = true;
        i += 1;
    }

    let mut i = b'a';
    while i <= b'z' {
        map[i as usize] = true;
        i += 1;
    }
    map
};

/// Returns the reason a tenant or namespace segment is invalid, if any.
pub(crate) fn check_named_entity(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("name must not be empty".to_string());
    }
    name.chars()
        .find(|c| !c.is_ascii() || !VALID_CHAR_BIT_MAP[*c as usize])
        .map(|c| format!("contains invalid character '{c}'"))
}
