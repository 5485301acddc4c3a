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

//! Table formatter using tabled

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

pub struct TableFormatter;

impl TableFormatter {
    /// Renders rows under a header built from the row type, keeping row order.
    pub fn format_tabled<T: Tabled>(data: &[T]) -> String {
        let mut table = Table::new(data);
        table.with(Style::ascii());
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct TestData {
        #[tabled(rename = "Namespace Name")]
        name: String,
    }

    #[test]
    fn test_table_formatter_keeps_order() {
        let data = vec![
            TestData {
                name: "public/zeta".to_string(),
            },
            TestData {
                name: "public/alpha".to_string(),
            },
        ];

        let output = TableFormatter::format_tabled(&data);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].contains("Namespace Name"));
        let zeta = output.find("public/zeta").unwrap();
        let alpha = output.find("public/alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let data: Vec<TestData> = Vec::new();
        let output = TableFormatter::format_tabled(&data);
        assert!(output.contains("Namespace Name"));
        assert_eq!(output.lines().count(), 3);
    }
}
