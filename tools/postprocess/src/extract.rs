// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Result;
use crate::status::kind_name;
use regex::Regex;
use std::collections::BTreeMap;

/// The generator names error-payload fields with this prefix followed by the
/// HTTP status code, e.g. `ApplicationproblemJSON404`.
pub const ERROR_FIELD_MARKER: &str = "ApplicationproblemJSON";

/// An error kind and the HTTP status code that produces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorMapping {
    pub kind_name: String,
    pub status_code: u16,
}

impl ErrorMapping {
    pub fn new<T: Into<String>>(kind_name: T, status_code: u16) -> Self {
        Self {
            kind_name: kind_name.into(),
            status_code,
        }
    }
}

/// The error-payload fields found in a generated file.
///
/// Keyed by the generated field name, so each field appears once no matter
/// how many times the generated code refers to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorFields(BTreeMap<String, ErrorMapping>);

impl ErrorFields {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The kind name a generated field is renamed to, if it was discovered.
    pub fn kind_name(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|m| m.kind_name.as_str())
    }

    /// The rename rules, as `(generated field, kind name)` pairs.
    pub fn renames(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, m)| (field.as_str(), m.kind_name.as_str()))
    }

    /// The mappings sorted by status code, one per status code.
    pub fn mappings(&self) -> Vec<ErrorMapping> {
        let mut mappings = self.0.values().cloned().collect::<Vec<_>>();
        mappings.sort_by_key(|m| m.status_code);
        mappings.dedup_by_key(|m| m.status_code);
        mappings
    }
}

/// Finds the error-payload fields in the generated code.
#[derive(Clone, Debug)]
pub struct ErrorFieldExtractor {
    pattern: Regex,
}

impl ErrorFieldExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"(?-u){}(\d+)",
            regex::escape(ERROR_FIELD_MARKER)
        ))?;
        Ok(Self { pattern })
    }

    /// Returns every distinct error-payload field in `source`.
    ///
    /// Fields whose suffix is not a valid status code are ignored.
    pub fn extract(&self, source: &str) -> ErrorFields {
        let mut fields = BTreeMap::new();
        for captures in self.pattern.captures_iter(source) {
            let (field, [digits]) = captures.extract();
            if fields.contains_key(field) {
                continue;
            }
            let Ok(status_code) = digits.parse::<u16>() else {
                tracing::debug!("ignoring {field}, {digits} is not a status code");
                continue;
            };
            let mapping = ErrorMapping::new(kind_name(status_code), status_code);
            tracing::debug!("found error field {field} => {}", mapping.kind_name);
            fields.insert(field.to_string(), mapping);
        }
        ErrorFields(fields)
    }
}
