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
use crate::extract::ErrorMapping;
use crate::status::go_constant;
use std::fmt::Write;

/// Go tooling recognizes generated files by this comment.
pub const GENERATED_MARKER: &str = "// Code generated by postprocess. DO NOT EDIT.";

/// Returns the package declared by a Go source file.
///
/// Only the first `package` clause is considered, and only if it names a
/// valid identifier.
pub fn detect_package(source: &str) -> Option<&str> {
    let clause = source
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("package "))?;
    let name = clause
        .split("//")
        .next()
        .map(str::trim)
        .filter(|name| is_identifier(name))?;
    Some(name)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Renders the error field mappings file.
///
/// Each entry refers to the `net/http` constant for its status code. Codes
/// without a constant are written as plain numbers, and the `net/http`
/// import is only emitted when at least one constant is used.
pub fn render(package: &str, mappings: &[ErrorMapping]) -> Result<String> {
    let entries = mappings
        .iter()
        .map(|m| {
            let status = go_constant(m.status_code)
                .map(|name| format!("http.{name}"))
                .unwrap_or_else(|| m.status_code.to_string());
            (m.kind_name.as_str(), status)
        })
        .collect::<Vec<_>>();
    let needs_http = entries.iter().any(|(_, status)| status.starts_with("http."));

    let mut out = String::new();
    writeln!(out, "{GENERATED_MARKER}")?;
    writeln!(out)?;
    writeln!(out, "package {package}")?;
    writeln!(out)?;
    if needs_http {
        writeln!(out, r#"import "net/http""#)?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "// ErrorFieldMapping associates an error field name with its HTTP status code."
    )?;
    writeln!(out, "type ErrorFieldMapping struct {{")?;
    writeln!(out, "\tFieldName  string")?;
    writeln!(out, "\tStatusCode int")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(
        out,
        "// ErrorFieldMappings lists the error fields of the generated responses, ordered by status code."
    )?;
    writeln!(out, "var ErrorFieldMappings = []ErrorFieldMapping{{")?;
    for (name, status) in entries {
        writeln!(out, "\t{{{name:?}, {status}}},")?;
    }
    writeln!(out, "}}")?;
    Ok(out)
}
