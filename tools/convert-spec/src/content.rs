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

use serde_json::Value;

/// The media type used by the PAY.JP API for error responses.
pub const PROBLEM_JSON: &str = "application/problem+json";

/// The media type the Go code generator expects.
pub const JSON: &str = "application/json";

/// Moves every `application/problem+json` media type to `application/json`.
///
/// The generator names response fields after their media type. With this
/// change all payloads share the `JSON` prefix, which the post-processor
/// then renames.
pub fn fix_content_types(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(content)) = map.get_mut("content") {
                if let Some(media) = content.remove(PROBLEM_JSON) {
                    content.insert(JSON.to_string(), media);
                }
            }
            map.values_mut().for_each(fix_content_types);
        }
        Value::Array(items) => items.iter_mut().for_each(fix_content_types),
        _ => {}
    }
}
