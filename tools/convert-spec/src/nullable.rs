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

//! Replaces OpenAPI 3.1 `null` types with the OpenAPI 3.0 `nullable` flag.
//!
//! OpenAPI 3.1 schemas express optional values as a union with `null`,
//! either `anyOf: [{...}, {"type": "null"}]` or `type: ["string", "null"]`.
//! OpenAPI 3.0 has no `null` type, the schema is marked `nullable: true`
//! instead.

use serde_json::{Map, Value};

const ANY_OF: &str = "anyOf";
const TYPE: &str = "type";
const NULLABLE: &str = "nullable";
const NULL: &str = "null";

/// Rewrites every schema in `value`, recursively.
pub fn fix_null_types(value: &mut Value) {
    match value {
        Value::Object(schema) => {
            fix_any_of(schema);
            fix_type_array(schema);
            schema.values_mut().for_each(fix_null_types);
        }
        Value::Array(items) => items.iter_mut().for_each(fix_null_types),
        _ => {}
    }
}

fn is_null_schema(value: &Value) -> bool {
    value.get(TYPE).and_then(Value::as_str) == Some(NULL)
}

fn fix_any_of(schema: &mut Map<String, Value>) {
    let Some(Value::Array(alternatives)) = schema.get_mut(ANY_OF) else {
        return;
    };
    let before = alternatives.len();
    alternatives.retain(|v| !is_null_schema(v));
    let has_null = alternatives.len() != before;
    let remaining = alternatives.len();
    let single_object = matches!(alternatives.as_slice(), [Value::Object(_)]);

    if remaining == 0 && has_null {
        schema.remove(ANY_OF);
        schema.insert(TYPE.to_string(), Value::from("string"));
        schema.insert(NULLABLE.to_string(), Value::Bool(true));
    } else if single_object {
        if let Some(Value::Array(mut alternatives)) = schema.remove(ANY_OF) {
            if let Some(Value::Object(inner)) = alternatives.pop() {
                schema.extend(inner);
            }
        }
        if has_null {
            schema.insert(NULLABLE.to_string(), Value::Bool(true));
        }
    }
}

fn fix_type_array(schema: &mut Map<String, Value>) {
    let Some(Value::Array(types)) = schema.get(TYPE) else {
        return;
    };
    let mut remaining = types
        .iter()
        .filter(|t| t.as_str() != Some(NULL))
        .cloned()
        .collect::<Vec<_>>();
    let has_null = remaining.len() != types.len();

    match remaining.len() {
        0 => {}
        1 => {
            schema.insert(TYPE.to_string(), remaining.remove(0));
            if has_null {
                schema.insert(NULLABLE.to_string(), Value::Bool(true));
            }
        }
        _ => {
            schema.insert(TYPE.to_string(), Value::Array(remaining));
        }
    }
}
