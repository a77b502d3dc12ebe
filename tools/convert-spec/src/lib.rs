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

//! Prepares the PAY.JP v2 OpenAPI description for the Go code generator.
//!
//! The API is described with OpenAPI 3.1, while the generator only supports
//! OpenAPI 3.0. This crate rewrites the few constructs that differ between
//! the two versions and that appear in the PAY.JP description.

pub mod content;
pub mod error;
pub mod nullable;

pub use error::{Error, Result};

use serde_json::Value;
use std::path::Path;

/// The OpenAPI version written into the converted description.
pub const TARGET_VERSION: &str = "3.0.3";

/// Converts a parsed OpenAPI description in place.
pub fn convert(document: &mut Value) -> Result<()> {
    let Some(root) = document.as_object_mut() else {
        return Err(Error::NotAnObject);
    };
    root.insert("openapi".to_string(), Value::from(TARGET_VERSION));
    nullable::fix_null_types(document);
    content::fix_content_types(document);
    Ok(())
}

/// Reads the description in `input`, converts it, and writes the result to
/// `output`.
pub fn run(input: &Path, output: &Path) -> Result<()> {
    let contents = std::fs::read(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let mut document: Value = serde_json::from_slice(&contents).map_err(|source| Error::Parse {
        path: input.to_path_buf(),
        source,
    })?;
    convert(&mut document)?;
    tracing::info!("converted {}", input.display());

    let contents = serde_json::to_string_pretty(&document).map_err(Error::Serialize)?;
    std::fs::write(output, contents).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn convert_document() -> anyhow::Result<()> {
        let mut document = json!({
            "openapi": "3.1.0",
            "paths": {
                "/v2/customers/{customer_id}": {
                    "get": {
                        "responses": {
                            "404": {
                                "content": {
                                    "application/problem+json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Customer": {
                        "properties": {
                            "email": {"anyOf": [{"type": "string"}, {"type": "null"}]}
                        }
                    }
                }
            }
        });
        convert(&mut document)?;
        let want = json!({
            "openapi": "3.0.3",
            "paths": {
                "/v2/customers/{customer_id}": {
                    "get": {
                        "responses": {
                            "404": {
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Customer": {
                        "properties": {
                            "email": {"type": "string", "nullable": true}
                        }
                    }
                }
            }
        });
        assert_eq!(document, want);
        Ok(())
    }

    #[test]
    fn convert_sets_version() -> anyhow::Result<()> {
        let mut document = json!({});
        convert(&mut document)?;
        assert_eq!(document, json!({"openapi": "3.0.3"}));
        Ok(())
    }

    #[test]
    fn convert_rejects_non_objects() {
        let mut document = json!(["openapi"]);
        let err = convert(&mut document).unwrap_err();
        assert!(matches!(err, Error::NotAnObject), "{err:?}");
    }
}
