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

use serde::{Deserialize, Serialize};

/// The body of an error response, in `application/problem+json` format.
///
/// # Example
/// ```
/// # use payjp_v2::model::ErrorResponse;
/// let body = r#"{"type": "about:blank", "title": "Not Found", "status": 404}"#;
/// let error = serde_json::from_str::<ErrorResponse>(body)?;
/// assert_eq!(error.title, "Not Found");
/// assert_eq!(error.detail, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Identifies the problem type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,

    /// A short summary of the problem.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// An explanation specific to this occurrence of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Identifies this occurrence of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ErrorResponse {
    pub fn new<T: Into<String>>(status: u16, title: T) -> Self {
        Self {
            title: title.into(),
            status,
            ..Default::default()
        }
    }

    pub fn set_detail<T: Into<String>>(mut self, v: T) -> Self {
        self.detail = Some(v.into());
        self
    }
}
