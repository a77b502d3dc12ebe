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

use crate::BINDINGS_VERSION;

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));
}

/// The header carrying [ClientUserAgent].
pub const CLIENT_USER_AGENT_HEADER: &str = "x-payjp-client-user-agent";

/// The `User-Agent` header value.
pub fn user_agent() -> String {
    format!("payjp/payjpv2 RustBindings/{BINDINGS_VERSION}")
}

/// Describes the client environment to the PAY.JP service.
///
/// Sent as JSON in the `X-Payjp-Client-User-Agent` header.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClientUserAgent {
    pub bindings_version: String,
    pub lang: String,
    pub lang_version: String,
    pub publisher: String,
    pub uname: String,
}

impl ClientUserAgent {
    /// The values for this build of the client.
    pub fn current() -> Self {
        let lang_version = build_info::RUSTC_VERSION;
        let lang_version = lang_version
            .strip_prefix("rustc ")
            .unwrap_or(lang_version);
        Self {
            bindings_version: BINDINGS_VERSION.to_string(),
            lang: "rust".to_string(),
            lang_version: lang_version.to_string(),
            publisher: "payjp".to_string(),
            uname: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }

    pub fn header_value(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
