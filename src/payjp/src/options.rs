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

//! Options for a single request.
//!
//! The client configuration applies to every request. Some requests need
//! additional settings, most commonly an idempotency key, so that retrying a
//! `POST` does not create the same resource twice.

/// A set of options configuring a single request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    idempotency_key: Option<String>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Sends the `Idempotency-Key` header with this value.
    pub fn set_idempotency_key<T: Into<String>>(&mut self, v: T) {
        self.idempotency_key = Some(v.into());
    }

    pub fn idempotency_key(&self) -> &Option<String> {
        &self.idempotency_key
    }

    /// Replaces the default `User-Agent` header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }
}

/// Returns options sending `key` as the `Idempotency-Key` header.
///
/// # Example
/// ```
/// # use payjp_v2::options::with_idempotency_key;
/// let options = with_idempotency_key("4f4a1c2e");
/// assert_eq!(options.idempotency_key().as_deref(), Some("4f4a1c2e"));
/// ```
pub fn with_idempotency_key<T: Into<String>>(key: T) -> RequestOptions {
    let mut options = RequestOptions::default();
    options.set_idempotency_key(key);
    options
}
