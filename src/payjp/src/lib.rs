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

//! A client for the PAY.JP v2 API.
//!
//! The client sends JSON requests with the headers expected by PAY.JP and
//! returns each response as an [ApiResponse]: either the successful payload,
//! or an [ApiError] describing the error returned by the service.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use payjp_v2::{Client, options::with_idempotency_key};
//! use serde_json::{Value, json};
//!
//! let client = Client::builder("sk_test_123").build()?;
//! let customer: Value = client
//!     .post(
//!         "/v2/customers",
//!         &json!({"email": "jennyrosen@example.com"}),
//!         with_idempotency_key("4f4a1c2e"),
//!     )
//!     .await?
//!     .into_result()?;
//! println!("created {customer}");
//! # Ok(()) }
//! ```

/// The client and its builder.
pub mod client;

/// Errors returned by the client.
pub mod error;

/// Types shared by all the PAY.JP v2 endpoints.
pub mod model;

/// Per-request options.
pub mod options;

/// Successful and failed responses.
pub mod response;

/// The user agent headers sent with each request.
pub mod user_agent;

pub use client::{Client, ClientBuilder};
pub use error::{BuilderError, Error};
pub use response::{ApiError, ApiResponse, ErrorKind, extract};

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The version of these bindings, reported in the user agent headers.
pub const BINDINGS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The default endpoint for the PAY.JP API.
pub const DEFAULT_BASE_URL: &str = "https://api.pay.jp";
