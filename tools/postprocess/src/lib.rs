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

//! Post-processing for the generated PAY.JP v2 Go client.
//!
//! The OpenAPI generator produces field names that mirror the media types in
//! the API description, for example `JSON200` for the successful payload and
//! `ApplicationproblemJSON404` for a `application/problem+json` error payload.
//! It also keeps the camelCase parameter names from the description, such as
//! `customerId`.
//!
//! This crate rewrites the generated file so that:
//!
//! - success payloads are called `Result`,
//! - error payloads are named after their HTTP status (`NotFound`),
//! - parameters ending in `Id` end in `ID`, as Go naming conventions expect.
//!
//! It also generates a table of `(field name, status code)` pairs, which the
//! hand-written SDK code uses to find the error payload in a response.
//!
//! The rewrite is purely textual. The patterns assume the shape of the code
//! produced by the generator, they do not parse Go.

/// Identifier casing rules.
pub mod casing;

/// The run configuration.
pub mod config;

/// Errors returned by the post-processor.
pub mod error;

/// Discovery of error-payload fields.
pub mod extract;

/// Generates the error field mappings file.
pub mod mappings;

/// Composes all the passes and runs them against the files on disk.
pub mod pipeline;

/// Field renames.
pub mod rename;

/// Names for HTTP status codes.
pub mod status;

/// Reports what a run changed.
pub mod summary;

pub use error::{Error, Result};
