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

use std::path::PathBuf;

/// The generated client, rewritten in place.
pub const DEFAULT_INPUT: &str = "client.gen.go";

/// The error field mappings file.
pub const DEFAULT_OUTPUT: &str = "error_mappings.gen.go";

/// The package used when the generated client does not declare one.
pub const DEFAULT_PACKAGE: &str = "payjpv2";

/// Configures a post-processor run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub package: String,
}

impl Config {
    pub fn new<I, O>(input: I, output: O) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn with_package<T: Into<String>>(mut self, v: T) -> Self {
        self.package = v.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}
