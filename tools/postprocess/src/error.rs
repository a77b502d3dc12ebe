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

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem running the post-processor.
///
/// None of these errors are recoverable. The post-processor runs as one step
/// of the code generation pipeline, which is simply invoked again once the
/// problem is fixed.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The generated client could not be read.
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One of the output files could not be written.
    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rewrite pattern did not compile.
    ///
    /// The patterns are built from escaped field names, this indicates a bug
    /// in the post-processor.
    #[error("cannot compile rewrite pattern")]
    Pattern(#[from] regex::Error),

    /// The error field mappings could not be formatted.
    #[error("cannot render the error field mappings")]
    Render(#[from] std::fmt::Error),
}

impl Error {
    /// If true, the error was caused by the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Read { .. } | Error::Write { .. })
    }
}
