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

use crate::casing::IdSuffixNormalizer;
use crate::config::Config;
use crate::extract::{ErrorFieldExtractor, ErrorFields};
use crate::mappings::{detect_package, render};
use crate::rename::{FieldRenamer, SUCCESS_FIELD_RENAMES};
use crate::summary::ChangeSummary;
use crate::{Error, Result};

/// The result of rewriting a generated client.
#[derive(Clone, Debug)]
pub struct Processed {
    /// The rewritten source.
    pub rewritten: String,
    /// The error fields discovered in the original source.
    pub error_fields: ErrorFields,
}

/// Applies all the rewrites to a generated client.
///
/// The rewrites run in a fixed order: success field renames, then error
/// field renames, then the `Id` suffix normalization.
#[derive(Clone, Debug)]
pub struct PostProcessor {
    extractor: ErrorFieldExtractor,
    success_renames: Vec<FieldRenamer>,
    normalizer: IdSuffixNormalizer,
}

impl PostProcessor {
    pub fn new() -> Result<Self> {
        let success_renames = SUCCESS_FIELD_RENAMES
            .iter()
            .map(|(old, new)| FieldRenamer::new(old, *new))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            extractor: ErrorFieldExtractor::new()?,
            success_renames,
            normalizer: IdSuffixNormalizer::new()?,
        })
    }

    pub fn process(&self, source: &str) -> Result<Processed> {
        let error_fields = self.extractor.extract(source);
        tracing::info!("found {} error fields", error_fields.len());

        let mut rewritten = source.to_string();
        for renamer in &self.success_renames {
            rewritten = renamer.apply(&rewritten);
        }
        for (old, new) in error_fields.renames() {
            rewritten = FieldRenamer::new(old, new)?.apply(&rewritten);
        }
        let rewritten = self.normalizer.normalize(&rewritten);

        Ok(Processed {
            rewritten,
            error_fields,
        })
    }

    /// Summarizes the changes between `original` and its processed form.
    pub fn summarize(&self, original: &str, processed: &Processed) -> ChangeSummary {
        let mut summary = ChangeSummary::new(original, &processed.rewritten);
        for (old, new) in SUCCESS_FIELD_RENAMES {
            summary.record_rename(original, old, new);
        }
        for (old, new) in processed.error_fields.renames() {
            summary.record_rename(original, old, new);
        }
        for (id, count) in self.normalizer.occurrences(original) {
            let normalized = self.normalizer.normalize(&id);
            summary.record_identifier(id, normalized, count);
        }
        summary
    }
}

/// Rewrites the generated client and generates the error field mappings.
///
/// Nothing is written unless every rewrite succeeds. The error field
/// mappings are written only after the generated client.
pub fn run(config: &Config) -> Result<ChangeSummary> {
    let original = std::fs::read_to_string(&config.input).map_err(|source| Error::Read {
        path: config.input.clone(),
        source,
    })?;
    tracing::info!("read {} bytes from {}", original.len(), config.input.display());

    let processor = PostProcessor::new()?;
    let processed = processor.process(&original)?;

    let package = detect_package(&processed.rewritten).unwrap_or(config.package.as_str());
    let mappings = render(package, &processed.error_fields.mappings())?;

    std::fs::write(&config.input, &processed.rewritten).map_err(|source| Error::Write {
        path: config.input.clone(),
        source,
    })?;
    std::fs::write(&config.output, mappings).map_err(|source| Error::Write {
        path: config.output.clone(),
        source,
    })?;
    tracing::info!(
        "wrote {} and {}",
        config.input.display(),
        config.output.display()
    );

    Ok(processor.summarize(&original, &processed))
}
