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

use std::fmt;

/// How many times a renamed field appeared in the original text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameCount {
    pub old_name: String,
    pub new_name: String,
    pub count: usize,
}

/// How many times an identifier ending in `Id` appeared in the original text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierCount {
    pub old_name: String,
    pub new_name: String,
    pub count: usize,
}

/// The changes made by a post-processor run.
///
/// The counts are computed against the original text. They are informative
/// only: a field name may appear in contexts that are not rewritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    changed: bool,
    renames: Vec<RenameCount>,
    identifiers: Vec<IdentifierCount>,
}

impl ChangeSummary {
    pub fn new(original: &str, rewritten: &str) -> Self {
        Self {
            changed: original != rewritten,
            ..Default::default()
        }
    }

    /// Records a field rename, counting the occurrences of `old_name` in
    /// `original`. Renames that never occur are not recorded.
    pub fn record_rename(&mut self, original: &str, old_name: &str, new_name: &str) {
        let count = original.matches(old_name).count();
        if count == 0 {
            return;
        }
        self.renames.push(RenameCount {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            count,
        });
    }

    pub fn record_identifier<O, N>(&mut self, old_name: O, new_name: N, count: usize)
    where
        O: Into<String>,
        N: Into<String>,
    {
        self.identifiers.push(IdentifierCount {
            old_name: old_name.into(),
            new_name: new_name.into(),
            count,
        });
    }

    /// If false, the run left the generated client unchanged.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn renames(&self) -> &[RenameCount] {
        &self.renames
    }

    pub fn identifiers(&self) -> &[IdentifierCount] {
        &self.identifiers
    }

    /// The total number of `Id` suffixes rewritten.
    pub fn id_replacements(&self) -> usize {
        self.identifiers.iter().map(|i| i.count).sum()
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changed {
            return writeln!(f, "No changes were made.");
        }
        writeln!(f)?;
        writeln!(f, "Changes applied:")?;
        for r in &self.renames {
            writeln!(
                f,
                "  - {} → {}: {} replacements",
                r.old_name, r.new_name, r.count
            )?;
        }
        if self.identifiers.is_empty() {
            return Ok(());
        }
        writeln!(
            f,
            "  - ID naming convention (xxxId → xxxID): {} replacements",
            self.id_replacements()
        )?;
        for i in &self.identifiers {
            writeln!(f, "      {} → {}: {}", i.old_name, i.new_name, i.count)?;
        }
        Ok(())
    }
}
