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

use crate::Result;
use regex::{Captures, NoExpand, Regex};

/// The generator names the successful payload after its media type and
/// status code. The hand-written SDK code expects `Result` in all cases.
pub const SUCCESS_FIELD_RENAMES: &[(&str, &str)] = &[("JSON200", "Result"), ("JSON201", "Result")];

/// Renames a struct field and every reference to it.
///
/// The generated code refers to a field in three ways:
///
/// - the declaration, where the name is followed by its type,
///   `JSON200 *CustomerResponse`,
/// - member access, `resp.JSON200`,
/// - the serialization tag, `json:"JSON200"`.
///
/// Only those forms are rewritten. In particular, renaming `JSON200` leaves
/// `JSON2001` untouched.
#[derive(Clone, Debug)]
pub struct FieldRenamer {
    new_name: String,
    declaration: Regex,
    access: Regex,
    json_tag: Regex,
}

impl FieldRenamer {
    pub fn new<T: Into<String>>(old_name: &str, new_name: T) -> Result<Self> {
        let old = regex::escape(old_name);
        Ok(Self {
            new_name: new_name.into(),
            declaration: Regex::new(&format!(r"(?-u)\b{old}(\s+\*?\w+)"))?,
            access: Regex::new(&format!(r"(?-u)\.{old}\b"))?,
            json_tag: Regex::new(&format!(r#"json:"{old}""#))?,
        })
    }

    pub fn apply(&self, source: &str) -> String {
        let new_name = self.new_name.as_str();
        let source = self
            .declaration
            .replace_all(source, |captures: &Captures| format!("{new_name}{}", &captures[1]));
        let source = self
            .access
            .replace_all(&source, NoExpand(&format!(".{new_name}")));
        self.json_tag
            .replace_all(&source, NoExpand(&format!(r#"json:"{new_name}""#)))
            .into_owned()
    }
}

/// Renames `old_name` to `new_name` in `source`.
///
/// Prefer [FieldRenamer] when the same rename applies to many inputs.
pub fn rename_field(source: &str, old_name: &str, new_name: &str) -> Result<String> {
    Ok(FieldRenamer::new(old_name, new_name)?.apply(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test_case("JSON200", "Data", "JSON200 *CustomerResponse", "Data *CustomerResponse"; "struct field pointer")]
    #[test_case("JSON200", "Data", "JSON200 CustomerResponse", "Data CustomerResponse"; "struct field value")]
    #[test_case("JSON200", "Data", "resp.JSON200", "resp.Data"; "field access")]
    #[test_case("JSON200", "Data", "resp.JSON200.Name", "resp.Data.Name"; "field access chain")]
    #[test_case("JSON200", "Data", r#"json:"JSON200""#, r#"json:"Data""#; "json tag")]
    #[test_case("JSON201", "Data", "JSON201 *CreateResponse", "Data *CreateResponse"; "json201 struct field")]
    #[test_case("JSON201", "Data", "resp.JSON201", "resp.Data"; "json201 field access")]
    #[test_case("ApplicationproblemJSON400", "BadRequest", "ApplicationproblemJSON400 *ErrorResponse", "BadRequest *ErrorResponse"; "bad request")]
    #[test_case("ApplicationproblemJSON401", "Unauthorized", "ApplicationproblemJSON401 *ErrorResponse", "Unauthorized *ErrorResponse"; "unauthorized")]
    #[test_case("ApplicationproblemJSON404", "NotFound", "ApplicationproblemJSON404 *ErrorResponse", "NotFound *ErrorResponse"; "not found")]
    #[test_case("ApplicationproblemJSON422", "UnprocessableEntity", "ApplicationproblemJSON422 *ErrorResponse", "UnprocessableEntity *ErrorResponse"; "unprocessable")]
    #[test_case("JSON200", "Data", "JSON2001", "JSON2001"; "no partial match")]
    #[test_case("JSON200", "Data", "// resp.JSON200は成功時", "// resp.Dataは成功時"; "access before japanese")]
    #[test_case("JSON200", "Data", "結果JSON200 *CustomerResponse", "結果Data *CustomerResponse"; "declaration after japanese")]
    #[test_case("JSON200", "Data", "type Response struct { Body []byte }", "type Response struct { Body []byte }"; "absent")]
    #[test_case(
        "JSON200",
        "Data",
        "if resp.JSON200 != nil { return resp.JSON200.ID }",
        "if resp.Data != nil { return resp.Data.ID }";
        "multiple occurrences"
    )]
    fn rename(old_name: &str, new_name: &str, input: &str, want: &str) -> TestResult {
        let got = rename_field(input, old_name, new_name)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn generated_struct() -> TestResult {
        let input = r#"type GetCustomerResponse struct {
	Body                      []byte
	HTTPResponse              *http.Response
	JSON200                   *CustomerResponse
	ApplicationproblemJSON404 *ErrorResponse
}
"#;
        let want = r#"type GetCustomerResponse struct {
	Body                      []byte
	HTTPResponse              *http.Response
	Result                   *CustomerResponse
	ApplicationproblemJSON404 *ErrorResponse
}
"#;
        let renamer = FieldRenamer::new("JSON200", "Result")?;
        pretty_assertions::assert_eq!(renamer.apply(input), want);
        Ok(())
    }

    #[test]
    fn new_name_is_literal() -> TestResult {
        let got = rename_field("resp.JSON200", "JSON200", "$1")?;
        assert_eq!(got, "resp.$1");
        Ok(())
    }

    #[test]
    fn success_renames() {
        for (old, new) in SUCCESS_FIELD_RENAMES {
            assert!(old.starts_with("JSON2"), "{old}");
            assert_eq!(*new, "Result");
        }
    }
}
