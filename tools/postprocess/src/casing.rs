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
use regex::Regex;
use std::collections::BTreeMap;

/// Rewrites camelCase identifiers ending in `Id` to end in `ID`.
///
/// Only identifiers that start with a lowercase ASCII letter and contain
/// nothing but ASCII letters are affected. `customerId` becomes `customerID`
/// while `Invalid`, `id` and `someIdentifier` are left alone.
#[derive(Clone, Debug)]
pub struct IdSuffixNormalizer {
    pattern: Regex,
}

impl IdSuffixNormalizer {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"(?-u)\b([a-z][a-zA-Z]*)Id\b")?;
        Ok(Self { pattern })
    }

    pub fn normalize(&self, source: &str) -> String {
        self.pattern.replace_all(source, "${1}ID").into_owned()
    }

    /// Counts each identifier that [normalize][Self::normalize] would
    /// rewrite.
    pub fn occurrences(&self, source: &str) -> BTreeMap<String, usize> {
        self.pattern
            .find_iter(source)
            .fold(BTreeMap::new(), |mut counts, m| {
                *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test_case("customerId", "customerID"; "basic customer")]
    #[test_case("paymentId", "paymentID"; "basic payment")]
    #[test_case("eventId", "eventID"; "basic event")]
    #[test_case("paymentMethodId", "paymentMethodID"; "compound payment method")]
    #[test_case("checkoutSessionId", "checkoutSessionID"; "compound checkout session")]
    #[test_case("paymentMethodConfigurationId", "paymentMethodConfigurationID"; "compound configuration")]
    #[test_case("customerId and paymentId", "customerID and paymentID"; "multiple ids")]
    #[test_case("func Foo(customerId, paymentId string)", "func Foo(customerID, paymentID string)"; "multiple in function")]
    #[test_case("Invalid", "Invalid"; "uppercase start")]
    #[test_case("id", "id"; "lowercase id only")]
    #[test_case("ID", "ID"; "uppercase id only")]
    #[test_case("someIdentifier", "someIdentifier"; "identifier")]
    #[test_case("provide", "provide"; "provide")]
    #[test_case("providerId", "providerID"; "ends with id")]
    #[test_case("GetCustomer(customerId)", "GetCustomer(customerID)"; "boundary parenthesis")]
    #[test_case("customerId, paymentId", "customerID, paymentID"; "boundary comma")]
    #[test_case("customerId\npaymentId", "customerID\npaymentID"; "boundary newline")]
    #[test_case("customerId ", "customerID "; "boundary space")]
    #[test_case("func GetCustomer(customerId string) error", "func GetCustomer(customerID string) error"; "param declaration")]
    #[test_case("customerId string `json:\"customer_id\"`", "customerID string `json:\"customer_id\"`"; "struct field")]
    #[test_case("return c.GetCustomer(customerId)", "return c.GetCustomer(customerID)"; "variable usage")]
    #[test_case(r#"json:"customerId""#, r#"json:"customerID""#; "inside tag")]
    #[test_case("customer_id", "customer_id"; "snake case")]
    #[test_case("customer2Id", "customer2Id"; "digits")]
    #[test_case("// customerIdを指定します", "// customerIDを指定します"; "japanese after")]
    #[test_case("顧客customerId", "顧客customerID"; "japanese before")]
    fn normalize(input: &str, want: &str) -> TestResult {
        let got = IdSuffixNormalizer::new()?.normalize(input);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn occurrences() -> TestResult {
        let source = "func Get(customerId string) { use(customerId, paymentId) }\nInvalid";
        let got = IdSuffixNormalizer::new()?.occurrences(source);
        let want = BTreeMap::from([("customerId".to_string(), 2), ("paymentId".to_string(), 1)]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn normalize_is_idempotent() -> TestResult {
        let normalizer = IdSuffixNormalizer::new()?;
        let once = normalizer.normalize("GetCustomer(ctx, customerId, paymentMethodId)");
        assert_eq!(normalizer.normalize(&once), once);
        assert!(normalizer.occurrences(&once).is_empty(), "{once}");
        Ok(())
    }
}
