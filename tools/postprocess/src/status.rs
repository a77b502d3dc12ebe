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

/// The `net/http` status constants and the reason phrases returned by Go's
/// `http.StatusText`.
///
/// The generated client is Go code, so the kind names follow Go's phrases.
/// These differ from the IANA registry for some codes, for example `413` is
/// `Request Entity Too Large` rather than `Content Too Large`.
const GO_STATUS: &[(u16, &str, &str)] = &[
    (100, "StatusContinue", "Continue"),
    (101, "StatusSwitchingProtocols", "Switching Protocols"),
    (102, "StatusProcessing", "Processing"),
    (103, "StatusEarlyHints", "Early Hints"),
    (200, "StatusOK", "OK"),
    (201, "StatusCreated", "Created"),
    (202, "StatusAccepted", "Accepted"),
    (203, "StatusNonAuthoritativeInfo", "Non-Authoritative Information"),
    (204, "StatusNoContent", "No Content"),
    (205, "StatusResetContent", "Reset Content"),
    (206, "StatusPartialContent", "Partial Content"),
    (207, "StatusMultiStatus", "Multi-Status"),
    (208, "StatusAlreadyReported", "Already Reported"),
    (226, "StatusIMUsed", "IM Used"),
    (300, "StatusMultipleChoices", "Multiple Choices"),
    (301, "StatusMovedPermanently", "Moved Permanently"),
    (302, "StatusFound", "Found"),
    (303, "StatusSeeOther", "See Other"),
    (304, "StatusNotModified", "Not Modified"),
    (305, "StatusUseProxy", "Use Proxy"),
    (307, "StatusTemporaryRedirect", "Temporary Redirect"),
    (308, "StatusPermanentRedirect", "Permanent Redirect"),
    (400, "StatusBadRequest", "Bad Request"),
    (401, "StatusUnauthorized", "Unauthorized"),
    (402, "StatusPaymentRequired", "Payment Required"),
    (403, "StatusForbidden", "Forbidden"),
    (404, "StatusNotFound", "Not Found"),
    (405, "StatusMethodNotAllowed", "Method Not Allowed"),
    (406, "StatusNotAcceptable", "Not Acceptable"),
    (407, "StatusProxyAuthRequired", "Proxy Authentication Required"),
    (408, "StatusRequestTimeout", "Request Timeout"),
    (409, "StatusConflict", "Conflict"),
    (410, "StatusGone", "Gone"),
    (411, "StatusLengthRequired", "Length Required"),
    (412, "StatusPreconditionFailed", "Precondition Failed"),
    (413, "StatusRequestEntityTooLarge", "Request Entity Too Large"),
    (414, "StatusRequestURITooLong", "Request URI Too Long"),
    (415, "StatusUnsupportedMediaType", "Unsupported Media Type"),
    (416, "StatusRequestedRangeNotSatisfiable", "Requested Range Not Satisfiable"),
    (417, "StatusExpectationFailed", "Expectation Failed"),
    (418, "StatusTeapot", "I'm a teapot"),
    (421, "StatusMisdirectedRequest", "Misdirected Request"),
    (422, "StatusUnprocessableEntity", "Unprocessable Entity"),
    (423, "StatusLocked", "Locked"),
    (424, "StatusFailedDependency", "Failed Dependency"),
    (425, "StatusTooEarly", "Too Early"),
    (426, "StatusUpgradeRequired", "Upgrade Required"),
    (428, "StatusPreconditionRequired", "Precondition Required"),
    (429, "StatusTooManyRequests", "Too Many Requests"),
    (431, "StatusRequestHeaderFieldsTooLarge", "Request Header Fields Too Large"),
    (451, "StatusUnavailableForLegalReasons", "Unavailable For Legal Reasons"),
    (500, "StatusInternalServerError", "Internal Server Error"),
    (501, "StatusNotImplemented", "Not Implemented"),
    (502, "StatusBadGateway", "Bad Gateway"),
    (503, "StatusServiceUnavailable", "Service Unavailable"),
    (504, "StatusGatewayTimeout", "Gateway Timeout"),
    (505, "StatusHTTPVersionNotSupported", "HTTP Version Not Supported"),
    (506, "StatusVariantAlsoNegotiates", "Variant Also Negotiates"),
    (507, "StatusInsufficientStorage", "Insufficient Storage"),
    (508, "StatusLoopDetected", "Loop Detected"),
    (510, "StatusNotExtended", "Not Extended"),
    (511, "StatusNetworkAuthenticationRequired", "Network Authentication Required"),
];

fn go_status(code: u16) -> Option<(&'static str, &'static str)> {
    GO_STATUS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, constant, phrase)| (*constant, *phrase))
}

/// Returns the kind name for an HTTP status code.
///
/// The kind name is Go's reason phrase for the code, keeping only ASCII
/// letters and digits, so it can be used as an identifier: `400` is
/// `BadRequest` and `413` is `RequestEntityTooLarge`.
///
/// Codes without a reason phrase use their decimal digits, `999` is simply
/// `999`.
pub fn kind_name(code: u16) -> String {
    go_status(code)
        .map(|(_, phrase)| phrase.chars().filter(char::is_ascii_alphanumeric).collect())
        .unwrap_or_else(|| code.to_string())
}

/// Returns the name of the `net/http` constant for an HTTP status code.
///
/// Go does not derive all of these names from the reason phrases, for
/// example `407` is `StatusProxyAuthRequired`.
pub fn go_constant(code: u16) -> Option<&'static str> {
    go_status(code).map(|(constant, _)| constant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(400, "BadRequest")]
    #[test_case(401, "Unauthorized")]
    #[test_case(402, "PaymentRequired")]
    #[test_case(403, "Forbidden")]
    #[test_case(404, "NotFound")]
    #[test_case(409, "Conflict")]
    #[test_case(422, "UnprocessableEntity")]
    #[test_case(429, "TooManyRequests")]
    #[test_case(500, "InternalServerError")]
    #[test_case(503, "ServiceUnavailable")]
    #[test_case(413, "RequestEntityTooLarge")]
    #[test_case(414, "RequestURITooLong")]
    #[test_case(416, "RequestedRangeNotSatisfiable")]
    #[test_case(203, "NonAuthoritativeInformation")]
    #[test_case(418, "Imateapot")]
    fn known_codes(code: u16, want: &str) {
        assert_eq!(kind_name(code), want);
    }

    #[test_case(999, "999"; "no reason phrase")]
    #[test_case(42, "42"; "not a status code")]
    #[test_case(1000, "1000"; "out of range")]
    fn unknown_codes(code: u16, want: &str) {
        assert_eq!(kind_name(code), want);
    }

    #[test]
    fn constants_match_kind_names() {
        for code in [400, 404, 413, 414, 416, 422, 500, 503] {
            let constant = go_constant(code).unwrap_or_default();
            assert_eq!(constant, format!("Status{}", kind_name(code)), "{code}");
        }
    }

    #[test]
    fn kind_names_are_identifiers() {
        for code in 100..=599 {
            let name = kind_name(code);
            assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric()),
                "{code} => {name}"
            );
        }
    }

    #[test_case(400, Some("StatusBadRequest"))]
    #[test_case(404, Some("StatusNotFound"))]
    #[test_case(413, Some("StatusRequestEntityTooLarge"))]
    #[test_case(500, Some("StatusInternalServerError"))]
    #[test_case(416, Some("StatusRequestedRangeNotSatisfiable"))]
    #[test_case(999, None)]
    fn go_constants(code: u16, want: Option<&str>) {
        assert_eq!(go_constant(code), want);
    }
}
