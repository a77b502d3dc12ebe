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

use crate::model::ErrorResponse;
use crate::{Error, Result};

/// The outcome of a request that reached the service.
///
/// # Example
/// ```
/// # use payjp_v2::{ApiError, ApiResponse};
/// fn describe(response: ApiResponse<String>) -> String {
///     match response {
///         ApiResponse::Success(name) => format!("found {name}"),
///         ApiResponse::Failure(e) if e.is_not_found() => "no such customer".to_string(),
///         ApiResponse::Failure(e) => format!("failed with {e}"),
///     }
/// }
/// assert_eq!(describe(ApiResponse::Success("cus_123".into())), "found cus_123");
/// assert_eq!(describe(ApiResponse::Failure(ApiError::new(404, None, ""))), "no such customer");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    /// The service returned a successful (2xx) response.
    Success(T),
    /// The service returned an error.
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The successful payload, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// The service error, if any.
    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    /// Converts a service error into [Error].
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(e) => Err(Error::api(e)),
        }
    }
}

/// Folds transport errors and service errors into a single [Result].
///
/// # Example
/// ```no_run
/// # async fn sample(client: payjp_v2::Client) -> payjp_v2::Result<()> {
/// use payjp_v2::{extract, options::RequestOptions};
/// let customer = extract(client.get::<serde_json::Value>("/v2/customers/cus_123", RequestOptions::default()).await)?;
/// println!("{customer}");
/// # Ok(()) }
/// ```
pub fn extract<T>(response: Result<ApiResponse<T>>) -> Result<T> {
    response?.into_result()
}

/// Classifies the errors returned by the PAY.JP API.
///
/// Status codes without a dedicated kind map to [ErrorKind::Other], the
/// [ApiError] retains the status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    TooManyRequests,
    InternalServerError,
    ServiceUnavailable,
    Other,
}

impl ErrorKind {
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            503 => Self::ServiceUnavailable,
            _ => Self::Other,
        }
    }

    /// The name of the kind, matching the field names in the generated Go
    /// client.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::PaymentRequired => "PaymentRequired",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::UnprocessableEntity => "UnprocessableEntity",
            Self::TooManyRequests => "TooManyRequests",
            Self::InternalServerError => "InternalServerError",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An error returned by the PAY.JP API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    status_code: u16,
    kind: ErrorKind,
    body: Option<ErrorResponse>,
    raw_body: bytes::Bytes,
}

impl ApiError {
    pub fn new<B: Into<bytes::Bytes>>(
        status_code: u16,
        body: Option<ErrorResponse>,
        raw_body: B,
    ) -> Self {
        Self {
            status_code,
            kind: ErrorKind::from_status(status_code),
            body,
            raw_body: raw_body.into(),
        }
    }

    /// Creates an error from the payload of a failed response.
    ///
    /// The payload is parsed as `application/problem+json`. If that fails
    /// the error only carries the raw payload.
    pub fn from_payload(status_code: u16, payload: bytes::Bytes) -> Self {
        let body = serde_json::from_slice::<ErrorResponse>(&payload).ok();
        Self::new(status_code, body, payload)
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The parsed error payload.
    pub fn body(&self) -> Option<&ErrorResponse> {
        self.body.as_ref()
    }

    pub fn raw_body(&self) -> &bytes::Bytes {
        &self.raw_body
    }

    pub fn is_bad_request(&self) -> bool {
        self.kind == ErrorKind::BadRequest
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    pub fn is_unprocessable_entity(&self) -> bool {
        self.kind == ErrorKind::UnprocessableEntity
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.status_code;
        match &self.body {
            Some(ErrorResponse {
                title,
                detail: Some(detail),
                ..
            }) if !detail.is_empty() => write!(f, "PAY.JP API error {code}: {title} - {detail}"),
            Some(body) => write!(f, "PAY.JP API error {code}: {}", body.title),
            None => write!(f, "PAY.JP API error {code}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(400, ErrorKind::BadRequest)]
    #[test_case(401, ErrorKind::Unauthorized)]
    #[test_case(402, ErrorKind::PaymentRequired)]
    #[test_case(403, ErrorKind::Forbidden)]
    #[test_case(404, ErrorKind::NotFound)]
    #[test_case(409, ErrorKind::Conflict)]
    #[test_case(422, ErrorKind::UnprocessableEntity)]
    #[test_case(429, ErrorKind::TooManyRequests)]
    #[test_case(500, ErrorKind::InternalServerError)]
    #[test_case(503, ErrorKind::ServiceUnavailable)]
    #[test_case(418, ErrorKind::Other)]
    #[test_case(502, ErrorKind::Other)]
    fn from_status(code: u16, want: ErrorKind) {
        assert_eq!(ErrorKind::from_status(code), want);
        assert_eq!(ApiError::new(code, None, "").kind(), want);
    }

    #[test]
    fn names() {
        assert_eq!(ErrorKind::NotFound.name(), "NotFound");
        assert_eq!(ErrorKind::UnprocessableEntity.to_string(), "UnprocessableEntity");
    }

    #[test]
    fn display_with_detail() {
        let body = ErrorResponse::new(404, "Not Found").set_detail("Customer not found");
        let error = ApiError::new(404, Some(body), "");
        assert_eq!(
            error.to_string(),
            "PAY.JP API error 404: Not Found - Customer not found"
        );
    }

    #[test]
    fn display_without_detail() {
        let error = ApiError::new(400, Some(ErrorResponse::new(400, "Bad Request")), "");
        assert_eq!(error.to_string(), "PAY.JP API error 400: Bad Request");

        let body = ErrorResponse::new(400, "Bad Request").set_detail("");
        let error = ApiError::new(400, Some(body), "");
        assert_eq!(error.to_string(), "PAY.JP API error 400: Bad Request");
    }

    #[test]
    fn display_without_body() {
        let error = ApiError::new(500, None, "upstream failure");
        assert_eq!(error.to_string(), "PAY.JP API error 500");
        assert_eq!(error.raw_body(), &bytes::Bytes::from_static(b"upstream failure"));
    }

    #[test]
    fn predicates() {
        let error = ApiError::new(404, None, "");
        assert!(error.is_not_found(), "{error:?}");
        assert!(!error.is_bad_request(), "{error:?}");
        assert!(!error.is_unprocessable_entity(), "{error:?}");

        assert!(ApiError::new(400, None, "").is_bad_request());
        assert!(ApiError::new(422, None, "").is_unprocessable_entity());
    }

    #[test]
    fn from_payload() {
        let payload = bytes::Bytes::from_static(
            br#"{"title": "Unprocessable Entity", "status": 422, "detail": "email is invalid"}"#,
        );
        let error = ApiError::from_payload(422, payload.clone());
        let want = ErrorResponse::new(422, "Unprocessable Entity").set_detail("email is invalid");
        assert_eq!(error.body(), Some(&want));
        assert_eq!(error.raw_body(), &payload);

        let error = ApiError::from_payload(502, bytes::Bytes::from_static(b"<html>"));
        assert_eq!(error.body(), None);
        assert_eq!(error.status_code(), 502);
    }

    #[test]
    fn into_result() {
        let response = ApiResponse::Success(42);
        assert!(response.is_success());
        assert_eq!(response.success(), Some(&42));
        assert_eq!(response.into_result().ok(), Some(42));

        let response = ApiResponse::<i32>::Failure(ApiError::new(404, None, ""));
        assert!(!response.is_success());
        assert!(response.failure().is_some_and(ApiError::is_not_found));
        let error = response.into_result().unwrap_err();
        assert!(error.api_error().is_some_and(ApiError::is_not_found), "{error:?}");
    }

    #[test]
    fn extract_folds_errors() {
        assert_eq!(extract(Ok(ApiResponse::Success("ok"))).ok(), Some("ok"));

        let error = extract::<()>(Err(Error::io("connection refused"))).unwrap_err();
        assert!(error.is_io(), "{error:?}");

        let error = extract::<()>(Ok(ApiResponse::Failure(ApiError::new(400, None, ""))))
            .unwrap_err();
        assert!(error.api_error().is_some_and(ApiError::is_bad_request), "{error:?}");
    }
}
