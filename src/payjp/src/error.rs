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

use crate::response::ApiError;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by the client.
///
/// The client reports errors from multiple sources. The request may not
/// serialize, the transport may be unable to connect, the request may time
/// out, the response may not deserialize, or the service may return an
/// error.
///
/// Service errors are usually handled through [ApiResponse][crate::ApiResponse],
/// which keeps them separate from the other errors. They only appear as
/// [Error] once the response is converted with
/// [into_result][crate::ApiResponse::into_result] or [extract][crate::extract].
///
/// # Example
/// ```
/// use payjp_v2::{ApiError, Error};
/// use payjp_v2::model::ErrorResponse;
/// let error = Error::from(ApiError::new(404, Some(ErrorResponse::new(404, "Not Found")), ""));
/// match error.api_error() {
///     Some(e) if e.is_not_found() => println!("no such customer: {e}"),
///     Some(e) => println!("the service rejected the request: {e}"),
///     None => println!("could not complete the request: {error}"),
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

impl Error {
    /// The request could not be serialized.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, source)
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The response could not be deserialized.
    ///
    /// The service may have returned a payload the client does not expect,
    /// or the application requested the wrong response type.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, source)
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The request did not complete before its timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, source)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The transport could not send the request or receive the response.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Io, source)
    }

    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The service returned an error.
    pub fn api(error: ApiError) -> Self {
        Self::new(ErrorKind::Api, error)
    }

    pub fn is_api(&self) -> bool {
        matches!(self.kind, ErrorKind::Api)
    }

    /// The error returned by the service, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.kind {
            ErrorKind::Api => self.source.downcast_ref::<ApiError>(),
            _ => None,
        }
    }

    fn new<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

impl From<ApiError> for Error {
    fn from(value: ApiError) -> Self {
        Self::api(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = &self.source;
        match self.kind {
            ErrorKind::Serialization => write!(f, "cannot serialize the request {e}"),
            ErrorKind::Deserialization => write!(f, "cannot deserialize the response {e}"),
            ErrorKind::Timeout => write!(f, "the request exceeded its timeout {e}"),
            ErrorKind::Io => write!(f, "cannot send the request {e}"),
            ErrorKind::Api => write!(f, "{e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref() as &(dyn StdError))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Timeout,
    Io,
    Api,
}

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct BuilderError(BuilderErrorKind);

impl BuilderError {
    /// If true, the API key is missing or malformed.
    pub fn is_api_key(&self) -> bool {
        matches!(
            &self.0,
            BuilderErrorKind::EmptyApiKey | BuilderErrorKind::InvalidApiKey
        )
    }

    /// If true, the default headers could not be created.
    pub fn is_header(&self) -> bool {
        matches!(&self.0, BuilderErrorKind::Header(_))
    }

    /// If true, the HTTP client could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, BuilderErrorKind::Transport(_))
    }

    pub(crate) fn empty_api_key() -> Self {
        Self(BuilderErrorKind::EmptyApiKey)
    }

    pub(crate) fn invalid_api_key() -> Self {
        Self(BuilderErrorKind::InvalidApiKey)
    }

    pub(crate) fn header<T: Into<BoxError>>(source: T) -> Self {
        Self(BuilderErrorKind::Header(source.into()))
    }

    pub(crate) fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(BuilderErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum BuilderErrorKind {
    #[error("API key cannot be empty")]
    EmptyApiKey,
    #[error("invalid API key format: must start with 'sk_'")]
    InvalidApiKey,
    #[error("cannot create the default request headers")]
    Header(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}
