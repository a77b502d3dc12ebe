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

use crate::error::BuilderError;
use crate::options::RequestOptions;
use crate::response::{ApiError, ApiResponse};
use crate::user_agent::{CLIENT_USER_AGENT_HEADER, ClientUserAgent, user_agent};
use crate::{DEFAULT_BASE_URL, Error, Result};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// The prefix of all PAY.JP secret keys.
pub const API_KEY_PREFIX: &str = "sk_";

/// The header used to deduplicate retried requests.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// A client for the PAY.JP v2 API.
///
/// The client is cheap to clone, all clones share the same connection pool.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// use payjp_v2::Client;
/// let client = Client::builder("sk_test_123")
///     .with_base_url("https://api.pay.jp")
///     .build()?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl Client {
    /// Returns a builder for a client using `api_key`.
    pub fn builder<T: Into<String>>(api_key: T) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// The endpoint receiving the requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request and waits for the response.
    ///
    /// Responses with a non-2xx status code are returned as
    /// [ApiResponse::Failure]. The `Err` branch is reserved for requests that
    /// did not produce a usable response.
    pub async fn execute<I, O>(
        &self,
        method: Method,
        path: &str,
        body: Option<&I>,
        options: RequestOptions,
    ) -> Result<ApiResponse<O>>
    where
        I: serde::Serialize + ?Sized,
        O: serde::de::DeserializeOwned + Default,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!("sending {method} {url}");
        let mut builder = self
            .inner
            .request(method, url)
            .headers(self.default_headers.clone());
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(key) = options.idempotency_key() {
            builder = builder.header(
                IDEMPOTENCY_KEY_HEADER,
                HeaderValue::from_str(key).map_err(Error::ser)?,
            );
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::ser)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(payload);
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status();
        tracing::debug!("received {status}");
        if !status.is_success() {
            return to_api_error(response).await.map(ApiResponse::Failure);
        }
        to_response(response).await.map(ApiResponse::Success)
    }

    /// Sends a `GET` request.
    pub async fn get<O>(&self, path: &str, options: RequestOptions) -> Result<ApiResponse<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        self.execute::<NoBody, O>(Method::GET, path, None, options)
            .await
    }

    /// Sends a `POST` request with a JSON body.
    pub async fn post<I, O>(
        &self,
        path: &str,
        body: &I,
        options: RequestOptions,
    ) -> Result<ApiResponse<O>>
    where
        I: serde::Serialize + ?Sized,
        O: serde::de::DeserializeOwned + Default,
    {
        self.execute(Method::POST, path, Some(body), options).await
    }

    /// Sends a `DELETE` request.
    pub async fn delete<O>(&self, path: &str, options: RequestOptions) -> Result<ApiResponse<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        self.execute::<NoBody, O>(Method::DELETE, path, None, options)
            .await
    }
}

/// The body type for requests without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_api_error(response: reqwest::Response) -> Result<ApiError> {
    let status_code = response.status().as_u16();
    let payload = response.bytes().await.map_err(map_send_error)?;
    let error = ApiError::from_payload(status_code, payload);
    tracing::debug!("the service returned an error: {error}");
    Ok(error)
}

async fn to_response<O>(response: reqwest::Response) -> Result<O>
where
    O: serde::de::DeserializeOwned + Default,
{
    // 204 No Content has no body, which is not valid JSON.
    let no_content = response.status() == reqwest::StatusCode::NO_CONTENT;
    let payload = response.bytes().await.map_err(map_send_error)?;
    match payload {
        content if content.is_empty() && no_content => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}

/// Configures and creates a [Client].
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: None,
        }
    }

    /// Sends requests to a different endpoint, for example a test server.
    pub fn with_base_url<T: Into<String>>(mut self, v: T) -> Self {
        self.base_url = v.into();
        self
    }

    /// Uses a preconfigured HTTP client, for example to set a proxy.
    pub fn with_http_client(mut self, v: reqwest::Client) -> Self {
        self.http_client = Some(v);
        self
    }

    /// Validates the configuration and creates the client.
    pub fn build(self) -> std::result::Result<Client, BuilderError> {
        if self.api_key.is_empty() {
            return Err(BuilderError::empty_api_key());
        }
        if !self.api_key.starts_with(API_KEY_PREFIX) {
            return Err(BuilderError::invalid_api_key());
        }
        let default_headers = default_headers(&self.api_key)?;
        let inner = match self.http_client {
            Some(c) => c,
            None => reqwest::Client::builder()
                .build()
                .map_err(BuilderError::transport)?,
        };
        Ok(Client {
            inner,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            default_headers,
        })
    }
}

fn default_headers(api_key: &str) -> std::result::Result<HeaderMap, BuilderError> {
    let client_user_agent = ClientUserAgent::current()
        .header_value()
        .map_err(BuilderError::header)?;
    let mut authorization =
        HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(BuilderError::header)?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&user_agent()).map_err(BuilderError::header)?,
    );
    headers.insert(
        HeaderName::from_static(CLIENT_USER_AGENT_HEADER),
        HeaderValue::from_str(&client_user_agent).map_err(BuilderError::header)?,
    );
    headers.insert(AUTHORIZATION, authorization);
    Ok(headers)
}
