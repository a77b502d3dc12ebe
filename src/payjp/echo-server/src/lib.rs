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

//! A local stand-in for the PAY.JP API, used in the client integration tests.
//!
//! - `/echo` returns the method, headers, query and body of the request.
//! - `/error/{code}` returns a `application/problem+json` error with the
//!   given status code. The `detail` query parameter sets the detail.
//! - `/plain-error` returns a `500` error that is not JSON.
//! - `/empty` returns `204 No Content`.

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{HeaderMap, Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::collections::HashMap;
use tokio::task::JoinHandle;

pub type Result<T> = anyhow::Result<T>;

/// Starts the server on an ephemeral port.
///
/// Returns the endpoint, e.g. `http://127.0.0.1:12345`, and the task serving
/// requests.
pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new()
        .route(
            "/echo",
            axum::routing::get(echo).post(echo).delete(echo),
        )
        .route("/error/{code}", axum::routing::any(problem))
        .route("/plain-error", axum::routing::any(plain_error))
        .route("/empty", axum::routing::any(empty));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("echo server stopped: {e}");
        }
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

async fn echo(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match echo_impl(method, query, headers, body).await {
        Ok(v) => (StatusCode::OK, axum::Json(v)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}")).into_response(),
    }
}

async fn echo_impl(
    method: Method,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<serde_json::Value> {
    if let Some(delay) = query
        .get("delay_ms")
        .map(|s| s.parse::<u64>())
        .transpose()?
        .map(tokio::time::Duration::from_millis)
    {
        tokio::time::sleep(delay).await;
    }
    let body = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body)?
    };
    Ok(json!({
        "method": method.as_str(),
        "headers": headers_to_json(&headers)?,
        "query": query,
        "body": body,
    }))
}

async fn problem(
    Path(code): Path<u16>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut body = json!({
        "type": "about:blank",
        "title": status.canonical_reason().unwrap_or("Unknown"),
        "status": status.as_u16(),
    });
    if let Some(detail) = query.get("detail") {
        body["detail"] = json!(detail);
    }
    (
        status,
        [(CONTENT_TYPE, "application/problem+json")],
        body.to_string(),
    )
        .into_response()
}

async fn plain_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(CONTENT_TYPE, "text/plain")],
        "upstream unavailable",
    )
        .into_response()
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn headers_to_json(headers: &HeaderMap) -> Result<serde_json::Value> {
    let headers = headers
        .iter()
        .map(|(k, v)| -> Result<(String, serde_json::Value)> {
            Ok((k.to_string(), json!(v.to_str()?)))
        })
        .collect::<Result<serde_json::Map<String, serde_json::Value>>>()?;
    Ok(serde_json::Value::Object(headers))
}
