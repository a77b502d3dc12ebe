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

#[cfg(test)]
mod tests {
    use payjp_v2::options::RequestOptions;
    use payjp_v2::{ApiError, ApiResponse, Client, ErrorKind, extract};
    use serde_json::Value;
    use std::time::Duration;
    use test_case::test_case;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    async fn test_client() -> Result<(Client, tokio::task::JoinHandle<()>)> {
        let (endpoint, server) = echo_server::start().await?;
        let client = Client::builder("sk_test_123")
            .with_base_url(endpoint)
            .build()?;
        Ok((client, server))
    }

    async fn failure(client: &Client, path: &str) -> Result<ApiError> {
        match client.get::<Value>(path, RequestOptions::default()).await? {
            ApiResponse::Failure(e) => Ok(e),
            ApiResponse::Success(v) => Err(format!("expected an error, got {v:?}").into()),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn not_found_with_detail() -> Result<()> {
        let (client, _server) = test_client().await?;
        let error = failure(&client, "/error/404?detail=Customer%20not%20found").await?;
        assert_eq!(error.status_code(), 404);
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(error.is_not_found(), "{error:?}");
        let body = error.body().ok_or("missing error body")?;
        assert_eq!(body.title, "Not Found");
        assert_eq!(body.status, 404);
        assert_eq!(body.detail.as_deref(), Some("Customer not found"));
        assert_eq!(
            error.to_string(),
            "PAY.JP API error 404: Not Found - Customer not found"
        );
        Ok(())
    }

    #[test_case(400, ErrorKind::BadRequest)]
    #[test_case(401, ErrorKind::Unauthorized)]
    #[test_case(402, ErrorKind::PaymentRequired)]
    #[test_case(403, ErrorKind::Forbidden)]
    #[test_case(409, ErrorKind::Conflict)]
    #[test_case(422, ErrorKind::UnprocessableEntity)]
    #[test_case(429, ErrorKind::TooManyRequests)]
    #[test_case(500, ErrorKind::InternalServerError)]
    #[test_case(503, ErrorKind::ServiceUnavailable)]
    #[test_case(418, ErrorKind::Other)]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn status_codes(code: u16, want: ErrorKind) -> Result<()> {
        let (client, _server) = test_client().await?;
        let error = failure(&client, &format!("/error/{code}")).await?;
        assert_eq!(error.status_code(), code);
        assert_eq!(error.kind(), want);
        assert!(error.body().is_some(), "{error:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn not_problem_json() -> Result<()> {
        let (client, _server) = test_client().await?;
        let error = failure(&client, "/plain-error").await?;
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert!(error.body().is_none(), "{error:?}");
        assert_eq!(error.raw_body().as_ref(), b"upstream unavailable");
        assert_eq!(error.to_string(), "PAY.JP API error 500");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn into_result() -> Result<()> {
        let (client, _server) = test_client().await?;
        let err = client
            .get::<Value>("/error/422", RequestOptions::default())
            .await?
            .into_result()
            .unwrap_err();
        assert!(err.is_api(), "{err:?}");
        let api = err.api_error().ok_or("missing API error")?;
        assert!(api.is_unprocessable_entity(), "{api:?}");
        assert_eq!(err.to_string(), "PAY.JP API error 422: Unprocessable Entity");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn extract_api_error() -> Result<()> {
        let (client, _server) = test_client().await?;
        let err = extract(
            client
                .get::<Value>("/error/400", RequestOptions::default())
                .await,
        )
        .unwrap_err();
        assert!(err.api_error().is_some_and(ApiError::is_bad_request), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn extract_transport_error() -> Result<()> {
        // Bind and release a port, so nothing is listening on it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let client = Client::builder("sk_test_123")
            .with_base_url(format!("http://{addr}"))
            .build()?;
        let err = extract(client.get::<Value>("/echo", RequestOptions::default()).await)
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.api_error().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn timeout() -> Result<()> {
        let (client, _server) = test_client().await?;
        let options = {
            let mut o = RequestOptions::default();
            o.set_attempt_timeout(Duration::from_millis(50));
            o
        };
        let err = client
            .get::<Value>("/echo?delay_ms=2000", options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }
}
