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

use anyhow::{Result, bail};
use clap::Parser;
use payjp_v2::options::{RequestOptions, with_idempotency_key};
use payjp_v2::{Client, DEFAULT_BASE_URL, Error, extract};
use serde_json::{Value, json};

#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The PAY.JP endpoint.
    #[arg(long, env = "PAYJP_API_HOST", default_value = DEFAULT_BASE_URL)]
    api_host: String,

    /// A secret key, starting with `sk_`.
    #[arg(long, env = "PAYJP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let Some(api_key) = args.api_key else {
        bail!("Please set the PAYJP_API_KEY environment variable");
    };
    let client = Client::builder(api_key)
        .with_base_url(args.api_host)
        .build()?;
    println!("PAY.JP Rust client initialized successfully");

    let idempotency_key = uuid::Uuid::new_v4().to_string();
    println!("Using Idempotency-Key: {idempotency_key}");
    let customer: Value = extract(
        client
            .post(
                "/v2/customers",
                &json!({"email": "jennyrosen@example.com"}),
                with_idempotency_key(&idempotency_key),
            )
            .await,
    )
    .map_err(report)?;
    println!("Created customer: {customer}");

    let card = json!({
        "type": "card",
        "billing_details": {"email": "jennyrosen@example.com"},
        "card": {
            "number": "4242424242424242",
            "exp_month": 12,
            "exp_year": 2030,
            "cvc": "123",
        },
    });
    let payment_method: Value = extract(
        client
            .post("/v2/payment_methods", &card, RequestOptions::default())
            .await,
    )
    .map_err(report)?;
    println!("Created payment method: {payment_method}");

    Ok(())
}

fn report(error: Error) -> anyhow::Error {
    match error.api_error() {
        Some(e) => {
            let title = e.body().map(|b| b.title.as_str()).unwrap_or_default();
            anyhow::anyhow!("API error {}: {title}", e.status_code())
        }
        None => {
            tracing::error!("request failed: {error:?}");
            error.into()
        }
    }
}
