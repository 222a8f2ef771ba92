//! Raw authenticated API request command.
//!
//! Generic escape hatch for the CRUD and analytics surface: issues one
//! bearer-authenticated call through the refresh-aware client and
//! prints the response.

use clap::Args;
use reqwest::Method;

use crewdesk_client::ApiClient;
use crewdesk_core::error::AppError;

use super::Context;

/// Arguments for the request command
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// HTTP method (GET, POST, PUT, DELETE, ...)
    pub method: String,

    /// Request path, relative to the configured base URL
    pub path: String,

    /// JSON body
    #[arg(short, long)]
    pub body: Option<String>,
}

/// Execute the request command
pub async fn execute(args: &RequestArgs, ctx: &Context) -> Result<(), AppError> {
    let method = args
        .method
        .to_uppercase()
        .parse::<Method>()
        .map_err(|_| AppError::validation(format!("Unknown HTTP method: '{}'", args.method)))?;
    let body = args
        .body
        .as_deref()
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()
        .map_err(|e| AppError::validation(format!("Body is not valid JSON: {e}")))?;

    let client = ApiClient::new(&ctx.config.api, ctx.vault());
    let response = client.request(method, &args.path, body).await?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::network(format!("Failed to read response body: {e}")))?;

    println!("{status}");
    if !text.is_empty() {
        // Pretty-print JSON bodies, pass anything else through.
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => println!("{}", serde_json::to_string_pretty(&value).unwrap_or(text)),
            Err(_) => println!("{text}"),
        }
    }
    Ok(())
}
