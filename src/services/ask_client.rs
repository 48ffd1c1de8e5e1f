// src/services/ask_client.rs
use anyhow::{Context, Result, anyhow};
use reqwest::Client;

use crate::message::{AskRequest, AskResponse, ErrorResponse};

/// HTTP client for the `/api/ask` endpoint.
#[derive(Clone)]
pub struct AskClient {
    client: Client,
    base_url: String,
}

impl AskClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn ask(&self, request: &AskRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/api/ask", self.base_url))
            .json(request)
            .send()
            .await
            .context("ask request failed")?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_default();
            return Err(anyhow!("ask endpoint returned {}: {}", status, reason));
        }

        let body: AskResponse = response.json().await.context("malformed ask response")?;
        Ok(body.reply)
    }
}
