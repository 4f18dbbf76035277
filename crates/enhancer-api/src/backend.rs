//! Outbound client for the enhancement backend.
//!
//! One `reqwest::Client` is built at startup and shared by all requests;
//! connection pooling plus TCP keep-alive stand in for the upstream
//! keep-alive hint. Every call is bounded by the configured cancellation
//! window and is never retried.

use std::time::Duration;

use anyhow::Context;
use enhancer_core::{AppError, Config};
use serde::Deserialize;

const TCP_KEEPALIVE_SECS: u64 = 60;

/// A validated upload ready to be forwarded to the backend.
#[derive(Debug, Clone)]
pub struct EnhanceUpload {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
    pub scale_factor: u32,
    pub model: String,
    pub face_enhance: String,
}

/// Success body of the backend's `/api/enhance` endpoint. Only the field
/// the proxy forwards is deserialized.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendEnhanceResponse {
    pub enhanced_image: String,
}

#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    enhance_url: String,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.backend_timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .tcp_keepalive(Duration::from_secs(TCP_KEEPALIVE_SECS))
            .build()
            .context("Failed to create HTTP client for enhancement backend")?;

        Ok(Self {
            client,
            enhance_url: config.backend_enhance_url(),
            timeout,
        })
    }

    /// Forward one upload to the backend and return its parsed response.
    ///
    /// The timer covers send and body read together. `tokio::time::timeout`
    /// polls the request future before checking the deadline, so a response
    /// that is ready in the same poll as expiry still wins; on expiry the
    /// dropped future aborts the in-flight call.
    pub async fn enhance(&self, upload: EnhanceUpload) -> Result<BackendEnhanceResponse, AppError> {
        let part = reqwest::multipart::Part::bytes(upload.data)
            .file_name(upload.filename)
            .mime_str(&upload.content_type)
            .map_err(|e| AppError::Internal(format!("Unforwardable content type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("scaleFactor", upload.scale_factor.to_string())
            .text("model", upload.model)
            .text("faceEnhance", upload.face_enhance);

        let request = self.client.post(&self.enhance_url).multipart(form);

        match tokio::time::timeout(self.timeout, send_and_read(request)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(format!(
                "backend did not respond within {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

async fn send_and_read(
    request: reqwest::RequestBuilder,
) -> Result<BackendEnhanceResponse, AppError> {
    let response = request.send().await.map_err(map_transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(AppError::Backend {
            status: status.as_u16(),
            message: backend_error_message(body, status.as_u16()),
        });
    }

    response
        .json::<BackendEnhanceResponse>()
        .await
        .map_err(|e| AppError::Internal(format!("Malformed backend response: {}", e)))
}

fn map_transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout(err.to_string())
    } else {
        AppError::Internal(format!("Backend request failed: {}", err))
    }
}

/// Extract a human-readable message from a backend error body. Non-JSON
/// bodies and bodies without a usable `error`/`detail` string downgrade to
/// a generic message instead of causing a secondary failure.
fn backend_error_message(body: Option<serde_json::Value>, status: u16) -> String {
    body.as_ref()
        .and_then(|value| value.get("error").or_else(|| value.get("detail")))
        .and_then(|field| field.as_str())
        .filter(|message| !message.is_empty())
        .map(|message| message.to_string())
        .unwrap_or_else(|| format!("Backend error: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_is_preferred() {
        let body = json!({"error": "bad model", "detail": "ignored"});
        assert_eq!(backend_error_message(Some(body), 500), "bad model");
    }

    #[test]
    fn detail_field_is_the_fallback() {
        let body = json!({"detail": "oom"});
        assert_eq!(backend_error_message(Some(body), 500), "oom");
    }

    #[test]
    fn unparseable_body_downgrades_to_generic_message() {
        assert_eq!(backend_error_message(None, 500), "Backend error: 500");
    }

    #[test]
    fn non_string_and_empty_fields_downgrade_to_generic_message() {
        assert_eq!(
            backend_error_message(Some(json!({"error": 42})), 502),
            "Backend error: 502"
        );
        assert_eq!(
            backend_error_message(Some(json!({"error": ""})), 503),
            "Backend error: 503"
        );
    }
}
