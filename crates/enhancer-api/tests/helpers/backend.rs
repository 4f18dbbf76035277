//! Mock enhancement backend: a throwaway axum router on an ephemeral port
//! with a hit counter, so tests can assert the proxy's forwarding and
//! single-flight behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::Multipart, http::StatusCode, response::IntoResponse, routing::post, Json, Router};

/// How the mock backend answers `POST /api/enhance`.
#[derive(Clone)]
pub enum Behavior {
    /// 200 with `{"success": true, "enhancedImage": ...}`
    Success { enhanced_image: String },
    /// Arbitrary status with a JSON body
    ErrorJson { status: u16, body: serde_json::Value },
    /// Arbitrary status with a non-JSON body
    ErrorText { status: u16, body: String },
    /// Sleep, then answer success
    Slow { delay: Duration, enhanced_image: String },
}

pub struct MockBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockBackend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn spawn(behavior: Behavior) -> MockBackend {
    let hits = Arc::new(AtomicUsize::new(0));

    let handler = {
        let hits = hits.clone();
        move |mut multipart: Multipart| {
            let behavior = behavior.clone();
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                // Drain the forwarded form so the connection is not reset mid-body
                while let Ok(Some(field)) = multipart.next_field().await {
                    let _ = field.bytes().await;
                }

                match behavior {
                    Behavior::Success { enhanced_image } => Json(serde_json::json!({
                        "success": true,
                        "enhancedImage": enhanced_image,
                    }))
                    .into_response(),
                    Behavior::ErrorJson { status, body } => (
                        StatusCode::from_u16(status).expect("valid status"),
                        Json(body),
                    )
                        .into_response(),
                    Behavior::ErrorText { status, body } => {
                        (StatusCode::from_u16(status).expect("valid status"), body).into_response()
                    }
                    Behavior::Slow {
                        delay,
                        enhanced_image,
                    } => {
                        tokio::time::sleep(delay).await;
                        Json(serde_json::json!({
                            "success": true,
                            "enhancedImage": enhanced_image,
                        }))
                        .into_response()
                    }
                }
            }
        }
    };

    let router = Router::new().route("/api/enhance", post(handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock backend");
    });

    MockBackend {
        base_url: format!("http://{}", addr),
        hits,
    }
}
