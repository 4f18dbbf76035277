//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use enhancer_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Enhancer API",
        version = "0.1.0",
        description = "Upload proxy for the image-enhancement backend. Accepts a multipart image upload, forwards it to the configured backend, and normalizes the response shape."
    ),
    paths(
        handlers::enhance::enhance_image,
        handlers::health::health_check,
    ),
    components(schemas(
        models::EnhanceResponse,
        models::ProcessingProgress,
        models::ProgressStage,
        models::UpscaleModel,
        error::ErrorResponse,
    )),
    tags(
        (name = "enhance", description = "Image enhancement proxy"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;
