use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use enhancer_core::models::parse_scale_factor;
use enhancer_core::{AppError, EnhanceResponse};

use crate::backend::EnhanceUpload;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::validation::{validate_content_type, validate_file_size, MISSING_IMAGE_MESSAGE};

const DEFAULT_MODEL: &str = "x4plus";
const DEFAULT_FACE_ENHANCE: &str = "false";

/// Raw multipart fields before validation. `model` and `faceEnhance` are
/// forwarded as strings so the backend stays the authority on what it
/// accepts.
#[derive(Debug, Default)]
struct EnhanceForm {
    image: Option<ImageField>,
    scale_factor: Option<String>,
    model: Option<String>,
    face_enhance: Option<String>,
}

#[derive(Debug)]
struct ImageField {
    data: Vec<u8>,
    filename: String,
    content_type: String,
}

/// Enhance image handler
///
/// Validates the uploaded image, forwards it to the enhancement backend,
/// and normalizes the backend's response into the API's response shape.
///
/// # Errors
/// - `AppError::InvalidInput` - Missing image field or non-image type
/// - `AppError::PayloadTooLarge` - File exceeds the size limit
/// - `AppError::Timeout` - Backend did not answer within the window
/// - `AppError::Backend` - Backend reported a failure (status mirrored)
/// - `AppError::Internal` - Network failure or malformed backend body
#[utoipa::path(
    post,
    path = "/api/enhance",
    tag = "enhance",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image enhanced successfully", body = EnhanceResponse),
        (status = 400, description = "Invalid upload", body = ErrorResponse),
        (status = 408, description = "Backend timeout", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "enhance_image"))]
pub async fn enhance_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EnhanceResponse>, HttpAppError> {
    let form = extract_enhance_form(multipart, state.config.max_image_size_bytes).await?;

    let image = form
        .image
        .ok_or_else(|| AppError::InvalidInput(MISSING_IMAGE_MESSAGE.to_string()))?;
    validate_content_type(&image.content_type)?;
    validate_file_size(image.data.len(), state.config.max_image_size_bytes)?;

    let original_size = image.data.len() as u64;
    let scale_factor = parse_scale_factor(form.scale_factor.as_deref());

    let upload = EnhanceUpload {
        data: image.data,
        filename: image.filename,
        content_type: image.content_type,
        scale_factor,
        model: form.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        face_enhance: form
            .face_enhance
            .unwrap_or_else(|| DEFAULT_FACE_ENHANCE.to_string()),
    };

    let backend_response = state.backend.enhance(upload).await?;

    tracing::info!(original_size, scale_factor, "Image enhanced");

    Ok(Json(EnhanceResponse::new(
        original_size,
        backend_response.enhanced_image,
        scale_factor,
    )))
}

/// Read the multipart fields the contract knows about; unknown fields are
/// ignored. The image field is read in chunks and abandoned once it passes
/// `max_image_bytes`, so over-limit uploads fail the size check with its
/// own message instead of tripping the transport body limit mid-stream.
async fn extract_enhance_form(
    mut multipart: Multipart,
    max_image_bytes: usize,
) -> Result<EnhanceForm, AppError> {
    let mut form = EnhanceForm::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "image" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "upload".to_string());
                // Missing declarations fail the image/ check downstream
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_default();

                let mut data = Vec::new();
                let mut over_limit = false;
                while let Some(chunk) = field.chunk().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })? {
                    data.extend_from_slice(&chunk);
                    if data.len() > max_image_bytes {
                        over_limit = true;
                        break;
                    }
                }

                form.image = Some(ImageField {
                    data,
                    filename,
                    content_type,
                });

                // data.len() > max now, so the size check rejects this
                // upload; the remaining fields are irrelevant
                if over_limit {
                    break;
                }
            }
            "scaleFactor" => form.scale_factor = read_text_field(field).await?,
            "model" => form.model = read_text_field(field).await?,
            "faceEnhance" => form.face_enhance = read_text_field(field).await?,
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text_field(field: Field<'_>) -> Result<Option<String>, AppError> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?;
    Ok(Some(text))
}
