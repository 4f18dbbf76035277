//! Enhancement orchestrator: one upload request, synthetic progress.

use enhancer_core::{
    EnhanceOptions, ProcessingProgress, ProcessingResult, ProgressObserver, ProgressStage,
};

use crate::ApiClient;

const ENHANCE_PATH: &str = "/api/enhance";

fn emit(
    observer: Option<&dyn ProgressObserver>,
    stage: ProgressStage,
    progress: u8,
    message: &str,
) {
    if let Some(observer) = observer {
        observer.on_progress(&ProcessingProgress::new(stage, progress, message));
    }
}

impl ApiClient {
    /// Enhance an image through the proxy.
    ///
    /// Performs exactly one `POST /api/enhance` and emits progress events in
    /// a fixed order around it: `uploading` (10%), `processing` (30%),
    /// `finalizing` (90%), `complete` (100%). The stages are cosmetic; the
    /// backend offers no real progress channel.
    ///
    /// Never returns an error to the caller: every failure resolves to a
    /// `ProcessingResult` with `success: false` after a single `error`
    /// stage event at 0% carrying the failure message.
    pub async fn enhance_image(
        &self,
        image: Vec<u8>,
        filename: &str,
        content_type: &str,
        options: EnhanceOptions,
        observer: Option<&dyn ProgressObserver>,
    ) -> ProcessingResult {
        let original_size = image.len() as u64;
        let scale_factor = options.scale_factor;

        match self
            .try_enhance(image, filename, content_type, &options, observer)
            .await
        {
            Ok(result) => result,
            Err(message) => {
                emit(observer, ProgressStage::Error, 0, &message);
                ProcessingResult::failure(message, original_size, scale_factor)
            }
        }
    }

    async fn try_enhance(
        &self,
        image: Vec<u8>,
        filename: &str,
        content_type: &str,
        options: &EnhanceOptions,
        observer: Option<&dyn ProgressObserver>,
    ) -> Result<ProcessingResult, String> {
        emit(observer, ProgressStage::Uploading, 10, "Uploading image...");

        let part = reqwest::multipart::Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| format!("Invalid content type: {}", e))?;

        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("scaleFactor", options.scale_factor.to_string())
            .text("model", options.model.as_str())
            .text(
                "faceEnhance",
                if options.face_enhance { "true" } else { "false" },
            );

        emit(
            observer,
            ProgressStage::Processing,
            30,
            "AI is enhancing your image...",
        );

        let response = self
            .client()
            .post(self.build_url(ENHANCE_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(read_error_message(response).await);
        }

        emit(
            observer,
            ProgressStage::Finalizing,
            90,
            "Finalizing enhancement...",
        );

        let result: ProcessingResult = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        emit(
            observer,
            ProgressStage::Complete,
            100,
            "Enhancement complete!",
        );

        Ok(result)
    }
}

/// Pull the proxy's `error` field out of a failure body, falling back to a
/// generic message when the body is not usable JSON.
async fn read_error_message(response: reqwest::Response) -> String {
    response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "Failed to process image".to_string())
}
