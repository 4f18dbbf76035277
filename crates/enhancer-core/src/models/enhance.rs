use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default scale factor when the form field is absent or unparseable.
pub const DEFAULT_SCALE_FACTOR: u32 = 4;

/// Upscaling model selection forwarded to the enhancement backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum UpscaleModel {
    /// General-purpose Real-ESRGAN x4plus model
    #[default]
    #[serde(rename = "x4plus")]
    X4plus,
    /// Anime-optimized 6-block model
    #[serde(rename = "anime6B")]
    Anime6B,
}

impl UpscaleModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpscaleModel::X4plus => "x4plus",
            UpscaleModel::Anime6B => "anime6B",
        }
    }
}

impl fmt::Display for UpscaleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpscaleModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x4plus" => Ok(UpscaleModel::X4plus),
            "anime6B" => Ok(UpscaleModel::Anime6B),
            other => Err(format!("Unknown model: {}", other)),
        }
    }
}

/// Parse a scale factor form field. Absent, unparseable, or zero values
/// fall back to the default of 4; other parseable but unsupported values
/// (e.g. 3) are kept as-is and left to the backend to reject.
pub fn parse_scale_factor(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&v| v != 0)
        .unwrap_or(DEFAULT_SCALE_FACTOR)
}

/// Non-file inputs of an enhancement request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceOptions {
    /// Output resolution multiplier (2, 4, or 6)
    pub scale_factor: u32,
    pub model: UpscaleModel,
    /// Run the secondary face-enhancement model on the backend
    pub face_enhance: bool,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            model: UpscaleModel::default(),
            face_enhance: false,
        }
    }
}

/// Success response of `POST /api/enhance`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub success: bool,
    /// Byte size of the uploaded file
    pub original_size: u64,
    /// Enhanced image as a data-URI string
    pub enhanced_image: String,
    pub scale_factor: u32,
    /// Completion timestamp taken when the backend response was received
    pub processed_at: DateTime<Utc>,
}

impl EnhanceResponse {
    pub fn new(original_size: u64, enhanced_image: String, scale_factor: u32) -> Self {
        Self {
            success: true,
            original_size,
            enhanced_image,
            scale_factor,
            processed_at: Utc::now(),
        }
    }
}

/// Outcome of one orchestrated enhancement request. Produced once per
/// request and immutable after creation; failures resolve to
/// `success: false` with a populated `error`, never a panic or an `Err`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub success: bool,
    pub original_size: u64,
    pub enhanced_image: String,
    pub scale_factor: u32,
    pub processed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingResult {
    /// Best-effort failure result: echoes the request metadata the caller
    /// already knows and stamps the current time.
    pub fn failure(message: impl Into<String>, original_size: u64, scale_factor: u32) -> Self {
        Self {
            success: false,
            original_size,
            enhanced_image: String::new(),
            scale_factor,
            processed_at: Utc::now(),
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_roundtrips_wire_names() {
        assert_eq!(UpscaleModel::X4plus.as_str(), "x4plus");
        assert_eq!(UpscaleModel::Anime6B.as_str(), "anime6B");
        assert_eq!("x4plus".parse::<UpscaleModel>().unwrap(), UpscaleModel::X4plus);
        assert_eq!("anime6B".parse::<UpscaleModel>().unwrap(), UpscaleModel::Anime6B);
        assert!("esrgan".parse::<UpscaleModel>().is_err());
    }

    #[test]
    fn model_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&UpscaleModel::Anime6B).unwrap(),
            "\"anime6B\""
        );
    }

    #[test]
    fn scale_factor_defaults_on_missing_or_junk() {
        assert_eq!(parse_scale_factor(None), 4);
        assert_eq!(parse_scale_factor(Some("")), 4);
        assert_eq!(parse_scale_factor(Some("abc")), 4);
        assert_eq!(parse_scale_factor(Some("0")), 4);
        assert_eq!(parse_scale_factor(Some("2")), 2);
        assert_eq!(parse_scale_factor(Some("6")), 6);
        // Unsupported but parseable values pass through for the backend to reject
        assert_eq!(parse_scale_factor(Some("3")), 3);
    }

    #[test]
    fn enhance_response_serializes_camel_case() {
        let resp = EnhanceResponse::new(1024, "data:image/jpeg;base64,AA==".to_string(), 4);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["originalSize"], 1024);
        assert_eq!(json["enhancedImage"], "data:image/jpeg;base64,AA==");
        assert_eq!(json["scaleFactor"], 4);
        assert!(json["processedAt"].is_string());
    }

    #[test]
    fn failure_result_carries_error_and_metadata() {
        let result = ProcessingResult::failure("backend down", 2048, 6);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("backend down"));
        assert_eq!(result.original_size, 2048);
        assert_eq!(result.scale_factor, 6);
        assert!(result.enhanced_image.is_empty());
    }
}
