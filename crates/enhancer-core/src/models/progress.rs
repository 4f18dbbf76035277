use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stage of an enhancement request as seen by the client orchestrator.
///
/// The stages are synthetic: the backend exposes no real progress channel,
/// so the orchestrator emits a fixed sequence around its single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStage {
    Uploading,
    Processing,
    Finalizing,
    Complete,
    Error,
}

/// A transient progress notification. Emitted to observers and dropped;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProcessingProgress {
    pub stage: ProgressStage,
    /// Percent complete, 0-100
    pub progress: u8,
    pub message: String,
}

impl ProcessingProgress {
    pub fn new(stage: ProgressStage, progress: u8, message: impl Into<String>) -> Self {
        Self {
            stage,
            progress,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_serialize_lowercase() {
        for (stage, name) in [
            (ProgressStage::Uploading, "\"uploading\""),
            (ProgressStage::Processing, "\"processing\""),
            (ProgressStage::Finalizing, "\"finalizing\""),
            (ProgressStage::Complete, "\"complete\""),
            (ProgressStage::Error, "\"error\""),
        ] {
            assert_eq!(serde_json::to_string(&stage).unwrap(), name);
        }
    }
}
