pub mod enhance;
pub mod progress;

pub use enhance::{parse_scale_factor, EnhanceOptions, EnhanceResponse, ProcessingResult, UpscaleModel};
pub use progress::{ProcessingProgress, ProgressStage};
