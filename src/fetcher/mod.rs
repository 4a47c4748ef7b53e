//! Fetch pipeline: request models, option presets, and the yt-dlp boundary

pub mod models;
pub mod options;
pub mod orchestrator;
pub mod ytdlp;

// Re-export for convenience
pub use models::{
    AudioBitrate, FetchRequest, FetchedMedia, MediaInfo, MediaKind, ResolutionCap, Target,
};
pub use orchestrator::MediaFetcher;
