//! Error handling for TubeGrab

use thiserror::Error;

/// Errors surfaced by the fetch pipeline
///
/// The GUI reduces any of these to a single inline message; no retry is
/// attempted and no distinction is made between transient and permanent
/// failures.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to fetch media: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse yt-dlp output: {0}")]
    Parse(#[from] serde_json::Error),
}
