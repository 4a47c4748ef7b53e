//! Request and result types for the fetch pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of media a fetch produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    /// Extension of the final container
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Audio => "mp3",
            Self::Video => "mp4",
        }
    }

    /// MIME type offered with the saved file
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Audio => "audio/mpeg",
            Self::Video => "video/mp4",
        }
    }
}

/// MP3 bitrate choices offered by the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioBitrate {
    #[default]
    Kbps128,
    Kbps192,
    Kbps256,
    Kbps320,
}

impl AudioBitrate {
    pub const ALL: [AudioBitrate; 4] = [
        AudioBitrate::Kbps128,
        AudioBitrate::Kbps192,
        AudioBitrate::Kbps256,
        AudioBitrate::Kbps320,
    ];

    pub fn kbps(&self) -> u32 {
        match self {
            Self::Kbps128 => 128,
            Self::Kbps192 => 192,
            Self::Kbps256 => 256,
            Self::Kbps320 => 320,
        }
    }

    /// Rate string handed to the transcode step
    pub fn transcode_rate(&self) -> String {
        format!("{}K", self.kbps())
    }

    /// Display label for the radio group
    pub fn label(&self) -> String {
        format!("{} kbps", self.kbps())
    }
}

/// Maximum video height choices offered by the form
///
/// A cap, not an exact resolution: the best stream at or below this height
/// is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionCap {
    #[default]
    P360,
    P720,
    P1080,
}

impl ResolutionCap {
    pub const ALL: [ResolutionCap; 3] = [
        ResolutionCap::P360,
        ResolutionCap::P720,
        ResolutionCap::P1080,
    ];

    pub fn max_height(&self) -> u32 {
        match self {
            Self::P360 => 360,
            Self::P720 => 720,
            Self::P1080 => 1080,
        }
    }

    /// Display label for the radio group
    pub fn label(&self) -> String {
        format!("{}p", self.max_height())
    }
}

/// What a fetch should produce
///
/// Exactly one quality selector is meaningful per request, chosen by the
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Audio(AudioBitrate),
    Video(ResolutionCap),
}

impl Target {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Audio(_) => MediaKind::Audio,
            Self::Video(_) => MediaKind::Video,
        }
    }
}

/// A single fetch request, consumed within one interaction
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    /// Explicit per-request output directory
    pub output_dir: PathBuf,
    pub target: Target,
}

/// Subset of the info JSON the external tool prints per downloaded item
#[derive(Debug, Clone, Deserialize)]
pub struct MediaInfo {
    pub title: String,
    #[serde(default)]
    pub ext: String,
    /// Path as named before any post-processing step runs
    #[serde(rename = "_filename", default)]
    pub pre_path: Option<PathBuf>,
}

/// Successful fetch outcome
#[derive(Debug, Clone)]
pub struct FetchedMedia {
    pub path: PathBuf,
    pub title: String,
    pub kind: MediaKind,
}

impl FetchedMedia {
    /// Basename suggested as the download filename
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
