//! Application configuration

use crate::fetcher::{AudioBitrate, ResolutionCap};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings
///
/// The download directory is handed to every fetch request explicitly; there
/// is no process-global output path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Directory final files are written to
    pub download_dir: PathBuf,

    /// Pre-selected MP3 bitrate
    pub bitrate: AudioBitrate,

    /// Pre-selected resolution cap
    pub resolution: ResolutionCap,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("downloads"),
            bitrate: AudioBitrate::default(),
            resolution: ResolutionCap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.download_dir, PathBuf::from("downloads"));
        assert_eq!(settings.bitrate.kbps(), 128);
        assert_eq!(settings.resolution.max_height(), 360);
    }
}
