//! Locating and invoking the external yt-dlp binary
//!
//! The tool owns all network protocol handling, stream selection, and
//! (for audio) the subprocess-based transcode. This module runs it once
//! per request and reads back the info JSON it prints.

use crate::fetcher::models::MediaInfo;
use crate::utils::error::FetchError;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, error, info};

/// Find the yt-dlp binary
///
/// Search order:
/// 1. System PATH
/// 2. Common installation paths (Homebrew, system dirs, pip user installs)
pub fn locate() -> Result<PathBuf, FetchError> {
    if let Ok(path) = which::which("yt-dlp") {
        info!("Using yt-dlp from PATH: {}", path.display());
        return Ok(path);
    }

    for candidate in common_paths() {
        if candidate.is_file() {
            info!("Using yt-dlp at: {}", candidate.display());
            return Ok(candidate);
        }
    }

    error!("yt-dlp not found in PATH or common install locations");
    Err(FetchError::YtDlpNotFound)
}

fn common_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("/opt/homebrew/bin/yt-dlp"),
        PathBuf::from("/usr/local/bin/yt-dlp"),
        PathBuf::from("/usr/bin/yt-dlp"),
    ];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".local").join("bin").join("yt-dlp"));
    }
    paths
}

/// Run one extract-and-download invocation and parse the info JSON it prints
///
/// Blocks until the tool finishes: no timeout, no retry. A non-zero exit is
/// reduced to a single opaque error message taken from stderr.
pub async fn run(binary: &Path, args: &[String]) -> Result<MediaInfo, FetchError> {
    debug!("Invoking {} ({} args)", binary.display(), args.len());

    let output = Command::new(binary).args(args).output().await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = stderr.trim();
        let message = if message.is_empty() {
            format!("yt-dlp exited with {}", output.status)
        } else {
            message.to_string()
        };
        error!("yt-dlp failed: {}", message);
        return Err(FetchError::Extraction(message));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    // A playlist URL makes the tool print one line per entry; the first
    // describes the item we report back
    let line = stdout
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| FetchError::Extraction("yt-dlp produced no metadata".to_string()))?;

    let info: MediaInfo = serde_json::from_str(line)?;
    debug!("Tool reported '{}' ({})", info.title, info.ext);
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate() {
        let result = locate();
        println!("yt-dlp found at: {:?}", result.as_ref().map(|p| p.display().to_string()));
        // Don't assert - yt-dlp might not be installed in CI
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_maps_to_extraction_error() {
        let args = vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()];
        let err = run(Path::new("/bin/sh"), &args).await.unwrap_err();
        match err {
            FetchError::Extraction(message) => assert!(message.contains("boom")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_info_json_parsed_from_first_line() {
        let script = r#"printf '{"title":"Clip","ext":"mp4","_filename":"downloads/Clip.mp4"}\n'"#;
        let args = vec!["-c".to_string(), script.to_string()];
        let info = run(Path::new("/bin/sh"), &args).await.unwrap();
        assert_eq!(info.title, "Clip");
        assert_eq!(info.ext, "mp4");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_empty_output_is_an_error() {
        let args = vec!["-c".to_string(), "true".to_string()];
        let err = run(Path::new("/bin/sh"), &args).await.unwrap_err();
        assert!(matches!(err, FetchError::Extraction(_)));
    }
}
