//! Fetch orchestration
//!
//! One tool invocation per request, two terminal outcomes. The tool writes
//! into a per-request staging directory inside the output directory; a
//! completed file is renamed to its final name in one step, and staging is
//! removed on every exit path, so a failed or interrupted run never leaves
//! a partial file at the reported path.

use crate::fetcher::models::{FetchRequest, FetchedMedia, MediaInfo, MediaKind};
use crate::fetcher::{options, ytdlp};
use crate::utils::error::FetchError;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::{info, warn};

static STAGE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Runs fetch requests against a resolved yt-dlp binary
#[derive(Debug, Clone)]
pub struct MediaFetcher {
    binary: PathBuf,
}

impl MediaFetcher {
    /// Locate yt-dlp and build a fetcher
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            binary: ytdlp::locate()?,
        })
    }

    /// Use a specific binary instead of searching for one
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Fetch the best audio stream and transcode it to MP3
    ///
    /// The transcode step changes the container after the tool names the
    /// file, so the reported filename has its extension rewritten to `.mp3`
    /// unconditionally; the returned path is the only valid one.
    pub async fn fetch_audio(&self, request: &FetchRequest) -> Result<FetchedMedia, FetchError> {
        debug_assert_eq!(request.target.kind(), MediaKind::Audio);
        self.run_request(request).await
    }

    /// Fetch the best height-capped video stream merged into an MP4 container
    ///
    /// The merge target is already MP4, so the reported filename is used
    /// verbatim.
    pub async fn fetch_video(&self, request: &FetchRequest) -> Result<FetchedMedia, FetchError> {
        debug_assert_eq!(request.target.kind(), MediaKind::Video);
        self.run_request(request).await
    }

    async fn run_request(&self, request: &FetchRequest) -> Result<FetchedMedia, FetchError> {
        let kind = request.target.kind();

        // Idempotent: reused without error when already present
        fs::create_dir_all(&request.output_dir).await?;
        let staging = make_staging_dir(&request.output_dir).await?;

        info!("Fetching {:?} from {}", kind, request.url);
        let args = options::build_args(request, &staging);

        let result = match ytdlp::run(&self.binary, &args).await {
            Ok(media_info) => self.finalize(request, &staging, &media_info).await,
            Err(err) => Err(err),
        };

        discard_staging(&staging).await;
        result
    }

    /// Move the completed file out of staging under its corrected name
    async fn finalize(
        &self,
        request: &FetchRequest,
        staging: &Path,
        media_info: &MediaInfo,
    ) -> Result<FetchedMedia, FetchError> {
        let kind = request.target.kind();

        let mut staged = match &media_info.pre_path {
            Some(path) => path.clone(),
            // Older tool builds omit the field; rebuild from the template parts
            None => staging.join(format!("{}.{}", media_info.title, media_info.ext)),
        };
        if kind == MediaKind::Audio {
            staged = mp3_name(&staged);
        }

        let file_name = staged.file_name().ok_or_else(|| {
            FetchError::Extraction(format!("unusable output filename for '{}'", media_info.title))
        })?;
        let final_path = request.output_dir.join(file_name);

        // Staging lives inside the output directory, so the rename is atomic.
        // An existing file with the same title is replaced: last write wins.
        fs::rename(&staged, &final_path).await?;
        info!("Saved {}", final_path.display());

        Ok(FetchedMedia {
            path: final_path,
            title: media_info.title.clone(),
            kind,
        })
    }
}

/// Rewrite the reported pre-processing filename to the `.mp3` the transcode
/// step actually produced (`.webm`, `.m4a`, and any other suffix alike)
fn mp3_name(pre_path: &Path) -> PathBuf {
    let mut path = pre_path.to_path_buf();
    path.set_extension("mp3");
    path
}

async fn make_staging_dir(output_dir: &Path) -> Result<PathBuf, FetchError> {
    let seq = STAGE_SEQ.fetch_add(1, Ordering::Relaxed);
    let staging = output_dir.join(format!(".stage-{}-{}", std::process::id(), seq));
    fs::create_dir_all(&staging).await?;
    Ok(staging)
}

async fn discard_staging(staging: &Path) {
    if let Err(err) = fs::remove_dir_all(staging).await {
        warn!(
            "Failed to remove staging dir {}: {}",
            staging.display(),
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mp3_name_replaces_known_suffixes() {
        assert_eq!(
            mp3_name(Path::new("downloads/Some Clip.webm")),
            Path::new("downloads/Some Clip.mp3")
        );
        assert_eq!(
            mp3_name(Path::new("downloads/Some Clip.m4a")),
            Path::new("downloads/Some Clip.mp3")
        );
    }

    #[test]
    fn test_mp3_name_keeps_dotted_stems() {
        assert_eq!(
            mp3_name(Path::new("downloads/Mix Vol. 2.webm")),
            Path::new("downloads/Mix Vol. 2.mp3")
        );
    }

    #[test]
    fn test_mp3_name_is_stable_on_mp3_input() {
        assert_eq!(
            mp3_name(Path::new("downloads/already.mp3")),
            Path::new("downloads/already.mp3")
        );
    }

    proptest! {
        #[test]
        fn prop_mp3_name_always_ends_in_mp3(
            stem in "[A-Za-z0-9 _-]{1,24}",
            ext in "(webm|m4a|opus|ogg|mp3|wav)",
        ) {
            let rewritten = mp3_name(&Path::new("downloads").join(format!("{stem}.{ext}")));
            prop_assert_eq!(rewritten.extension().unwrap(), "mp3");
            prop_assert_eq!(rewritten.file_stem().unwrap().to_string_lossy(), stem);
        }
    }
}
