//! End-to-end fetch tests against a stub yt-dlp, no network involved.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tubegrab::fetcher::{AudioBitrate, FetchRequest, MediaFetcher, ResolutionCap, Target};
use tubegrab::utils::FetchError;

/// Stub tool mimicking one extract-and-download run: it honors the `-o`
/// template, writes the media file, and prints the info JSON. URLs
/// containing `bad-url` fail the way an unsupported URL does.
const STUB: &str = r#"#!/bin/sh
tmpl=""
prev=""
audio=no
url=""
for a in "$@"; do
  [ "$prev" = "-o" ] && tmpl="$a"
  [ "$a" = "-x" ] && audio=yes
  prev="$a"
  url="$a"
done
case "$url" in
  *bad-url*)
    echo "ERROR: Unsupported URL: $url" >&2
    exit 1
    ;;
esac
if [ "$audio" = yes ]; then pre_ext=webm; else pre_ext=mp4; fi
pre=$(printf '%s' "$tmpl" | sed -e 's/%(title)s/Test Video/' -e "s/%(ext)s/$pre_ext/")
if [ "$audio" = yes ]; then
  final="${pre%.webm}.mp3"
else
  final="$pre"
fi
printf 'media-bytes' > "$final"
printf '{"id":"stub","title":"Test Video","ext":"%s","_filename":"%s"}\n' "$pre_ext" "$pre"
"#;

fn write_stub(dir: &Path) -> PathBuf {
    let path = dir.join("yt-dlp-stub");
    fs::write(&path, STUB).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn audio_request(url: &str, output_dir: &Path) -> FetchRequest {
    FetchRequest {
        url: url.to_string(),
        output_dir: output_dir.to_path_buf(),
        target: Target::Audio(AudioBitrate::Kbps192),
    }
}

fn video_request(url: &str, output_dir: &Path) -> FetchRequest {
    FetchRequest {
        url: url.to_string(),
        output_dir: output_dir.to_path_buf(),
        target: Target::Video(ResolutionCap::P720),
    }
}

fn staging_left_behind(dir: &Path) -> bool {
    fs::read_dir(dir).unwrap().any(|entry| {
        entry
            .unwrap()
            .file_name()
            .to_string_lossy()
            .starts_with(".stage-")
    })
}

#[tokio::test]
async fn audio_fetch_writes_mp3_into_output_dir() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("downloads");
    let fetcher = MediaFetcher::with_binary(write_stub(tmp.path()));

    let media = fetcher
        .fetch_audio(&audio_request("https://youtu.be/VALID1", &out))
        .await
        .unwrap();

    assert_eq!(media.path, out.join("Test Video.mp3"));
    assert_eq!(media.title, "Test Video");
    assert!(media.path.is_file());
    assert!(fs::metadata(&media.path).unwrap().len() > 0);
    assert!(!staging_left_behind(&out));
}

#[tokio::test]
async fn video_fetch_reports_the_merged_mp4_verbatim() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("downloads");
    let fetcher = MediaFetcher::with_binary(write_stub(tmp.path()));

    let media = fetcher
        .fetch_video(&video_request("https://youtu.be/VALID1", &out))
        .await
        .unwrap();

    assert_eq!(media.path, out.join("Test Video.mp4"));
    assert!(media.path.is_file());
    assert!(!staging_left_behind(&out));
}

#[tokio::test]
async fn failure_is_terminal_and_leaves_no_partial_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("downloads");
    let fetcher = MediaFetcher::with_binary(write_stub(tmp.path()));
    let request = audio_request("https://example.com/bad-url", &out);

    for _ in 0..2 {
        // Same bad URL, same outcome; calling again must not panic
        let err = fetcher.fetch_audio(&request).await.unwrap_err();
        match err {
            FetchError::Extraction(message) => {
                assert!(!message.is_empty());
                assert!(message.contains("Unsupported URL"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // Output directory was created but holds nothing, staging included
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[tokio::test]
async fn repeated_fetch_overwrites_the_same_title() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("downloads");
    let fetcher = MediaFetcher::with_binary(write_stub(tmp.path()));
    let request = audio_request("https://youtu.be/VALID1", &out);

    // Last write wins; a title collision replaces the previous file
    let first = fetcher.fetch_audio(&request).await.unwrap();
    let second = fetcher.fetch_audio(&request).await.unwrap();

    assert_eq!(first.path, second.path);
    let mp3_count = fs::read_dir(&out)
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "mp3")
        })
        .count();
    assert_eq!(mp3_count, 1);
}

#[tokio::test]
async fn output_dir_is_created_when_absent_and_reused_when_present() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("nested").join("downloads");
    assert!(!out.exists());

    let fetcher = MediaFetcher::with_binary(write_stub(tmp.path()));
    fetcher
        .fetch_video(&video_request("https://youtu.be/VALID1", &out))
        .await
        .unwrap();
    assert!(out.is_dir());

    // Second run against the now-existing directory succeeds as well
    fetcher
        .fetch_video(&video_request("https://youtu.be/VALID1", &out))
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_binary_surfaces_as_an_error() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("downloads");
    let fetcher = MediaFetcher::with_binary(tmp.path().join("no-such-tool"));

    let err = fetcher
        .fetch_audio(&audio_request("https://youtu.be/VALID1", &out))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Io(_)));
}
