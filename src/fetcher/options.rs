//! Argument presets for the external tool
//!
//! Everything nontrivial (stream selection, merging, transcoding) happens
//! inside yt-dlp; this module only describes what we want. Two fixed
//! presets exist: best audio transcoded to MP3 at a chosen bitrate, and
//! best MP4 video under a height cap merged with M4A audio.

use crate::fetcher::models::{AudioBitrate, FetchRequest, ResolutionCap, Target};
use std::path::Path;

/// Output template: source title as the filename stem, tool-chosen extension
pub fn output_template(dir: &Path) -> String {
    format!("{}/%(title)s.%(ext)s", dir.display())
}

/// Full argument vector for one extract-and-download run writing under `dir`
///
/// `-j --no-simulate` makes the tool print the item's info JSON while still
/// downloading, which is where the output filename is derived from.
pub fn build_args(request: &FetchRequest, dir: &Path) -> Vec<String> {
    let mut args = match request.target {
        Target::Audio(bitrate) => audio_args(bitrate),
        Target::Video(cap) => video_args(cap),
    };
    args.push("-o".to_string());
    args.push(output_template(dir));
    args.push("-j".to_string());
    args.push("--no-simulate".to_string());
    args.push("--no-warnings".to_string());
    args.push(request.url.clone());
    args
}

/// Best available audio-only stream, transcoded to MP3 after download
fn audio_args(bitrate: AudioBitrate) -> Vec<String> {
    vec![
        "-f".to_string(),
        "bestaudio/best".to_string(),
        "-x".to_string(),
        "--audio-format".to_string(),
        "mp3".to_string(),
        "--audio-quality".to_string(),
        bitrate.transcode_rate(),
    ]
}

/// Best MP4 video at or below the height cap joined with the best M4A audio,
/// falling back to the best MP4-only stream when that pairing is unavailable
fn video_args(cap: ResolutionCap) -> Vec<String> {
    vec![
        "-f".to_string(),
        format!(
            "bestvideo[height<={}][ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]",
            cap.max_height()
        ),
        "--merge-output-format".to_string(),
        "mp4".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request(target: Target) -> FetchRequest {
        FetchRequest {
            url: "https://youtu.be/VALID1".to_string(),
            output_dir: PathBuf::from("downloads"),
            target,
        }
    }

    #[test]
    fn test_output_template_keeps_tool_placeholders() {
        let template = output_template(Path::new("downloads/.stage-1-0"));
        assert_eq!(template, "downloads/.stage-1-0/%(title)s.%(ext)s");
    }

    #[test]
    fn test_audio_args_request_mp3_transcode() {
        let args = build_args(
            &request(Target::Audio(AudioBitrate::Kbps192)),
            Path::new("work"),
        );
        assert_eq!(
            args,
            vec![
                "-f",
                "bestaudio/best",
                "-x",
                "--audio-format",
                "mp3",
                "--audio-quality",
                "192K",
                "-o",
                "work/%(title)s.%(ext)s",
                "-j",
                "--no-simulate",
                "--no-warnings",
                "https://youtu.be/VALID1",
            ]
        );
    }

    #[test]
    fn test_every_bitrate_renders_its_rate() {
        for bitrate in AudioBitrate::ALL {
            let args = build_args(&request(Target::Audio(bitrate)), Path::new("work"));
            let rate_pos = args.iter().position(|a| a == "--audio-quality").unwrap();
            assert_eq!(args[rate_pos + 1], format!("{}K", bitrate.kbps()));
        }
    }

    #[test]
    fn test_video_args_cap_height_and_merge() {
        let args = build_args(
            &request(Target::Video(ResolutionCap::P720)),
            Path::new("work"),
        );
        assert_eq!(
            args,
            vec![
                "-f",
                "bestvideo[height<=720][ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]",
                "--merge-output-format",
                "mp4",
                "-o",
                "work/%(title)s.%(ext)s",
                "-j",
                "--no-simulate",
                "--no-warnings",
                "https://youtu.be/VALID1",
            ]
        );
    }

    #[test]
    fn test_every_cap_appears_in_the_format_expression() {
        for cap in ResolutionCap::ALL {
            let args = build_args(&request(Target::Video(cap)), Path::new("work"));
            assert!(args[1].contains(&format!("height<={}", cap.max_height())));
        }
    }

    #[test]
    fn test_url_is_always_the_final_argument() {
        for target in [
            Target::Audio(AudioBitrate::Kbps128),
            Target::Video(ResolutionCap::P1080),
        ] {
            let args = build_args(&request(target), Path::new("work"));
            assert_eq!(args.last().unwrap(), "https://youtu.be/VALID1");
        }
    }
}
