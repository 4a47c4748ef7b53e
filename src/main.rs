//! TubeGrab - grab a media URL as MP3 audio or MP4 video
//!
//! A small desktop form around an external yt-dlp binary: paste a URL, pick
//! an MP3 bitrate or a resolution cap, and save the result. Stream
//! selection, merging, and transcoding all happen inside the tool.

use anyhow::Result;
use iced::Application;
use tubegrab::fetcher::ytdlp;
use tubegrab::gui::TubeGrabApp;
use tubegrab::utils::AppSettings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Missing yt-dlp is only a warning at startup; each request surfaces
    // its own error if the tool is still absent when triggered
    if ytdlp::locate().is_err() {
        eprintln!("WARNING: yt-dlp not found");
        eprintln!("The app will run, but fetching will fail.");
        eprintln!("Please install yt-dlp:");
        eprintln!("  pip install yt-dlp");
        eprintln!("  or: brew install yt-dlp");
        eprintln!("  or visit: https://github.com/yt-dlp/yt-dlp");
    }

    TubeGrabApp::run(iced::Settings {
        flags: AppSettings::default(),
        window: iced::window::Settings {
            size: iced::Size::new(560.0, 780.0),
            min_size: Some(iced::Size::new(480.0, 620.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..Default::default()
    })?;

    Ok(())
}
