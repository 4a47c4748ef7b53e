//! Main GUI application

use crate::fetcher::{
    AudioBitrate, FetchRequest, FetchedMedia, MediaFetcher, MediaKind, ResolutionCap, Target,
};
use crate::gui::clipboard;
use crate::gui::views::main_view;
use crate::utils::config::AppSettings;
use iced::{executor, Application, Command, Element, Theme};
use tracing::{info, warn};

/// Main application state
pub struct TubeGrabApp {
    settings: AppSettings,

    // UI state
    url_input: String,
    url_warning: Option<String>,
    notice: Notice,

    /// Which flow is currently running, if any
    in_flight: Option<MediaKind>,

    // Latest finished fetch per flow
    last_audio: Option<FetchedMedia>,
    last_video: Option<FetchedMedia>,
}

/// Inline status shown inside the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notice {
    #[default]
    None,
    Busy(String),
    Success(String),
    Warning(String),
    Error(String),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,
    BitrateSelected(AudioBitrate),
    ResolutionSelected(ResolutionCap),
    BrowseDownloadDir,

    // Fetch events
    FetchPressed(MediaKind),
    FetchCompleted(MediaKind, Result<FetchedMedia, String>),

    // Result affordances
    SaveCopyPressed(MediaKind),
    RevealPressed(MediaKind),
}

impl Application for TubeGrabApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(flags: AppSettings) -> (Self, Command<Message>) {
        let app = Self {
            url_input: String::new(),
            url_warning: None,
            notice: Notice::None,
            in_flight: None,
            last_audio: None,
            last_video: None,
            settings: flags,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("TubeGrab - Audio and Video Grabber")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                self.url_warning = None; // Clear warning when user types
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::read_text() {
                    Ok(content) => {
                        self.url_input = content.trim().to_string();
                        self.url_warning = None;
                    }
                    Err(e) => {
                        self.notice = Notice::Error(format!("Clipboard unavailable: {}", e));
                    }
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                self.url_warning = None;
                Command::none()
            }

            Message::BitrateSelected(bitrate) => {
                self.settings.bitrate = bitrate;
                Command::none()
            }

            Message::ResolutionSelected(resolution) => {
                self.settings.resolution = resolution;
                Command::none()
            }

            Message::BrowseDownloadDir => {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_directory(&self.settings.download_dir)
                    .pick_folder()
                {
                    self.settings.download_dir = dir;
                }
                Command::none()
            }

            Message::FetchPressed(kind) => self.start_fetch(kind),

            Message::FetchCompleted(kind, result) => {
                self.in_flight = None;
                self.finish_fetch(kind, result);
                Command::none()
            }

            Message::SaveCopyPressed(kind) => {
                self.save_copy(kind);
                Command::none()
            }

            Message::RevealPressed(kind) => {
                self.reveal(kind);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(
            &self.url_input,
            self.url_warning.as_deref(),
            self.settings.bitrate,
            self.settings.resolution,
            self.settings.download_dir.display().to_string(),
            self.in_flight,
            &self.notice,
            self.last_audio.as_ref(),
            self.last_video.as_ref(),
        )
    }
}

impl TubeGrabApp {
    /// Kick off one fetch; the empty-URL case is caught here, before any
    /// external call is made
    fn start_fetch(&mut self, kind: MediaKind) -> Command<Message> {
        let Some(url) = normalized_url(&self.url_input) else {
            self.url_warning = Some("Please enter a video URL.".to_string());
            self.notice = Notice::Warning("Please enter a video URL.".to_string());
            return Command::none();
        };

        if self.in_flight.is_some() {
            return Command::none();
        }

        self.in_flight = Some(kind);
        self.notice = Notice::Busy(
            match kind {
                MediaKind::Audio => "Downloading and converting...",
                MediaKind::Video => "Downloading video...",
            }
            .to_string(),
        );

        let target = match kind {
            MediaKind::Audio => Target::Audio(self.settings.bitrate),
            MediaKind::Video => Target::Video(self.settings.resolution),
        };
        let request = FetchRequest {
            url,
            output_dir: self.settings.download_dir.clone(),
            target,
        };

        info!("Starting {:?} fetch", kind);
        Command::perform(
            async move {
                let fetcher = MediaFetcher::new()?;
                match kind {
                    MediaKind::Audio => fetcher.fetch_audio(&request).await,
                    MediaKind::Video => fetcher.fetch_video(&request).await,
                }
            },
            move |result| Message::FetchCompleted(kind, result.map_err(|e| e.to_string())),
        )
    }

    fn finish_fetch(&mut self, kind: MediaKind, result: Result<FetchedMedia, String>) {
        match result {
            Ok(media) => {
                self.notice = Notice::Success(
                    match kind {
                        MediaKind::Audio => "Conversion complete!",
                        MediaKind::Video => "Download complete!",
                    }
                    .to_string(),
                );
                match kind {
                    MediaKind::Audio => self.last_audio = Some(media),
                    MediaKind::Video => self.last_video = Some(media),
                }
            }
            Err(message) => {
                warn!("Fetch failed: {}", message);
                self.notice = Notice::Error(message);
            }
        }
    }

    fn fetched(&self, kind: MediaKind) -> Option<FetchedMedia> {
        match kind {
            MediaKind::Audio => self.last_audio.clone(),
            MediaKind::Video => self.last_video.clone(),
        }
    }

    /// Offer the finished file as a download: the whole file is read into
    /// memory and written to the chosen destination
    fn save_copy(&mut self, kind: MediaKind) {
        let Some(media) = self.fetched(kind) else {
            return;
        };

        let Some(dest) = rfd::FileDialog::new()
            .set_file_name(media.file_name())
            .add_filter(kind.mime(), &[kind.extension()])
            .save_file()
        else {
            return;
        };

        match std::fs::read(&media.path).and_then(|bytes| std::fs::write(&dest, bytes)) {
            Ok(()) => self.notice = Notice::Success(format!("Saved {}", dest.display())),
            Err(e) => self.notice = Notice::Error(format!("Could not save copy: {}", e)),
        }
    }

    fn reveal(&mut self, kind: MediaKind) {
        let Some(media) = self.fetched(kind) else {
            return;
        };

        let target = media
            .path
            .parent()
            .map(|dir| dir.to_path_buf())
            .unwrap_or_else(|| media.path.clone());
        if let Err(e) = open::that(&target) {
            self.notice = Notice::Error(format!("Could not open folder: {}", e));
        }
    }
}

/// Trimmed URL, or None when the field is effectively empty
fn normalized_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_rejected_before_any_call() {
        assert_eq!(normalized_url(""), None);
        assert_eq!(normalized_url("   "), None);
        assert_eq!(normalized_url("\t\n"), None);
    }

    #[test]
    fn test_nonempty_url_is_forwarded_trimmed() {
        // No shape validation happens here; the external tool decides
        assert_eq!(
            normalized_url("  https://youtu.be/VALID1  "),
            Some("https://youtu.be/VALID1".to_string())
        );
        assert_eq!(
            normalized_url("not-a-real-video-url"),
            Some("not-a-real-video-url".to_string())
        );
    }

    #[test]
    fn test_default_notice_is_silent() {
        assert_eq!(Notice::default(), Notice::None);
    }
}
