//! Main form layout

use crate::fetcher::{AudioBitrate, FetchedMedia, MediaKind, ResolutionCap};
use crate::gui::app::{Message, Notice};
use crate::gui::components::{bitrate_selector, notice_banner, resolution_selector, url_input};
use crate::gui::theme;
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

/// Assemble the whole form
#[allow(clippy::too_many_arguments)]
pub fn main_view(
    url_value: &str,
    url_warning: Option<&str>,
    bitrate: AudioBitrate,
    resolution: ResolutionCap,
    download_dir: String,
    busy: Option<MediaKind>,
    notice: &Notice,
    audio_result: Option<&FetchedMedia>,
    video_result: Option<&FetchedMedia>,
) -> Element<'static, Message> {
    let header = column![
        text("TubeGrab")
            .size(28)
            .style(iced::theme::Text::Color(theme::TEXT)),
        text("Grab a video URL as MP3 audio or MP4 video")
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_DIM)),
    ]
    .spacing(4);

    let dir_row = row![
        text("Save to")
            .size(13)
            .style(iced::theme::Text::Color(theme::TEXT_DIM)),
        text(download_dir)
            .size(13)
            .style(iced::theme::Text::Color(theme::TEXT)),
        Space::with_width(Length::Fill),
        button(text("Browse...").size(13))
            .on_press(Message::BrowseDownloadDir)
            .padding([6, 10])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let mut form = Column::new()
        .spacing(20)
        .push(header)
        .push(url_input(url_value, url_warning))
        .push(dir_row);

    if let Some(banner) = notice_banner(notice) {
        form = form.push(banner);
    }

    form = form
        .push(flow_section(
            bitrate_selector(bitrate),
            "Download Audio Mp3",
            MediaKind::Audio,
            busy,
            audio_result,
        ))
        .push(flow_section(
            resolution_selector(resolution),
            "Download Video Mp4",
            MediaKind::Video,
            busy,
            video_result,
        ));

    let card = container(form)
        .padding(28)
        .max_width(640)
        .style(iced::theme::Container::Custom(Box::new(theme::CardContainer)));

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .padding(24)
        .style(iced::theme::Container::Custom(Box::new(
            theme::BackdropContainer,
        )))
        .into()
}

/// One action flow: quality selector, trigger button, and the latest result
fn flow_section(
    selector: Element<'static, Message>,
    label: &str,
    kind: MediaKind,
    busy: Option<MediaKind>,
    result: Option<&FetchedMedia>,
) -> Element<'static, Message> {
    let caption = if busy == Some(kind) {
        match kind {
            MediaKind::Audio => "Downloading and converting...",
            MediaKind::Video => "Downloading video...",
        }
    } else {
        label
    };

    // One request in flight at a time; both triggers are held while busy
    let trigger = button(text(caption.to_string()).size(15))
        .on_press_maybe(if busy.is_none() {
            Some(Message::FetchPressed(kind))
        } else {
            None
        })
        .padding([12, 24])
        .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    let mut section = Column::new().spacing(12).push(selector).push(trigger);

    if let Some(media) = result {
        section = section.push(result_row(media));
    }

    section.into()
}

/// Save/reveal affordances for a finished fetch
fn result_row(media: &FetchedMedia) -> Element<'static, Message> {
    let kind = media.kind;
    let save_label = match kind {
        MediaKind::Audio => "Save MP3...",
        MediaKind::Video => "Save MP4...",
    };

    row![
        text(media.file_name())
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT)),
        Space::with_width(Length::Fill),
        button(text(save_label).size(13))
            .on_press(Message::SaveCopyPressed(kind))
            .padding([8, 14])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        button(text("Show in folder").size(13))
            .on_press(Message::RevealPressed(kind))
            .padding([8, 14])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .into()
}
