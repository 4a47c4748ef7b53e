//! Bitrate and resolution radio groups

use crate::fetcher::{AudioBitrate, ResolutionCap};
use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{column, radio, row, text};
use iced::Element;

/// Radio group for the MP3 bitrate
pub fn bitrate_selector(selected: AudioBitrate) -> Element<'static, Message> {
    let choices = AudioBitrate::ALL.iter().fold(row![].spacing(18), |r, option| {
        r.push(radio(
            option.label(),
            *option,
            Some(selected),
            Message::BitrateSelected,
        ))
    });

    column![
        text("MP3 quality")
            .size(13)
            .style(iced::theme::Text::Color(theme::TEXT_DIM)),
        choices,
    ]
    .spacing(8)
    .into()
}

/// Radio group for the maximum video height
pub fn resolution_selector(selected: ResolutionCap) -> Element<'static, Message> {
    let choices = ResolutionCap::ALL.iter().fold(row![].spacing(18), |r, option| {
        r.push(radio(
            option.label(),
            *option,
            Some(selected),
            Message::ResolutionSelected,
        ))
    });

    column![
        text("Video resolution (max)")
            .size(13)
            .style(iced::theme::Text::Color(theme::TEXT_DIM)),
        choices,
    ]
    .spacing(8)
    .into()
}
