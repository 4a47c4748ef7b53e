//! URL input component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// One shared URL field with paste/clear actions and an inline warning row
///
/// Both action flows read from this field; any non-empty string is forwarded
/// to the external tool, which is the sole judge of URL validity.
pub fn url_input(value: &str, warning: Option<&str>) -> Element<'static, Message> {
    let field = text_input("Paste a video URL here...", value)
        .on_input(Message::UrlInputChanged)
        .padding(14)
        .width(Length::Fill)
        .style(if warning.is_some() {
            iced::theme::TextInput::Custom(Box::new(theme::InputWarningStyle))
        } else {
            iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
        });

    let input_row = row![
        field,
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    match warning {
        Some(message) => column![
            input_row,
            text(message.to_string())
                .size(14)
                .style(iced::theme::Text::Color(theme::WARNING)),
        ]
        .spacing(6)
        .into(),
        None => input_row.into(),
    }
}
