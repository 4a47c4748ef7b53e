//! Inline status banner

use crate::gui::app::{Message, Notice};
use crate::gui::theme;
use iced::widget::{container, text};
use iced::{Element, Length};

/// Render the current notice as a tinted banner, if there is one
pub fn notice_banner(notice: &Notice) -> Option<Element<'static, Message>> {
    let (style, message) = match notice {
        Notice::None => return None,
        Notice::Busy(message) => (theme::NoticeContainer::Info, message),
        Notice::Success(message) => (theme::NoticeContainer::Success, message),
        Notice::Warning(message) => (theme::NoticeContainer::Warning, message),
        Notice::Error(message) => (theme::NoticeContainer::Danger, message),
    };

    Some(
        container(text(message.clone()).size(14))
            .padding([10, 14])
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(style)))
            .into(),
    )
}
