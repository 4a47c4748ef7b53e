//! Widget styling for the form

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Palette ---

// Backdrop and surfaces
pub const BACKDROP: Color = Color::from_rgb(0.955, 0.951, 0.942);
pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const FIELD: Color = Color::from_rgb(0.988, 0.986, 0.980);

// Accent - teal
pub const TEAL_600: Color = Color::from_rgb(0.051, 0.463, 0.467);
pub const TEAL_500: Color = Color::from_rgb(0.078, 0.561, 0.553);
pub const TEAL_100: Color = Color::from_rgb(0.835, 0.925, 0.918);

// Text and borders
pub const TEXT: Color = Color::from_rgb(0.157, 0.173, 0.192);
pub const TEXT_DIM: Color = Color::from_rgb(0.420, 0.447, 0.482);
pub const TEXT_FAINT: Color = Color::from_rgb(0.604, 0.627, 0.655);
pub const OUTLINE: Color = Color::from_rgb(0.855, 0.859, 0.863);

// Status colors
pub const SUCCESS: Color = Color::from_rgb(0.086, 0.549, 0.318);
pub const SUCCESS_TINT: Color = Color::from_rgb(0.886, 0.957, 0.918);
pub const WARNING: Color = Color::from_rgb(0.706, 0.451, 0.035);
pub const WARNING_TINT: Color = Color::from_rgb(0.984, 0.937, 0.843);
pub const DANGER: Color = Color::from_rgb(0.788, 0.216, 0.208);
pub const DANGER_TINT: Color = Color::from_rgb(0.977, 0.886, 0.882);
pub const INFO: Color = Color::from_rgb(0.161, 0.380, 0.616);
pub const INFO_TINT: Color = Color::from_rgb(0.871, 0.914, 0.965);

// --- Container styles ---

pub struct BackdropContainer;

impl container::StyleSheet for BackdropContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT),
            background: Some(Background::Color(BACKDROP)),
            ..Default::default()
        }
    }
}

pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT),
            background: Some(Background::Color(SURFACE)),
            border: Border {
                color: OUTLINE,
                width: 1.0,
                radius: 14.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.157, 0.173, 0.192, 0.08),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 14.0,
            },
        }
    }
}

/// Tinted banner behind the inline notices
pub enum NoticeContainer {
    Info,
    Success,
    Warning,
    Danger,
}

impl container::StyleSheet for NoticeContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (tint, text) = match self {
            Self::Info => (INFO_TINT, INFO),
            Self::Success => (SUCCESS_TINT, SUCCESS),
            Self::Warning => (WARNING_TINT, WARNING),
            Self::Danger => (DANGER_TINT, DANGER),
        };
        container::Appearance {
            text_color: Some(text),
            background: Some(Background::Color(tint)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(TEAL_600)),
            text_color: SURFACE,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.051, 0.463, 0.467, 0.25),
                offset: Vector::new(0.0, 3.0),
                blur_radius: 8.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(TEAL_500)),
            ..self.active(style)
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                offset: Vector::new(0.0, 1.0),
                blur_radius: 4.0,
                ..active.shadow
            },
            ..active
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SURFACE)),
            text_color: TEAL_600,
            border: Border {
                radius: 10.0.into(),
                color: OUTLINE,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(TEAL_100)),
            ..self.active(style)
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: TEXT_DIM,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(FIELD)),
            text_color: TEXT,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(FIELD),
            border: Border {
                radius: 10.0.into(),
                width: 1.0,
                color: OUTLINE,
            },
            icon_color: TEXT_FAINT,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: TEAL_500,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        TEXT_FAINT
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        TEXT
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.078, 0.561, 0.553, 0.25)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(BACKDROP),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        TEXT_FAINT
    }
}

pub struct InputWarningStyle;

impl text_input::StyleSheet for InputWarningStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(FIELD),
            border: Border {
                radius: 10.0.into(),
                width: 1.0,
                color: WARNING,
            },
            icon_color: WARNING,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        TEXT_FAINT
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        TEXT
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.706, 0.451, 0.035, 0.25)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(BACKDROP),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        TEXT_FAINT
    }
}
