//! Visual theme for the monitor window.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::gui::state::MessageLevel;

/// Light surface with a blue accent for the primary action.
pub mod colors {
    use iced::Color;

    pub const PRIMARY: Color = Color::from_rgb(0.13, 0.59, 0.95);
    pub const PRIMARY_LIGHT: Color = Color::from_rgb(0.35, 0.7, 0.98);
    pub const PRIMARY_DARK: Color = Color::from_rgb(0.08, 0.45, 0.8);

    pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const BACKGROUND: Color = Color::from_rgb(0.97, 0.97, 0.97);
    pub const BORDER: Color = Color::from_rgb(0.8, 0.8, 0.85);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.1, 0.1, 0.15);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.6, 0.6, 0.65);

    pub const SUCCESS: Color = Color::from_rgb(0.3, 0.69, 0.31);
    pub const ERROR: Color = Color::from_rgb(0.9, 0.2, 0.2);
}

/// "Copy All" button: flat accent fill that lifts on hover and sinks when
/// pressed.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill, lift) = match status {
        button::Status::Active => (colors::PRIMARY, 0.0),
        button::Status::Hovered => (colors::PRIMARY_LIGHT, 2.0),
        button::Status::Pressed => (colors::PRIMARY_DARK, 0.0),
        button::Status::Disabled => (Color { a: 0.4, ..colors::PRIMARY }, 0.0),
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: if matches!(status, button::Status::Disabled) {
            colors::TEXT_MUTED
        } else {
            Color::WHITE
        },
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.25, ..colors::PRIMARY_DARK },
            offset: Vector::new(0.0, lift),
            blur_radius: lift * 2.0,
        },
        snap: false,
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(colors::SURFACE)),
        text_color: colors::TEXT_PRIMARY,
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            border: Border {
                color: colors::SUCCESS,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.92))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.95, 0.95, 0.95))),
            text_color: Color::from_rgb(0.6, 0.6, 0.6),
            ..base
        },
    }
}

/// Sunken panel holding the collected links.
pub fn log_panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE)),
        border: Border {
            color: colors::BORDER,
            width: 2.0,
            radius: 2.0.into(),
        },
        text_color: Some(colors::TEXT_PRIMARY),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn background_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BACKGROUND)),
        ..Default::default()
    }
}

pub fn message_color(level: MessageLevel) -> Color {
    match level {
        MessageLevel::Success => colors::SUCCESS,
        MessageLevel::Error => colors::ERROR,
    }
}

pub fn banner_style(level: MessageLevel) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = message_color(level);
        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..accent })),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 4.0.into(),
            },
            text_color: Some(colors::TEXT_PRIMARY),
            shadow: Shadow::default(),
            snap: false,
        }
    }
}

pub fn status_indicator_color(running: bool) -> Color {
    if running {
        colors::SUCCESS
    } else {
        colors::ERROR
    }
}
