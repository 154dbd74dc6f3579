// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Multicity contributors

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

pub mod palette {
    use iced::Color;

    pub const ACCENT_BLUE: Color = Color::from_rgb(0.15, 0.39, 0.92); // #2563eb
    pub const ACCENT_BLUE_HOVER: Color = Color::from_rgb(0.11, 0.31, 0.85); // #1d4ed8
    pub const ACCENT_ORANGE: Color = Color::from_rgb(0.98, 0.45, 0.09); // #f97316
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.2, 0.7, 0.3); // #33b34d
    pub const DANGER: Color = Color::from_rgb(0.86, 0.15, 0.15); // #dc2626
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.55, 0.55, 0.58);
    pub const BORDER: Color = Color::from_rgb(0.35, 0.35, 0.38);
}

fn surface(theme: &Theme) -> Color {
    theme.extended_palette().background.weak.color
}

fn page(theme: &Theme) -> Color {
    theme.extended_palette().background.base.color
}

fn text_primary(theme: &Theme) -> Color {
    theme.extended_palette().background.base.text
}

// Container Styles
pub fn container_page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(page(theme))),
        ..Default::default()
    }
}

pub fn container_header(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub fn container_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(page(theme))),
        border: Border {
            color: palette::BORDER,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Card currently being dragged.
pub fn container_card_dragging(theme: &Theme) -> container::Style {
    let base = page(theme);
    container::Style {
        background: Some(Background::Color(Color { a: 0.5, ..base })),
        border: Border {
            color: palette::ACCENT_BLUE,
            width: 2.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.15, 0.39, 0.92, 0.4),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

pub fn container_role_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.2, 0.7, 0.3, 0.2))),
        text_color: Some(palette::ACCENT_GREEN),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn container_warning_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ACCENT_ORANGE)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn container_warning_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.98, 0.45, 0.09, 0.12))),
        border: Border {
            color: palette::ACCENT_ORANGE,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_info_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.15, 0.39, 0.92, 0.12))),
        border: Border {
            color: palette::ACCENT_BLUE,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn container_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
        ..Default::default()
    }
}

pub fn container_modal(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(page(theme))),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

pub fn container_toast(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ACCENT_GREEN)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

// Button Styles
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(palette::ACCENT_BLUE)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ACCENT_BLUE_HOVER)),
            shadow: Shadow {
                color: Color::from_rgba(0.15, 0.39, 0.92, 0.5),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.3))),
            text_color: palette::TEXT_SECONDARY,
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(page(theme))),
        text_color: text_primary(theme),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(surface(theme))),
            ..base
        },
        _ => base,
    }
}

pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: text_primary(theme),
        border: Border::default(),
        shadow: Shadow::default(),
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.15))),
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..base
        },
        _ => base,
    }
}

pub fn button_danger_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        text_color: palette::DANGER,
        ..button_ghost(theme, status)
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.86, 0.15, 0.15, 0.12))),
            ..base
        },
        _ => base,
    }
}

/// Round "+" between two cards.
pub fn button_insert(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_BLUE_HOVER,
        _ => palette::ACCENT_BLUE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
    }
}

/// Catalog entry in the editor; `selected` highlights the chosen city.
pub fn button_catalog(
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let border_color = if selected {
            palette::ACCENT_BLUE
        } else if matches!(status, button::Status::Hovered) {
            palette::TEXT_SECONDARY
        } else {
            palette::BORDER
        };
        let background = if selected {
            Color::from_rgba(0.15, 0.39, 0.92, 0.12)
        } else {
            page(theme)
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: text_primary(theme),
            border: Border {
                color: border_color,
                width: 2.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}
