use iced::{widget::button, Background, Color, Theme};

pub const ACCENT: Color = Color::from_rgb8(0x99, 0x00, 0x00);
pub const DRAWER_BG: Color = Color::from_rgb8(0x1a, 0x0a, 0x0a);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x2a, 0x12, 0x12);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xff, 0xf4, 0xe0);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0xc9, 0xb3, 0xad);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xff, 0xf7, 0xf3);

/// Fades `color` while the button is hovered or pressed.
fn with_status(mut color: Color, status: button::Status) -> Color {
    match status {
        button::Status::Hovered => color.a = 0.85,
        button::Status::Pressed => color.a = 0.7,
        _ => {}
    }
    color
}

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(with_status(ACCENT, status))),
        text_color: TEXT_ON_ACCENT,
        ..Default::default()
    }
}

/// Sidebar entry for one studio; the active studio is drawn in the accent
/// color.
pub fn studio_button_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if active { ACCENT } else { DRAWER_ITEM_BG };
        button::Style {
            background: Some(Background::Color(with_status(background, status))),
            ..Default::default()
        }
    }
}

pub fn studio_label_color(active: bool) -> Color {
    if active {
        DRAWER_TEXT_ACTIVE
    } else {
        DRAWER_TEXT_INACTIVE
    }
}
