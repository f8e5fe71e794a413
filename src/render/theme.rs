use serde::{Deserialize, Serialize};

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const LIGHT_GREEN: Rgb = Rgb::new(0x90, 0xee, 0x90);
    pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    pub const CHARCOAL: Rgb = Rgb::new(0x22, 0x22, 0x22);
    pub const AQUA: Rgb = Rgb::new(0x00, 0xff, 0xcc);
    pub const CRIMSON: Rgb = Rgb::new(0xff, 0x00, 0x55);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(rgb: Rgb) -> Self {
        ratatui::style::Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// The four colours every frame is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub board_background: Rgb,
    pub snake_fill: Rgb,
    /// Also used for overlay text
    pub snake_border: Rgb,
    pub food_fill: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        Theme::from_dark(!self.is_dark())
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                board_background: Rgb::WHITE,
                snake_fill: Rgb::LIGHT_GREEN,
                snake_border: Rgb::BLACK,
                food_fill: Rgb::RED,
            },
            Theme::Dark => Palette {
                board_background: Rgb::CHARCOAL,
                snake_fill: Rgb::AQUA,
                snake_border: Rgb::WHITE,
                food_fill: Rgb::CRIMSON,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}
