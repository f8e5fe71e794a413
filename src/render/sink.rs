use super::theme::Rgb;

/// Axis-aligned rectangle in board pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Horizontal anchoring of text relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing surface the game loop paints onto
///
/// The game only issues these calls; hosts decide what a pixel is.
pub trait DrawSink {
    /// Wipe everything drawn inside `region`
    fn clear(&mut self, region: Region);

    fn fill_rect(&mut self, region: Region, color: Rgb);

    fn stroke_rect(&mut self, region: Region, color: Rgb);

    /// Draw `text` with its baseline anchored at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &str, align: TextAlign, color: Rgb);
}
