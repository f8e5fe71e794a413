use super::sink::{DrawSink, Region, TextAlign};
use super::theme::Rgb;
use crate::game::Grid;

/// What has been painted on one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
}

/// Text anchored at a board pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMark {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub align: TextAlign,
    pub color: Rgb,
}

/// Drawing surface with one pixel per grid cell
///
/// Rectangles paint every cell they overlap; anything off the board is
/// clipped. Fonts are ignored since the terminal has only one.
#[derive(Debug, Clone)]
pub struct TerminalCanvas {
    unit: i32,
    cols: usize,
    rows: usize,
    cells: Vec<Paint>,
    texts: Vec<TextMark>,
}

impl TerminalCanvas {
    pub fn new(grid: Grid) -> Self {
        let cols = grid.width_cells() as usize;
        let rows = grid.height_cells() as usize;

        Self {
            unit: grid.unit,
            cols,
            rows,
            cells: vec![Paint::default(); cols * rows],
            texts: Vec::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn unit(&self) -> i32 {
        self.unit
    }

    /// Paint at a cell; blank outside the board
    pub fn paint(&self, col: usize, row: usize) -> Paint {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col]
        } else {
            Paint::default()
        }
    }

    pub fn texts(&self) -> &[TextMark] {
        &self.texts
    }

    /// Cell ranges covered by `region`, clipped to the board
    fn span(&self, region: Region) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        if region.width <= 0 || region.height <= 0 {
            return None;
        }

        let clip = |start: i32, len: i32, limit: usize| {
            let first = start.div_euclid(self.unit).max(0) as usize;
            let last = (start + len + self.unit - 1).div_euclid(self.unit).max(0) as usize;
            first.min(limit)..last.min(limit)
        };

        let cols = clip(region.x, region.width, self.cols);
        let rows = clip(region.y, region.height, self.rows);
        if cols.is_empty() || rows.is_empty() {
            None
        } else {
            Some((cols, rows))
        }
    }

    fn paint_region(&mut self, region: Region, apply: impl Fn(&mut Paint)) {
        if let Some((cols, rows)) = self.span(region) {
            for row in rows {
                for col in cols.clone() {
                    apply(&mut self.cells[row * self.cols + col]);
                }
            }
        }
    }
}

impl DrawSink for TerminalCanvas {
    fn clear(&mut self, region: Region) {
        self.paint_region(region, |paint| *paint = Paint::default());
        self.texts.retain(|mark| {
            mark.x < region.x
                || mark.x >= region.x + region.width
                || mark.y < region.y
                || mark.y >= region.y + region.height
        });
    }

    fn fill_rect(&mut self, region: Region, color: Rgb) {
        self.paint_region(region, |paint| {
            paint.fill = Some(color);
            paint.stroke = None;
        });
    }

    fn stroke_rect(&mut self, region: Region, color: Rgb) {
        self.paint_region(region, |paint| paint.stroke = Some(color));
    }

    /// Text drawn at an anchor that already holds text replaces it
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        _font: &str,
        align: TextAlign,
        color: Rgb,
    ) {
        self.texts.retain(|mark| mark.x != x || mark.y != y);
        self.texts.push(TextMark {
            text: text.to_string(),
            x,
            y,
            align,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &str = "50px Roboto Mono";

    fn canvas() -> TerminalCanvas {
        TerminalCanvas::new(Grid::default())
    }

    #[test]
    fn test_fill_paints_overlapped_cells() {
        let mut canvas = canvas();
        canvas.fill_rect(Region::new(25, 50, 25, 25), Rgb::RED);

        assert_eq!(canvas.paint(1, 2).fill, Some(Rgb::RED));
        assert_eq!(canvas.paint(0, 2).fill, None);
        assert_eq!(canvas.paint(2, 2).fill, None);
        assert_eq!(canvas.paint(1, 3).fill, None);
    }

    #[test]
    fn test_full_board_fill() {
        let mut canvas = canvas();
        canvas.fill_rect(Region::new(0, 0, 500, 500), Rgb::WHITE);
        assert_eq!(canvas.paint(0, 0).fill, Some(Rgb::WHITE));
        assert_eq!(canvas.paint(19, 19).fill, Some(Rgb::WHITE));
    }

    #[test]
    fn test_off_board_rects_are_clipped() {
        let mut canvas = canvas();
        canvas.fill_rect(Region::new(500, 0, 25, 25), Rgb::RED);
        canvas.fill_rect(Region::new(-25, 0, 25, 25), Rgb::RED);
        canvas.stroke_rect(Region::new(0, -25, 25, 25), Rgb::BLACK);

        assert!((0..20).all(|col| canvas.paint(col, 0) == Paint::default()));
        assert_eq!(canvas.paint(20, 0), Paint::default());
    }

    #[test]
    fn test_stroke_keeps_fill() {
        let mut canvas = canvas();
        canvas.fill_rect(Region::new(0, 0, 25, 25), Rgb::LIGHT_GREEN);
        canvas.stroke_rect(Region::new(0, 0, 25, 25), Rgb::BLACK);

        let paint = canvas.paint(0, 0);
        assert_eq!(paint.fill, Some(Rgb::LIGHT_GREEN));
        assert_eq!(paint.stroke, Some(Rgb::BLACK));

        canvas.fill_rect(Region::new(0, 0, 25, 25), Rgb::WHITE);
        assert_eq!(canvas.paint(0, 0).stroke, None);
    }

    #[test]
    fn test_clear_wipes_cells_and_text() {
        let mut canvas = canvas();
        canvas.fill_rect(Region::new(0, 0, 500, 500), Rgb::WHITE);
        canvas.draw_text("PAUSED", 250, 250, FONT, TextAlign::Center, Rgb::BLACK);
        assert_eq!(canvas.texts().len(), 1);

        canvas.clear(Region::new(0, 0, 500, 500));
        assert_eq!(canvas.paint(7, 7), Paint::default());
        assert!(canvas.texts().is_empty());
    }

    #[test]
    fn test_text_at_same_anchor_replaces_previous() {
        let mut canvas = canvas();
        for _ in 0..100 {
            canvas.draw_text("PAUSED", 250, 250, FONT, TextAlign::Center, Rgb::BLACK);
        }
        assert_eq!(canvas.texts().len(), 1);

        canvas.draw_text("GAME OVER!", 250, 250, FONT, TextAlign::Center, Rgb::WHITE);
        assert_eq!(canvas.texts().len(), 1);
        assert_eq!(canvas.texts()[0].text, "GAME OVER!");

        canvas.draw_text("hi", 0, 0, "", TextAlign::Left, Rgb::BLACK);
        assert_eq!(canvas.texts().len(), 2);
    }

    #[test]
    fn test_partial_clear_keeps_outside_text() {
        let mut canvas = canvas();
        canvas.draw_text("hi", 400, 400, "", TextAlign::Left, Rgb::BLACK);
        canvas.clear(Region::new(0, 0, 100, 100));
        assert_eq!(canvas.texts().len(), 1);
    }
}
