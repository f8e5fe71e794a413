use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::{Paint, TerminalCanvas};
use super::sink::TextAlign;
use crate::game::{Hud, RunState};

/// Terminal columns per board cell, so cells come out roughly square
const CHARS_PER_CELL: usize = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &TerminalCanvas, hud: &Hud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(hud), chunks[0]);

        // Center the board horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_board(canvas, hud), game_area);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, canvas: &TerminalCanvas, hud: &Hud) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = board_rows(canvas)
            .into_iter()
            .map(|row| Line::from(merge_spans(row)))
            .collect();

        let border_color = match hud.run_state {
            RunState::Over => Color::Red,
            RunState::Paused => Color::Yellow,
            RunState::Idle | RunState::Running => Color::White,
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, hud: &Hud) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(hud.score.to_string(), value),
            Span::raw("    "),
            Span::styled("High Score: ", label),
            Span::styled(hud.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Level: ", label),
            Span::styled(hud.difficulty.as_str(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Theme: ", label),
            Span::styled(hud.theme.as_str(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let key = Style::default().fg(Color::Cyan);

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
            Span::styled("Space", key),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" reset | "),
            Span::styled("1 2 3", key),
            Span::raw(" level | "),
            Span::styled("T", key),
            Span::raw(" theme | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay the canvas out as styled characters, text overlays on top
fn board_rows(canvas: &TerminalCanvas) -> Vec<Vec<(char, Style)>> {
    let mut rows: Vec<Vec<(char, Style)>> = (0..canvas.rows())
        .map(|row| {
            (0..canvas.cols())
                .flat_map(|col| cell_glyphs(canvas.paint(col, row)))
                .collect()
        })
        .collect();

    let width = canvas.cols() * CHARS_PER_CELL;
    for mark in canvas.texts() {
        if rows.is_empty() || width == 0 {
            break;
        }

        let row = (mark.y.div_euclid(canvas.unit()).max(0) as usize).min(rows.len() - 1);
        let anchor = (mark.x.max(0) as usize * CHARS_PER_CELL) / canvas.unit().max(1) as usize;
        let len = mark.text.chars().count();
        let start = match mark.align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor.saturating_sub(len / 2),
            TextAlign::Right => anchor.saturating_sub(len),
        };

        let line = &mut rows[row];
        for (offset, ch) in mark.text.chars().enumerate() {
            let Some((glyph, style)) = line.get_mut(start + offset) else {
                break;
            };
            *glyph = ch;
            *style = style
                .fg(mark.color.into())
                .add_modifier(Modifier::BOLD);
        }
    }

    rows
}

fn cell_glyphs(paint: Paint) -> [(char, Style); CHARS_PER_CELL] {
    match paint {
        Paint {
            fill: Some(fill),
            stroke: Some(stroke),
        } => {
            let style = Style::default().bg(fill.into()).fg(stroke.into());
            [('[', style), (']', style)]
        }
        Paint {
            fill: Some(fill),
            stroke: None,
        } => {
            let style = Style::default().bg(fill.into());
            [(' ', style), (' ', style)]
        }
        Paint {
            fill: None,
            stroke: Some(stroke),
        } => {
            let style = Style::default().fg(stroke.into());
            [('[', style), (']', style)]
        }
        Paint {
            fill: None,
            stroke: None,
        } => {
            let style = Style::default().fg(Color::DarkGray);
            [('.', style), (' ', style)]
        }
    }
}

/// Collapse runs of identically styled characters into spans
fn merge_spans(row: Vec<(char, Style)>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut current: Option<Style> = None;

    for (ch, style) in row {
        if current != Some(style) {
            if let Some(previous) = current {
                spans.push(Span::styled(std::mem::take(&mut run), previous));
            }
            current = Some(style);
        }
        run.push(ch);
    }

    if let Some(previous) = current {
        spans.push(Span::styled(run, previous));
    }
    spans
}
