use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Difficulty, Direction};

/// Keys the game itself reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Left,
    Up,
    Right,
    Down,
    Other,
}

impl Key {
    /// Map a browser-style key code (32 = Space, 37..=40 = arrows)
    pub fn from_code(code: u32) -> Self {
        match code {
            32 => Key::Space,
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            _ => Key::Other,
        }
    }

    /// Heading requested by an arrow key
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Up => Some(Direction::Up),
            Key::Right => Some(Direction::Right),
            Key::Down => Some(Direction::Down),
            Key::Space | Key::Other => None,
        }
    }
}

impl From<Direction> for Key {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Key::Up,
            Direction::Down => Key::Down,
            Direction::Left => Key::Left,
            Direction::Right => Key::Right,
        }
    }
}

/// Everything the player can ask of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Key(Key),
    Reset,
    SelectDifficulty(Difficulty),
    ToggleTheme,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Command {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Command::Key(Key::Up),
            KeyCode::Down => Command::Key(Key::Down),
            KeyCode::Left => Command::Key(Key::Left),
            KeyCode::Right => Command::Key(Key::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Command::Key(Key::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Command::Key(Key::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Command::Key(Key::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Command::Key(Key::Right),

            KeyCode::Char(' ') => Command::Key(Key::Space),

            // Controls
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
            KeyCode::Char('1') => Command::SelectDifficulty(Difficulty::Easy),
            KeyCode::Char('2') => Command::SelectDifficulty(Difficulty::Medium),
            KeyCode::Char('3') => Command::SelectDifficulty(Difficulty::Hard),
            KeyCode::Char('t') | KeyCode::Char('T') => Command::ToggleTheme,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,

            _ => Command::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
