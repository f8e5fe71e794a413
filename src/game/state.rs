use super::action::Direction;
use super::geometry::{Cell, Velocity};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
}

impl Snake {
    /// Create a snake with its head at `head` and `length` segments trailing
    /// one unit apart opposite to `direction`
    pub fn new(head: Cell, direction: Direction, length: usize, unit: i32) -> Self {
        let behind = -Velocity::toward(direction, unit);
        let body = std::iter::successors(Some(head), |cell| Some(*cell + behind))
            .take(length.max(1))
            .collect();

        Self { body }
    }

    /// The starting snake: laid out along the top row, head rightmost
    pub fn initial(length: usize, unit: i32) -> Self {
        let head = Cell::new(unit * (length.max(1) as i32 - 1), 0);
        Self::new(head, Direction::Right, length, unit)
    }

    /// Build a snake from explicit segments, head first
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_segments(body: Vec<Cell>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Cell) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Drop the last segment, keeping at least the head
    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake has no segments
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Built but not yet started
    #[default]
    Idle,
    Running,
    Paused,
    /// Terminal until an explicit reset
    Over,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::Running => "Running",
            RunState::Paused => "Paused",
            RunState::Over => "Game Over",
        }
    }
}

/// Per-game state, replaced wholesale on reset
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub velocity: Velocity,
    pub food: Cell,
    pub score: u32,
    pub run_state: RunState,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, velocity: Velocity, food: Cell) -> Self {
        Self {
            snake,
            velocity,
            food,
            score: 0,
            run_state: RunState::Idle,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Cell) -> bool {
        self.snake.segments().contains(&pos)
    }
}
