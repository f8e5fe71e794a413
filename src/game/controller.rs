//! Fixed-interval game loop
//!
//! [`GameLoop`] owns every piece of mutable game state. The host calls
//! [`GameLoop::tick`] each time its timer fires and re-arms the timer with the
//! delay the tick hands back; input and UI commands are applied between ticks.
//!
//! State machine:
//!
//! ```text
//! Idle --start--> Running <--Space--> Paused
//!                    |
//!                collision
//!                    v
//!                  Over --reset--> Running
//! ```

use rand::Rng;
use std::time::Duration;

use super::action::Direction;
use super::config::{Difficulty, GameConfig};
use super::engine::{self, HighScore};
use super::food::FoodSpawner;
use super::geometry::{Cell, Velocity};
use super::state::{GameState, RunState, Snake};
use crate::input::Key;
use crate::render::{DrawSink, Palette, Region, TextAlign, Theme};

/// Font requested for overlay text
pub const OVERLAY_FONT: &str = "50px Roboto Mono";
pub const PAUSED_TEXT: &str = "PAUSED";
pub const GAME_OVER_TEXT: &str = "GAME OVER!";

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Call `tick` again after this delay
    Reschedule(Duration),
    /// Stop ticking until the game is reset
    Stopped,
}

/// Figures shown next to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub run_state: RunState,
}

pub struct GameLoop<R: Rng> {
    config: GameConfig,
    difficulty: Difficulty,
    theme: Theme,
    state: GameState,
    spawner: FoodSpawner<R>,
    high_score: HighScore,
}

impl<R: Rng> GameLoop<R> {
    /// Build an idle game; call [`GameLoop::start`] before ticking
    pub fn new(
        config: GameConfig,
        difficulty: Difficulty,
        theme: Theme,
        mut spawner: FoodSpawner<R>,
        high_score: HighScore,
    ) -> Self {
        let state = Self::fresh_state(&config, &mut spawner);

        Self {
            config,
            difficulty,
            theme,
            state,
            spawner,
            high_score,
        }
    }

    fn fresh_state(config: &GameConfig, spawner: &mut FoodSpawner<R>) -> GameState {
        let grid = config.grid;
        let snake = Snake::initial(config.initial_snake_length, grid.unit);
        let velocity = Velocity::toward(Direction::Right, grid.unit);
        let food = spawner.spawn(grid.width_cells(), grid.height_cells());

        GameState::new(snake, velocity, food)
    }

    /// Idle -> Running; no effect in any other state
    pub fn start(&mut self) {
        if self.state.run_state == RunState::Idle {
            self.state.run_state = RunState::Running;
            tracing::info!(difficulty = self.difficulty.as_str(), "Game started");
        }
    }

    /// Abandon the current game and start a new one
    ///
    /// Score, snake, velocity and food are replaced; the high score is kept.
    pub fn reset(&mut self) {
        self.state = Self::fresh_state(&self.config, &mut self.spawner);
        self.state.run_state = RunState::Running;
        tracing::info!(difficulty = self.difficulty.as_str(), "Game reset");
    }

    /// Change the tick interval and reset
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        tracing::info!(
            from = self.difficulty.as_str(),
            to = difficulty.as_str(),
            "Difficulty changed"
        );
        self.difficulty = difficulty;
        self.reset();
    }

    /// Select the light or dark palette
    ///
    /// While paused or over nothing else would repaint the board, so the
    /// static frame is redrawn right away.
    pub fn set_theme(&mut self, is_dark: bool, sink: &mut dyn DrawSink) -> Palette {
        self.theme = Theme::from_dark(is_dark);
        tracing::debug!(theme = self.theme.as_str(), "Theme changed");

        if matches!(self.state.run_state, RunState::Paused | RunState::Over) {
            self.redraw(sink);
        }
        self.palette()
    }

    /// Apply a key press
    ///
    /// Space toggles pause. Arrows steer unless the game is paused or over,
    /// and a turn straight back onto the body is ignored. Several presses
    /// between ticks simply overwrite each other.
    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::Space => {
                self.state.run_state = match self.state.run_state {
                    RunState::Running => RunState::Paused,
                    RunState::Paused => RunState::Running,
                    other => other,
                };
            }
            Key::Other => {}
            arrow => {
                if matches!(self.state.run_state, RunState::Paused | RunState::Over) {
                    return;
                }
                if let Some(direction) = arrow.direction() {
                    let velocity = Velocity::toward(direction, self.config.grid.unit);
                    if !self.state.velocity.is_reversed_by(velocity) {
                        self.state.velocity = velocity;
                    }
                }
            }
        }
    }

    /// Run one step of the loop
    pub fn tick(&mut self, sink: &mut dyn DrawSink) -> TickOutcome {
        match self.state.run_state {
            RunState::Idle => TickOutcome::Stopped,
            RunState::Over => {
                self.draw_overlay(sink, GAME_OVER_TEXT);
                TickOutcome::Stopped
            }
            RunState::Paused => {
                self.draw_overlay(sink, PAUSED_TEXT);
                TickOutcome::Reschedule(self.tick_interval())
            }
            RunState::Running => self.step(sink),
        }
    }

    fn step(&mut self, sink: &mut dyn DrawSink) -> TickOutcome {
        let grid = self.config.grid;

        self.clear_board(sink);
        self.draw_food(sink);

        let mut snake = engine::advance(&self.state.snake, self.state.velocity);
        let new_head = snake.head();

        if engine::check_consumption(new_head, self.state.food) {
            self.state.score += 1;
            if self.high_score.observe(self.state.score) {
                tracing::debug!(high_score = self.state.score, "New high score");
            }
            self.state.food = self.spawner.spawn(grid.width_cells(), grid.height_cells());
        } else {
            snake.drop_tail();
        }
        self.state.snake = snake;

        self.draw_snake(sink);

        if let Some(collision) =
            engine::detect_collision(new_head, self.state.snake.body_segments(), &grid)
        {
            self.state.run_state = RunState::Over;
            tracing::info!(score = self.state.score, ?collision, "Game over");
            self.draw_overlay(sink, GAME_OVER_TEXT);
            return TickOutcome::Stopped;
        }

        TickOutcome::Reschedule(self.tick_interval())
    }

    /// Paint the current frame without advancing the game
    pub fn redraw(&self, sink: &mut dyn DrawSink) {
        self.clear_board(sink);
        self.draw_food(sink);
        self.draw_snake(sink);

        match self.state.run_state {
            RunState::Paused => self.draw_overlay(sink, PAUSED_TEXT),
            RunState::Over => self.draw_overlay(sink, GAME_OVER_TEXT),
            RunState::Idle | RunState::Running => {}
        }
    }

    fn clear_board(&self, sink: &mut dyn DrawSink) {
        let board = self.board();
        sink.clear(board);
        sink.fill_rect(board, self.palette().board_background);
    }

    fn draw_food(&self, sink: &mut dyn DrawSink) {
        sink.fill_rect(self.cell_region(self.state.food), self.palette().food_fill);
    }

    fn draw_snake(&self, sink: &mut dyn DrawSink) {
        let palette = self.palette();
        for segment in self.state.snake.segments() {
            let region = self.cell_region(*segment);
            sink.fill_rect(region, palette.snake_fill);
            sink.stroke_rect(region, palette.snake_border);
        }
    }

    fn draw_overlay(&self, sink: &mut dyn DrawSink, text: &str) {
        let (x, y) = self.config.grid.center();
        sink.draw_text(
            text,
            x,
            y,
            OVERLAY_FONT,
            TextAlign::Center,
            self.palette().snake_border,
        );
    }

    fn board(&self) -> Region {
        let grid = self.config.grid;
        Region::new(0, 0, grid.width, grid.height)
    }

    fn cell_region(&self, cell: Cell) -> Region {
        let unit = self.config.grid.unit;
        Region::new(cell.x, cell.y, unit, unit)
    }

    pub fn tick_interval(&self) -> Duration {
        self.difficulty.tick_interval()
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.state.score,
            high_score: self.high_score.value(),
            difficulty: self.difficulty,
            theme: self.theme,
            run_state: self.state.run_state,
        }
    }
}
