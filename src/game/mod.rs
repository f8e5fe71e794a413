//! Core game logic module for Snake
//!
//! This module contains all the game rules and the tick-driven loop without
//! any terminal I/O. Drawing goes through [`crate::render::DrawSink`] and the
//! high score through [`crate::store::KeyValueStore`].

pub mod action;
pub mod config;
pub mod controller;
pub mod engine;
pub mod food;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{Difficulty, GameConfig};
pub use controller::{GameLoop, Hud, TickOutcome};
pub use engine::{CollisionType, HIGH_SCORE_KEY, HighScore};
pub use food::FoodSpawner;
pub use geometry::{Cell, Grid, Velocity};
pub use state::{GameState, RunState, Snake};
