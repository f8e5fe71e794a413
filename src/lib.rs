//! Canvas Snake - the classic single-player Snake game
//!
//! This library provides:
//! - Core game logic and the tick-driven loop controller (game module)
//! - Key mapping for terminal input (input module)
//! - The drawing-sink seam, colour themes and TUI rendering (render module)
//! - Persistent high-score storage (store module)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod store;
