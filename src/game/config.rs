use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::geometry::Grid;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board geometry in pixels
    pub grid: Grid,
    /// Number of segments the snake starts with
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            initial_snake_length: 5,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a custom grid (used by tests)
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            ..Default::default()
        }
    }
}

/// Difficulty level, selecting the delay between game ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 150ms per tick
    Easy,
    /// 75ms per tick
    #[default]
    Medium,
    /// 40ms per tick
    Hard,
}

impl Difficulty {
    /// Get the tick interval for this level
    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(150),
            Self::Medium => Duration::from_millis(75),
            Self::Hard => Duration::from_millis(40),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid.unit, 25);
        assert_eq!(config.grid.width, 500);
        assert_eq!(config.grid.height, 500);
        assert_eq!(config.initial_snake_length, 5);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(Grid::new(10, 100, 50));
        assert_eq!(config.grid.width_cells(), 10);
        assert_eq!(config.grid.height_cells(), 5);
        assert_eq!(config.initial_snake_length, 5);
    }

    #[test]
    fn test_difficulty_intervals() {
        assert_eq!(Difficulty::Easy.tick_interval(), Duration::from_millis(150));
        assert_eq!(Difficulty::Medium.tick_interval(), Duration::from_millis(75));
        assert_eq!(Difficulty::Hard.tick_interval(), Duration::from_millis(40));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_serialization() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let parsed: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, Difficulty::Easy);
    }
}
