//! Movement, collision and scoring rules
//!
//! These are free functions over plain values so the loop controller can
//! sequence them and tests can call them in isolation.

use super::geometry::{Cell, Grid, Velocity};
use super::state::Snake;
use crate::store::KeyValueStore;

/// Store key holding the best score as a decimal string
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Candidate snake after one step: the new head prepended, nothing dropped
///
/// The caller removes the tail unless the new head lands on food.
pub fn advance(snake: &Snake, velocity: Velocity) -> Snake {
    let mut body = Vec::with_capacity(snake.len() + 1);
    body.push(snake.head() + velocity);
    body.extend_from_slice(snake.segments());

    Snake::from_segments(body).unwrap_or_else(|| snake.clone())
}

/// True iff the new head sits exactly on the food
pub fn check_consumption(new_head: Cell, food: Cell) -> bool {
    new_head == food
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Find what the new head hit, if anything
///
/// `body` is the snake without its new head. Walls are checked first, though
/// either collision ends the game.
pub fn detect_collision(new_head: Cell, body: &[Cell], grid: &Grid) -> Option<CollisionType> {
    if !grid.contains(new_head) {
        return Some(CollisionType::Wall);
    }

    if body.contains(&new_head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// True iff the new head is off the board or on the body
pub fn check_game_over(new_head: Cell, body: &[Cell], grid: &Grid) -> bool {
    detect_collision(new_head, body, grid).is_some()
}

/// Best score across games, mirrored into a persistent store
pub struct HighScore {
    value: u32,
    store: Box<dyn KeyValueStore>,
}

impl HighScore {
    /// Read the stored best score; absent or unparsable values count as zero
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let value = store
            .get(HIGH_SCORE_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);

        tracing::debug!(high_score = value, "Loaded high score");
        Self { value, store }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Raise the high score to `score` if it beats it, persisting the change
    ///
    /// Returns true when the high score moved. A failed write is logged and
    /// the in-memory value is still raised.
    pub fn observe(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }

        self.value = score;
        if let Err(err) = self.store.set(HIGH_SCORE_KEY, &score.to_string()) {
            tracing::warn!(error = %err, high_score = score, "Failed to persist high score");
        }
        true
    }
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore").field("value", &self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::store::{MemoryStore, StoreError};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn right() -> Velocity {
        Velocity::toward(Direction::Right, 25)
    }

    #[test]
    fn test_advance_prepends_head() {
        let snake = Snake::initial(5, 25);
        let moved = advance(&snake, right());

        assert_eq!(moved.len(), 6);
        assert_eq!(moved.head(), Cell::new(125, 0));
        assert_eq!(&moved.segments()[1..], snake.segments());
        // input untouched
        assert_eq!(snake.head(), Cell::new(100, 0));
    }

    #[test]
    fn test_advance_without_food_drops_tail() {
        let snake = Snake::initial(5, 25);
        let mut moved = advance(&snake, right());
        assert!(!check_consumption(moved.head(), Cell::new(300, 300)));
        moved.drop_tail();

        assert_eq!(
            moved.segments(),
            &[
                Cell::new(125, 0),
                Cell::new(100, 0),
                Cell::new(75, 0),
                Cell::new(50, 0),
                Cell::new(25, 0),
            ]
        );
    }

    #[test]
    fn test_head_is_old_head_plus_velocity() {
        let snake = Snake::new(Cell::new(250, 250), Direction::Up, 4, 25);
        for direction in [Direction::Up, Direction::Left, Direction::Right] {
            let velocity = Velocity::toward(direction, 25);
            assert_eq!(advance(&snake, velocity).head(), snake.head() + velocity);
        }
    }

    #[test]
    fn test_consumption_is_exact_equality() {
        assert!(check_consumption(Cell::new(50, 75), Cell::new(50, 75)));
        assert!(!check_consumption(Cell::new(50, 75), Cell::new(75, 50)));
        assert!(!check_consumption(Cell::new(50, 75), Cell::new(50, 100)));
    }

    #[test]
    fn test_wall_collision() {
        let grid = Grid::default();
        assert!(check_game_over(Cell::new(500, 0), &[], &grid));
        assert!(check_game_over(Cell::new(-25, 0), &[], &grid));
        assert!(check_game_over(Cell::new(0, 500), &[], &grid));
        assert!(check_game_over(Cell::new(0, -25), &[], &grid));
        assert!(!check_game_over(Cell::new(475, 475), &[], &grid));
        assert_eq!(
            detect_collision(Cell::new(500, 0), &[], &grid),
            Some(CollisionType::Wall)
        );
    }

    #[test]
    fn test_self_collision() {
        let grid = Grid::default();
        let body = [Cell::new(100, 100), Cell::new(75, 100), Cell::new(75, 125)];

        assert!(check_game_over(Cell::new(75, 125), &body, &grid));
        assert!(!check_game_over(Cell::new(125, 100), &body, &grid));
        assert_eq!(
            detect_collision(Cell::new(75, 100), &body, &grid),
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_high_score_defaults_to_zero() {
        let high = HighScore::load(Box::new(MemoryStore::new()));
        assert_eq!(high.value(), 0);

        let garbled = HighScore::load(Box::new(MemoryStore::with_entry(HIGH_SCORE_KEY, "lots")));
        assert_eq!(garbled.value(), 0);
    }

    #[test]
    fn test_high_score_loads_stored_value() {
        let high = HighScore::load(Box::new(MemoryStore::with_entry(HIGH_SCORE_KEY, "17")));
        assert_eq!(high.value(), 17);
    }

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().set(key, value)
        }
    }

    #[test]
    fn test_high_score_only_rises() {
        let shared = SharedStore::default();
        let mut high = HighScore::load(Box::new(shared.clone()));

        assert!(high.observe(3));
        assert!(!high.observe(2));
        assert!(!high.observe(3));
        assert_eq!(high.value(), 3);
        assert_eq!(shared.get(HIGH_SCORE_KEY).as_deref(), Some("3"));

        assert!(high.observe(5));
        assert_eq!(shared.get(HIGH_SCORE_KEY).as_deref(), Some("5"));
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn test_high_score_survives_store_failure() {
        let mut high = HighScore::load(Box::new(FailingStore));
        assert!(high.observe(4));
        assert_eq!(high.value(), 4);
    }
}
