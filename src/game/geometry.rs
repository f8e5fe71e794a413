use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg};

use super::action::Direction;

/// A grid-aligned square on the board, in pixel coordinates
///
/// Both components are multiples of the unit size for every cell the game
/// produces; the board origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Velocity> for Cell {
    type Output = Cell;

    fn add(self, velocity: Velocity) -> Cell {
        Cell {
            x: self.x + velocity.dx,
            y: self.y + velocity.dy,
        }
    }
}

/// Movement per tick
///
/// Exactly one component is nonzero and its magnitude is the unit size.
/// Only [`Velocity::toward`] builds one, so the invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    dx: i32,
    dy: i32,
}

impl Velocity {
    /// Velocity of one unit in the given direction
    pub fn toward(direction: Direction, unit: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            dx: dx * unit,
            dy: dy * unit,
        }
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    /// The heading this velocity points along
    pub fn direction(&self) -> Direction {
        match (self.dx.signum(), self.dy.signum()) {
            (1, _) => Direction::Right,
            (-1, _) => Direction::Left,
            (_, 1) => Direction::Down,
            _ => Direction::Up,
        }
    }

    /// True if `other` would reverse this velocity in place
    pub fn is_reversed_by(&self, other: Velocity) -> bool {
        -*self == other
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Board dimensions and the size of one cell, all in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Side length of one cell
    pub unit: i32,
    /// Board width
    pub width: i32,
    /// Board height
    pub height: i32,
}

impl Grid {
    pub fn new(unit: i32, width: i32, height: i32) -> Self {
        Self {
            unit,
            width,
            height,
        }
    }

    /// Number of cell columns
    pub fn width_cells(&self) -> u32 {
        (self.width / self.unit) as u32
    }

    /// Number of cell rows
    pub fn height_cells(&self) -> u32 {
        (self.height / self.unit) as u32
    }

    /// Check if a cell lies within `[0, width) x [0, height)`
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Top-left pixel of the cell at column `col`, row `row`
    pub fn cell_at(&self, col: u32, row: u32) -> Cell {
        Cell::new(col as i32 * self.unit, row as i32 * self.unit)
    }

    /// Center of the board, where overlays are anchored
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(25, 500, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_plus_velocity() {
        let cell = Cell::new(100, 0);
        assert_eq!(cell + Velocity::toward(Direction::Right, 25), Cell::new(125, 0));
        assert_eq!(cell + Velocity::toward(Direction::Left, 25), Cell::new(75, 0));
        assert_eq!(cell + Velocity::toward(Direction::Down, 25), Cell::new(100, 25));
        assert_eq!(cell + Velocity::toward(Direction::Up, 25), Cell::new(100, -25));
    }

    #[test]
    fn test_velocity_has_one_unit_component() {
        for direction in Direction::ALL {
            let velocity = Velocity::toward(direction, 25);
            assert_eq!(velocity.dx().abs() + velocity.dy().abs(), 25);
            assert!(velocity.dx() == 0 || velocity.dy() == 0);
            assert_eq!(velocity.direction(), direction);
        }
    }

    #[test]
    fn test_reversal_detection() {
        for direction in Direction::ALL {
            let velocity = Velocity::toward(direction, 25);
            assert!(velocity.is_reversed_by(-velocity));
            assert!(!velocity.is_reversed_by(velocity));
        }
        let right = Velocity::toward(Direction::Right, 25);
        assert!(!right.is_reversed_by(Velocity::toward(Direction::Up, 25)));
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = Grid::default();
        assert_eq!(grid.width_cells(), 20);
        assert_eq!(grid.height_cells(), 20);
        assert_eq!(grid.cell_at(3, 2), Cell::new(75, 50));
        assert_eq!(grid.center(), (250, 250));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::default();
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(475, 475)));
        assert!(!grid.contains(Cell::new(-25, 0)));
        assert!(!grid.contains(Cell::new(500, 0)));
        assert!(!grid.contains(Cell::new(0, 500)));
        assert!(!grid.contains(Cell::new(0, -25)));
    }
}
