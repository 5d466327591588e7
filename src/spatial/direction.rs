//! Cardinal directions shared by edge labels and grid adjacency
//!
//! Directions are indexed clockwise starting at `Up`, which is the order edge
//! labels are listed in a tile definition. `Up` points toward larger `y`.

use std::fmt;

/// One of the four sides of a tile or grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward `y + 1`
    Up,
    /// Toward `x + 1`
    Right,
    /// Toward `y - 1`
    Down,
    /// Toward `x - 1`
    Left,
}

impl Direction {
    /// All directions in clockwise index order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Clockwise index with `Up = 0`
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Direction for a clockwise index, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Up,
            1 => Self::Right,
            2 => Self::Down,
            _ => Self::Left,
        }
    }

    /// The direction facing back toward the origin
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Unit step `[dx, dy]` taken when moving one cell in this direction
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Up => [0, 1],
            Self::Right => [1, 0],
            Self::Down => [0, -1],
            Self::Left => [-1, 0],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}
