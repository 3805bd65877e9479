//! Points and moves on a 2D grid. `y` grows downwards, so the first line of a
//! level is row 0.

use std::{
    fmt::{self, Display, Formatter},
    ops::Add,
    str::FromStr,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, direction: Direction) -> Point {
        self + direction.to_vector()
    }
}

pub fn manhattan_distance(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Down,
    Left,
}

impl Direction {
    /// All directions, in the order actions are enumerated.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::Left,
    ];

    pub fn to_vector(self) -> Point {
        match self {
            Direction::Right => Point::new(1, 0),
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid direction {0:?}, expected one of R, U, D, L")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "R" | "r" => Ok(Direction::Right),
            "U" | "u" => Ok(Direction::Up),
            "D" | "d" => Ok(Direction::Down),
            "L" | "l" => Ok(Direction::Left),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_decreases_y() {
        assert_eq!(Point::new(2, 2) + Direction::Up, Point::new(2, 1));
        assert_eq!(Point::new(2, 2) + Direction::Left, Point::new(1, 2));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(manhattan_distance(a, b), 7);
        assert_eq!(manhattan_distance(b, a), 7);
        assert_eq!(manhattan_distance(a, a), 0);
    }

    #[test]
    fn directions_parse_from_their_display() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse(), Ok(direction));
        }
        assert_eq!(
            "X".parse::<Direction>(),
            Err(ParseDirectionError("X".to_string()))
        );
    }
}
