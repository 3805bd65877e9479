//! Concrete puzzles that plug into the search engines through the
//! [`crate::search::Problem`] trait. Both are read from plain text grids.

pub mod grid;
mod parking;
mod parking_heuristics;
mod sokoban;
mod sokoban_heuristics;

pub use parking::{
    car_letter, ParkingAction, ParkingProblem, ParkingState, ParseParkingActionError,
};
pub use parking_heuristics::{weighted_manhattan_heuristic, ParkingHeuristicName};
pub use sokoban::{SokobanProblem, SokobanState, SokobanTile};
pub use sokoban_heuristics::{strong_heuristic, weak_heuristic, SokobanHeuristicName};

use thiserror::Error;

/// Failures while reading a level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("level is empty")]
    Empty,
    #[error("unknown tile {tile:?} at line {line}, column {column}")]
    InvalidTile {
        tile: char,
        line: usize,
        column: usize,
    },
    #[error("level has no player")]
    MissingPlayer,
    #[error("level has more than one player")]
    MultiplePlayers,
    #[error("level has no cars")]
    NoCars,
    #[error("car {car} appears more than once")]
    DuplicateCar { car: char },
    #[error("slot {slot} appears more than once")]
    DuplicateSlot { slot: char },
    #[error("car {car} is missing, cars must be numbered without gaps")]
    MissingCar { car: char },
    #[error("slot {slot} has no matching car")]
    SlotWithoutCar { slot: char },
}

/// Split level text into rows. Lines are trimmed and blank lines are dropped,
/// so levels may be indented or surrounded by empty lines.
pub(crate) fn level_lines(text: &str) -> Result<Vec<&str>, LevelError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(LevelError::Empty);
    }
    Ok(lines)
}
