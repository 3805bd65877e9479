//! Parking: every car has to be moved into its own slot. Cars are `A` to `J`,
//! slot `i` belongs to car number `i` (`0` to `A`, `1` to `B` and so on).
//! Moving a car costs more the earlier its letter, and entering a slot owned
//! by another car carries a heavy penalty.

use crate::{
    problems::{
        grid::{Direction, ParseDirectionError, Point},
        level_lines, LevelError,
    },
    search::{Problem, ProblemError},
};
use itertools::Itertools;
use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display, Formatter},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

const MAX_CARS: usize = 10;
/// Moving car `i` costs `BASE_COST - i`.
const BASE_COST: f64 = 26.;
const FOREIGN_SLOT_PENALTY: f64 = 100.;

/// Positions of the cars, indexed by car number.
pub type ParkingState = Vec<Point>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParkingAction {
    pub car: usize,
    pub direction: Direction,
}

pub fn car_letter(car: usize) -> char {
    (b'A' + car as u8) as char
}

impl Display for ParkingAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", car_letter(self.car), self.direction)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseParkingActionError {
    #[error("expected a car letter and a direction, got {0:?}")]
    Malformed(String),
    #[error("invalid car {0:?}")]
    InvalidCar(String),
    #[error(transparent)]
    InvalidDirection(#[from] ParseDirectionError),
}

impl FromStr for ParkingAction {
    type Err = ParseParkingActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(car), Some(direction), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseParkingActionError::Malformed(s.to_string()));
        };
        let car = match car.as_bytes() {
            [c @ b'A'..=b'J'] => (c - b'A') as usize,
            _ => return Err(ParseParkingActionError::InvalidCar(car.to_string())),
        };
        Ok(ParkingAction {
            car,
            direction: direction.parse()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ParkingProblem {
    width: usize,
    height: usize,
    passages: HashSet<Point>,
    /// Slot positions mapped to the car that owns them
    slots: HashMap<Point, usize>,
    cars: ParkingState,
}

impl ParkingProblem {
    pub fn from_text(text: &str) -> Result<Self, LevelError> {
        let lines = level_lines(text)?;
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let height = lines.len();

        let mut passages = HashSet::new();
        let mut cars = [None; MAX_CARS];
        let mut slots = HashMap::new();
        let mut seen_slots = [false; MAX_CARS];

        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                match c {
                    '#' => continue,
                    '.' => {}
                    'A'..='J' => {
                        let car = (c as u8 - b'A') as usize;
                        if cars[car].replace(point).is_some() {
                            return Err(LevelError::DuplicateCar { car: c });
                        }
                    }
                    '0'..='9' => {
                        let slot = (c as u8 - b'0') as usize;
                        if std::mem::replace(&mut seen_slots[slot], true) {
                            return Err(LevelError::DuplicateSlot { slot: c });
                        }
                        slots.insert(point, slot);
                    }
                    _ => {
                        return Err(LevelError::InvalidTile {
                            tile: c,
                            line: y + 1,
                            column: x + 1,
                        })
                    }
                }
                passages.insert(point);
            }
        }

        let num_cars = cars.iter().filter(|car| car.is_some()).count();
        if num_cars == 0 {
            return Err(LevelError::NoCars);
        }
        let cars: ParkingState = cars[..num_cars]
            .iter()
            .enumerate()
            .map(|(i, car)| car.ok_or(LevelError::MissingCar { car: car_letter(i) }))
            .collect::<Result<_, _>>()?;
        if let Some(&slot) = slots.values().find(|&&slot| slot >= num_cars) {
            return Err(LevelError::SlotWithoutCar {
                slot: (b'0' + slot as u8) as char,
            });
        }

        Ok(Self {
            width,
            height,
            passages,
            slots,
            cars,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, LevelError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    /// The slot owned by `car`, if it has one.
    pub fn slot_of(&self, car: usize) -> Option<Point> {
        self.slots
            .iter()
            .find(|&(_, &owner)| owner == car)
            .map(|(&point, _)| point)
    }

    /// The cost of moving a car once, before any penalty.
    pub fn base_cost(car: usize) -> f64 {
        BASE_COST - car as f64
    }

    fn target(&self, state: &ParkingState, action: &ParkingAction) -> Option<Point> {
        let target = *state.get(action.car)? + action.direction;
        (self.passages.contains(&target) && !state.contains(&target)).then_some(target)
    }

    pub fn render(&self, state: &ParkingState) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let point = Point::new(x as i32, y as i32);
                        if let Some(car) = state.iter().position(|&p| p == point) {
                            car_letter(car)
                        } else if let Some(&slot) = self.slots.get(&point) {
                            (b'0' + slot as u8) as char
                        } else if self.passages.contains(&point) {
                            '.'
                        } else {
                            '#'
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}

impl Problem for ParkingProblem {
    type State = ParkingState;
    type Action = ParkingAction;

    fn initial_state(&self) -> ParkingState {
        self.cars.clone()
    }

    fn is_goal(&self, state: &ParkingState) -> bool {
        self.slots
            .iter()
            .all(|(point, &car)| state.get(car) == Some(point))
    }

    fn actions(&self, state: &ParkingState) -> Vec<ParkingAction> {
        let mut actions = Vec::new();
        for car in 0..state.len() {
            for direction in Direction::ALL {
                let action = ParkingAction { car, direction };
                if self.target(state, &action).is_some() {
                    actions.push(action);
                }
            }
        }
        actions
    }

    fn successor(
        &self,
        state: &ParkingState,
        action: &ParkingAction,
    ) -> Result<ParkingState, ProblemError> {
        let target = self
            .target(state, action)
            .ok_or_else(|| ProblemError::invalid_action(action, self.render(state)))?;
        let mut successor = state.clone();
        successor[action.car] = target;
        Ok(successor)
    }

    fn cost(&self, state: &ParkingState, action: &ParkingAction) -> Result<f64, ProblemError> {
        let target = self
            .target(state, action)
            .ok_or_else(|| ProblemError::invalid_action(action, self.render(state)))?;
        let mut cost = Self::base_cost(action.car);
        if matches!(self.slots.get(&target), Some(&owner) if owner != action.car) {
            cost += FOREIGN_SLOT_PENALTY;
        }
        Ok(cost)
    }
}
