//! Sokoban: the player walks the grid and pushes crates, one at a time, until
//! every crate rests on a goal.

use crate::{
    problems::{
        grid::{Direction, Point},
        level_lines, LevelError,
    },
    search::{Problem, ProblemError},
};
use itertools::Itertools;
use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SokobanTile {
    Empty,
    Wall,
    Crate,
    Goal,
    Player,
    CrateOnGoal,
    PlayerOnGoal,
}

impl SokobanTile {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(SokobanTile::Empty),
            '#' => Some(SokobanTile::Wall),
            '$' => Some(SokobanTile::Crate),
            '.' => Some(SokobanTile::Goal),
            '@' => Some(SokobanTile::Player),
            '*' => Some(SokobanTile::CrateOnGoal),
            '+' => Some(SokobanTile::PlayerOnGoal),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            SokobanTile::Empty => ' ',
            SokobanTile::Wall => '#',
            SokobanTile::Crate => '$',
            SokobanTile::Goal => '.',
            SokobanTile::Player => '@',
            SokobanTile::CrateOnGoal => '*',
            SokobanTile::PlayerOnGoal => '+',
        }
    }
}

/// The part of a Sokoban level that changes between states. Crates are kept
/// in a sorted set so equal configurations hash the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SokobanState {
    pub player: Point,
    pub crates: BTreeSet<Point>,
}

/// A Sokoban level. The layout (walls and goals) is shared by every state.
#[derive(Debug, Clone)]
pub struct SokobanProblem {
    width: usize,
    height: usize,
    walkable: HashSet<Point>,
    goals: BTreeSet<Point>,
    initial_state: SokobanState,
}

impl SokobanProblem {
    pub fn from_text(text: &str) -> Result<Self, LevelError> {
        let lines = level_lines(text)?;
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let height = lines.len();

        let mut walkable = HashSet::new();
        let mut goals = BTreeSet::new();
        let mut crates = BTreeSet::new();
        let mut player = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let tile = SokobanTile::from_char(c).ok_or(LevelError::InvalidTile {
                    tile: c,
                    line: y + 1,
                    column: x + 1,
                })?;
                if tile == SokobanTile::Wall {
                    continue;
                }
                let point = Point::new(x as i32, y as i32);
                walkable.insert(point);
                match tile {
                    SokobanTile::Player | SokobanTile::PlayerOnGoal => {
                        if player.replace(point).is_some() {
                            return Err(LevelError::MultiplePlayers);
                        }
                    }
                    SokobanTile::Crate | SokobanTile::CrateOnGoal => {
                        crates.insert(point);
                    }
                    _ => {}
                }
                if matches!(
                    tile,
                    SokobanTile::Goal | SokobanTile::CrateOnGoal | SokobanTile::PlayerOnGoal
                ) {
                    goals.insert(point);
                }
            }
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;
        Ok(Self {
            width,
            height,
            walkable,
            goals,
            initial_state: SokobanState { player, crates },
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, LevelError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn goals(&self) -> &BTreeSet<Point> {
        &self.goals
    }

    pub fn is_walkable(&self, point: Point) -> bool {
        self.walkable.contains(&point)
    }

    fn is_legal(&self, state: &SokobanState, direction: Direction) -> bool {
        let target = state.player + direction;
        if !self.is_walkable(target) {
            return false;
        }
        if state.crates.contains(&target) {
            let pushed_to = target + direction;
            return self.is_walkable(pushed_to) && !state.crates.contains(&pushed_to);
        }
        true
    }

    /// Draw `state` on the level grid using the level file tiles.
    pub fn render(&self, state: &SokobanState) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.tile_at(state, Point::new(x as i32, y as i32)).to_char())
                    .collect::<String>()
            })
            .join("\n")
    }

    fn tile_at(&self, state: &SokobanState, point: Point) -> SokobanTile {
        let on_goal = self.goals.contains(&point);
        if !self.is_walkable(point) {
            SokobanTile::Wall
        } else if point == state.player {
            if on_goal {
                SokobanTile::PlayerOnGoal
            } else {
                SokobanTile::Player
            }
        } else if state.crates.contains(&point) {
            if on_goal {
                SokobanTile::CrateOnGoal
            } else {
                SokobanTile::Crate
            }
        } else if on_goal {
            SokobanTile::Goal
        } else {
            SokobanTile::Empty
        }
    }
}

impl Problem for SokobanProblem {
    type State = SokobanState;
    type Action = Direction;

    fn initial_state(&self) -> SokobanState {
        self.initial_state.clone()
    }

    fn is_goal(&self, state: &SokobanState) -> bool {
        state.crates == self.goals
    }

    fn actions(&self, state: &SokobanState) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_legal(state, direction))
            .collect()
    }

    fn successor(
        &self,
        state: &SokobanState,
        action: &Direction,
    ) -> Result<SokobanState, ProblemError> {
        if !self.is_legal(state, *action) {
            return Err(ProblemError::invalid_action(action, self.render(state)));
        }
        let player = state.player + *action;
        let mut crates = state.crates.clone();
        if crates.remove(&player) {
            crates.insert(player + *action);
        }
        Ok(SokobanState { player, crates })
    }

    fn cost(&self, state: &SokobanState, action: &Direction) -> Result<f64, ProblemError> {
        if !self.is_legal(state, *action) {
            return Err(ProblemError::invalid_action(action, self.render(state)));
        }
        Ok(1.)
    }
}
