use serde::{Serialize, Deserialize};

use crate::config::game::GRID_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    /// Build a coordinate, or `None` if it falls outside the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Triangle];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeColor {
    Red,
    Blue,
    Green,
    /// Only used to separate a "different" pair whose random draw collided.
    Black,
}

impl ShapeColor {
    /// Colors a random draw can produce.
    pub const DRAWABLE: [ShapeColor; 3] = [ShapeColor::Red, ShapeColor::Blue, ShapeColor::Green];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub color: ShapeColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistractionPair {
    pub left: ShapeDescriptor,
    pub right: ShapeDescriptor,
}

impl DistractionPair {
    pub fn is_identical(&self) -> bool {
        self.left == self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Phase {
    Idle,
    Flashing { step: usize },
    Distraction { step: usize },
    Recalling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallOutcome {
    Ignored,
    Correct,
    Wrong,
    Complete,
}

/// Result messages handed to the player. The front-end decides how to show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Notification {
    LevelComplete { completed: u8, next: u8 },
    GameComplete { completed: u8 },
    WrongClick { level: u8 },
    TimeExpired { level: u8 },
}

impl Notification {
    pub fn message(&self) -> String {
        match self {
            Notification::LevelComplete { .. } => "Correct! Moving to next level.".to_string(),
            Notification::GameComplete { completed } => {
                format!("Champion! You finished all {} Levels!", completed)
            }
            Notification::WrongClick { level } => format!(
                "Wrong! You must click in the exact order (1, 2, 3...). Restarting Level {}.",
                level
            ),
            Notification::TimeExpired { level } => {
                format!("Time's up! You must be faster. Restarting Level {}.", level)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Dot,
    Flash,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub state: CellState,
    /// 1-based ordinal shown inside the cell, if any.
    pub label: Option<usize>,
}

impl CellView {
    pub const DOT: CellView = CellView { state: CellState::Dot, label: None };
}

/// Read-only view of a session, sent to the front-end after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub level: u8,
    pub max_level: u8,
    pub grid_size: usize,
    /// Coordinates revealed so far. Empty outside the flashing phase.
    pub revealed: Vec<GridCoordinate>,
    pub target_len: usize,
    pub flashing: Option<GridCoordinate>,
    pub distraction: Option<DistractionPair>,
    pub clicks: Vec<GridCoordinate>,
    pub seconds_remaining: Option<u32>,
    pub low_time: bool,
    pub board: Vec<Vec<CellView>>,
    pub start_label: String,
}
