//! Core types shared across the application.
//! This crate contains pure data types with no external dependencies.

/// Board dimensions (the board is always square).
pub const GRID_SIZE: u8 = 4;

/// Total number of cells on the board.
pub const TILE_COUNT: u8 = GRID_SIZE * GRID_SIZE;

/// A single board cell value. `0` is empty; every non-zero value is a
/// power of two >= 2.
pub type Tile = u32;

/// Empty cell marker.
pub const EMPTY: Tile = 0;

/// Number of equally likely outcomes in the spawn-value draw.
pub const SPAWN_DRAWS: u32 = 10;

/// The single draw outcome that spawns a 4 instead of a 2.
///
/// One outcome out of [`SPAWN_DRAWS`], so a new tile is a 4 with
/// probability 1/10 and a 2 otherwise.
pub const SPAWN_FOUR_DRAW: u32 = 9;

/// Slide directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order (useful for exhaustive tests).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions produced by input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Game lifecycle phase.
///
/// `Playing -> GameOver` when no legal move exists after a spawn;
/// `GameOver -> Playing` only via an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}
