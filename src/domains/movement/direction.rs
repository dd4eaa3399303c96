use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Compass and axis-relative headings.
///
/// The grid convention is inherited from the recorded traces: `NORTH` and
/// `FORWARD` grow Y, `SOUTH` and `BACKWARD` shrink it, `WEST` and `RIGHT` grow X,
/// `EAST` and `LEFT` shrink it. The two axis members move in the positive sense
/// of their axis. Diagonals only appear as displacement classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Forward,
    Backward,
    YAxis,
    Left,
    Right,
    XAxis,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 14] = [
        Direction::Forward,
        Direction::Backward,
        Direction::YAxis,
        Direction::Left,
        Direction::Right,
        Direction::XAxis,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Axis component a heading acts on. Diagonals have none.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Direction::Forward
            | Direction::Backward
            | Direction::YAxis
            | Direction::North
            | Direction::South => Some(Axis::Y),
            Direction::Left
            | Direction::Right
            | Direction::XAxis
            | Direction::East
            | Direction::West => Some(Axis::X),
            Direction::Northeast
            | Direction::Northwest
            | Direction::Southeast
            | Direction::Southwest => None,
        }
    }

    /// +1 when moving along this heading grows its axis, -1 when it shrinks it.
    pub fn polarity(self) -> Option<i64> {
        match self {
            Direction::Forward
            | Direction::North
            | Direction::YAxis
            | Direction::Right
            | Direction::West
            | Direction::XAxis => Some(1),
            Direction::Backward | Direction::South | Direction::Left | Direction::East => Some(-1),
            _ => None,
        }
    }

    /// Headings an agent can travel along during a ticked walk or run.
    pub fn is_heading(self) -> bool {
        !matches!(
            self,
            Direction::XAxis
                | Direction::YAxis
                | Direction::Northeast
                | Direction::Northwest
                | Direction::Southeast
                | Direction::Southwest
        )
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::YAxis => Direction::YAxis,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::XAxis => Direction::XAxis,
            Direction::Northeast => Direction::Southwest,
            Direction::Northwest => Direction::Southeast,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Resolves the single-letter compass codes used in action files.
    pub fn from_code(code: &str) -> Option<Direction> {
        match code {
            "N" => Some(Direction::North),
            "S" => Some(Direction::South),
            "E" => Some(Direction::East),
            "W" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "FORWARD",
            Direction::Backward => "BACKWARD",
            Direction::YAxis => "Y_AXIS",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::XAxis => "X_AXIS",
            Direction::Northeast => "NORTHEAST",
            Direction::Northwest => "NORTHWEST",
            Direction::Southeast => "SOUTHEAST",
            Direction::Southwest => "SOUTHWEST",
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
