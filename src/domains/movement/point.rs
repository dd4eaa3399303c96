use super::coordinate::Coordinate;
use super::direction::{Axis, Direction};
use super::displacement::Displacement;
use super::pace::Pace;
use super::path::Path;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Absolute position of the agent, or an axis-wise delta when used as a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    pub const ORIGIN: Point = Point {
        x: Coordinate::ZERO,
        y: Coordinate::ZERO,
    };

    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    pub fn is_origin(&self) -> bool {
        *self == Point::ORIGIN
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (other.x - self.x).to_int() as f64;
        let dy = (other.y - self.y).to_int() as f64;
        (dx.powi(2) + dy.powi(2)).sqrt()
    }

    /// Splits this point, read as a delta, into at most two single-axis paces.
    ///
    /// Slot 0 holds the LEFT/RIGHT pace, slot 1 the BACKWARD/FORWARD pace; a
    /// zero component leaves its slot empty.
    pub fn path_from_origin(&self) -> DomainResult<Path> {
        let mut path = Path::with_slots(2);
        if let Some(direction) = horizontal(self.x) {
            let mut pace = Pace::new(direction);
            pace.scalar_move(self.x)?;
            path.set(0, pace);
        }
        if let Some(direction) = vertical(self.y) {
            let mut pace = Pace::new(direction);
            pace.scalar_move(self.y)?;
            path.set(1, pace);
        }
        Ok(path)
    }

    /// Component-wise sum that fails instead of leaving the grid.
    pub fn checked_add(&self, delta: Point) -> DomainResult<Point> {
        Ok(Point::new(
            self.x.checked_add(delta.x)?,
            self.y.checked_add(delta.y)?,
        ))
    }

    /// Adds `by` to the axis `direction` runs along, whatever its polarity.
    pub fn advanced(&self, direction: Direction, by: Coordinate) -> DomainResult<Point> {
        match direction.axis() {
            Some(Axis::X) => Ok(Point::new(self.x.checked_add(by)?, self.y)),
            Some(Axis::Y) => Ok(Point::new(self.x, self.y.checked_add(by)?)),
            None => Err(DomainError::UnrecognizedDirection {
                direction: direction.to_string(),
                operation: "Point::advanced".to_string(),
            }),
        }
    }

    pub fn displacement_to(&self, other: &Point) -> DomainResult<Displacement> {
        Displacement::between(*self, *other)
    }
}

fn horizontal(x: Coordinate) -> Option<Direction> {
    match x.to_int() {
        v if v < 0 => Some(Direction::Left),
        v if v > 0 => Some(Direction::Right),
        _ => None,
    }
}

fn vertical(y: Coordinate) -> Option<Direction> {
    match y.to_int() {
        v if v < 0 => Some(Direction::Backward),
        v if v > 0 => Some(Direction::Forward),
        _ => None,
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(Coordinate::new(x), Coordinate::new(y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
