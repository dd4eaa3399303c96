use super::coordinate::{Coordinate, Sign};
use super::direction::{Axis, Direction};
use super::path::PMap;
use super::point::Point;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One quantified movement along a single axis.
///
/// Only the component selected by `direction` is meaningful, the other stays
/// zero. A pace is built fresh for every tick or instantaneous move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    x: Coordinate,
    y: Coordinate,
    direction: Direction,
}

impl Pace {
    pub fn new(direction: Direction) -> Self {
        Self {
            x: Coordinate::ZERO,
            y: Coordinate::ZERO,
            direction,
        }
    }

    pub(crate) fn from_parts(x: Coordinate, y: Coordinate, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn x(&self) -> Coordinate {
        self.x
    }

    pub fn y(&self) -> Coordinate {
        self.y
    }

    /// Moves the pace by `magnitude` along its own heading.
    pub fn scalar_move(&mut self, magnitude: Coordinate) -> DomainResult<()> {
        let (axis, polarity) = match (self.direction.axis(), self.direction.polarity()) {
            (Some(axis), Some(polarity)) => (axis, polarity),
            _ => return Err(self.unrecognized("scalar_move")),
        };
        let component = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        if polarity > 0 {
            *component += magnitude;
        } else {
            *component -= magnitude;
        }
        Ok(())
    }

    /// The component selected by the heading.
    pub fn result(&self) -> DomainResult<Coordinate> {
        match self.direction.axis() {
            Some(Axis::X) => Ok(self.x),
            Some(Axis::Y) => Ok(self.y),
            None => Err(self.unrecognized("result")),
        }
    }

    pub fn magnitude(&self) -> DomainResult<Coordinate> {
        self.result().map(Coordinate::abs)
    }

    pub fn to_point_map(&self) -> DomainResult<PMap> {
        Ok(PMap::singleton(self.direction, self.result()?))
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Merges two single-axis paces into one two-axis point.
    ///
    /// BACKWARD and LEFT form the negative side, RIGHT and FORWARD the
    /// positive side. Same-side pairs are summed and forced onto that side's
    /// sign; a negative-then-positive pair yields `other - self`, a
    /// positive-then-negative pair yields `self - other`.
    // NOTE: forcing the sign of a same-side sum inverts inputs that already
    // carry their sign. Kept for compatibility with recorded traces.
    pub fn combine_with(&self, other: &Pace) -> DomainResult<Point> {
        match (side(self.direction), side(other.direction)) {
            (Some(first), Some(second)) if first == second => {
                let mut x = self.x + other.x;
                let mut y = self.y + other.y;
                x.force_sign(first);
                y.force_sign(first);
                Ok(Point::new(x, y))
            }
            (Some(Sign::Neg), Some(Sign::Pos)) => {
                Ok(Point::new(other.x - self.x, other.y - self.y))
            }
            (Some(Sign::Pos), Some(Sign::Neg)) => {
                Ok(Point::new(self.x - other.x, self.y - other.y))
            }
            _ => Err(DomainError::UnrecognizedDirectionPair {
                first: self.direction.to_string(),
                second: other.direction.to_string(),
            }),
        }
    }

    fn unrecognized(&self, operation: &str) -> DomainError {
        DomainError::UnrecognizedDirection {
            direction: self.direction.to_string(),
            operation: format!("Pace::{}", operation),
        }
    }
}

fn side(direction: Direction) -> Option<Sign> {
    match direction {
        Direction::Backward | Direction::Left => Some(Sign::Neg),
        Direction::Right | Direction::Forward => Some(Sign::Pos),
        _ => None,
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(x={}, y={})", self.direction, self.x, self.y)
    }
}
