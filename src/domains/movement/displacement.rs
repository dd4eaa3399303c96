use super::direction::Direction;
use super::point::Point;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Directional and quantitative relation between two points. Derived on
/// demand, never stored on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub from: Point,
    pub to: Point,
    pub direction: Direction,
    pub quantity: f64,
}

impl Displacement {
    pub fn between(from: Point, to: Point) -> DomainResult<Self> {
        let direction = classify(&from, &to)?;
        Ok(Self {
            from,
            to,
            direction,
            quantity: from.distance_to(&to),
        })
    }
}

fn classify(p: &Point, q: &Point) -> DomainResult<Direction> {
    let direction = if p.x > q.x {
        if p.y > q.y {
            Direction::Northeast
        } else if q.y > p.y {
            Direction::Southeast
        } else {
            Direction::East
        }
    } else if q.x > p.x {
        if p.y > q.y {
            Direction::Northwest
        } else if q.y > p.y {
            Direction::Southwest
        } else {
            Direction::West
        }
    } else if q.y > p.y {
        Direction::North
    } else if p.y > q.y {
        Direction::South
    } else {
        return Err(DomainError::DegenerateDisplacement {
            point: p.to_string(),
        });
    };
    Ok(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disp(from: (i64, i64), to: (i64, i64)) -> Displacement {
        Point::from(from).displacement_to(&Point::from(to)).unwrap()
    }

    #[test]
    fn test_octants() {
        assert_eq!(disp((5, 5), (2, 2)).direction, Direction::Northeast);
        assert_eq!(disp((5, 1), (2, 2)).direction, Direction::Southeast);
        assert_eq!(disp((5, 2), (2, 2)).direction, Direction::East);
        assert_eq!(disp((0, 5), (2, 2)).direction, Direction::Northwest);
        assert_eq!(disp((0, 0), (3, 4)).direction, Direction::Southwest);
        assert_eq!(disp((0, 2), (2, 2)).direction, Direction::West);
        assert_eq!(disp((1, 1), (1, 4)).direction, Direction::North);
        assert_eq!(disp((1, 4), (1, 1)).direction, Direction::South);
    }

    #[test]
    fn test_quantity_is_euclidean() {
        assert_eq!(disp((0, 0), (3, 4)).quantity, 5.0);
        assert!((disp((5, 5), (2, 2)).quantity - 18f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_identical_points_are_degenerate() {
        let origin = Point::ORIGIN;
        assert!(matches!(
            origin.displacement_to(&origin),
            Err(DomainError::DegenerateDisplacement { .. })
        ));
        let p = Point::from((3, -1));
        assert!(p.displacement_to(&p).is_err());
    }
}
