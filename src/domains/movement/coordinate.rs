use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Sign of a coordinate. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Pos,
    Neg,
}

/// A signed integer position or magnitude along one axis.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Coordinate(i64);

impl Coordinate {
    pub const ZERO: Coordinate = Coordinate(0);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn to_int(self) -> i64 {
        self.0
    }

    pub fn sign(self) -> Sign {
        if self.0 >= 0 {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Addition that reports leaving the `i64` grid instead of clamping.
    pub fn checked_add(self, rhs: Coordinate) -> DomainResult<Coordinate> {
        self.0
            .checked_add(rhs.0)
            .map(Coordinate)
            .ok_or(DomainError::CoordinateOverflow {
                value: self.0,
                delta: rhs.0,
            })
    }

    /// Turns a non-negative coordinate negative. Zero stays zero.
    pub fn negate(&mut self) -> DomainResult<()> {
        if self.0 < 0 {
            return Err(DomainError::InvalidSignTransition {
                value: self.0,
                target: "negative".to_string(),
            });
        }
        self.0 = -self.0;
        Ok(())
    }

    /// Turns a non-positive coordinate positive. Zero stays zero.
    pub fn denegate(&mut self) -> DomainResult<()> {
        if self.0 > 0 {
            return Err(DomainError::InvalidSignTransition {
                value: self.0,
                target: "positive".to_string(),
            });
        }
        self.0 = self.0.saturating_neg();
        Ok(())
    }

    /// Forces the sign, treating an already matching sign as a no-op.
    pub fn force_sign(&mut self, sign: Sign) {
        // InvalidSignTransition means the value is already on the requested side
        let _ = match sign {
            Sign::Neg => self.negate(),
            Sign::Pos => self.denegate(),
        };
    }
}

impl From<i64> for Coordinate {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Coordinate> for i64 {
    fn from(value: Coordinate) -> Self {
        value.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Operators saturate at the i64 bounds. The engine itself moves through
// `checked_add` so overflow surfaces as an error there.
impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        Coordinate(self.0.saturating_neg())
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Coordinate) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

/// Per-tick magnitude applied during walk and run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(i64);

impl Speed {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn to_int(self) -> i64 {
        self.0
    }

    pub fn as_coordinate(self) -> Coordinate {
        Coordinate(self.0)
    }
}

impl From<i64> for Speed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_treats_zero_as_positive() {
        assert_eq!(Coordinate::new(0).sign(), Sign::Pos);
        assert_eq!(Coordinate::new(7).sign(), Sign::Pos);
        assert_eq!(Coordinate::new(-1).sign(), Sign::Neg);
    }

    #[test]
    fn test_negate_then_denegate_restores_value() {
        for raw in [0, 1, 42, 1_000_000] {
            let mut c = Coordinate::new(raw);
            c.negate().unwrap();
            c.denegate().unwrap();
            assert_eq!(c, Coordinate::new(raw));
        }
    }

    #[test]
    fn test_negate_rejects_negative() {
        let mut c = Coordinate::new(-3);
        let err = c.negate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidSignTransition { value: -3, .. }));
        assert_eq!(c, Coordinate::new(-3));
    }

    #[test]
    fn test_denegate_rejects_positive() {
        let mut c = Coordinate::new(5);
        assert!(c.denegate().is_err());
        assert_eq!(c, Coordinate::new(5));
    }

    #[test]
    fn test_checked_add_reports_overflow() {
        let edge = Coordinate::new(i64::MAX);
        assert_eq!(
            edge.checked_add(Coordinate::new(1)),
            Err(DomainError::CoordinateOverflow {
                value: i64::MAX,
                delta: 1
            })
        );
        assert_eq!(
            Coordinate::new(-5).checked_add(Coordinate::new(3)),
            Ok(Coordinate::new(-2))
        );
    }

    #[test]
    fn test_operators_saturate() {
        assert_eq!(
            Coordinate::new(i64::MAX) + Coordinate::new(1),
            Coordinate::new(i64::MAX)
        );
        assert_eq!(
            Coordinate::new(i64::MIN) - Coordinate::new(1),
            Coordinate::new(i64::MIN)
        );
        assert_eq!(Coordinate::new(i64::MIN).abs(), Coordinate::new(i64::MAX));

        let mut c = Coordinate::new(i64::MIN);
        c.denegate().unwrap();
        assert_eq!(c, Coordinate::new(i64::MAX));
    }

    #[test]
    fn test_force_sign_is_idempotent() {
        let mut c = Coordinate::new(4);
        c.force_sign(Sign::Neg);
        c.force_sign(Sign::Neg);
        assert_eq!(c, Coordinate::new(-4));
        c.force_sign(Sign::Pos);
        assert_eq!(c, Coordinate::new(4));
    }
}
