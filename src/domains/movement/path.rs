use super::coordinate::Coordinate;
use super::direction::{Axis, Direction};
use super::pace::Pace;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyed view of a pace: `{direction -> magnitude}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PMap(BTreeMap<Direction, Coordinate>);

impl PMap {
    pub fn singleton(direction: Direction, value: Coordinate) -> Self {
        let mut map = BTreeMap::new();
        map.insert(direction, value);
        Self(map)
    }

    pub fn get(&self, direction: Direction) -> Option<Coordinate> {
        self.0.get(&direction).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Direction, &Coordinate)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuilds the pace this map was derived from.
    pub fn to_pace(&self) -> DomainResult<Pace> {
        let mut entries = self.0.iter();
        let (direction, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(DomainError::InvalidPointMap {
                    entries: self.0.len(),
                })
            }
        };
        match direction.axis() {
            Some(Axis::X) => Ok(Pace::from_parts(*value, Coordinate::ZERO, *direction)),
            Some(Axis::Y) => Ok(Pace::from_parts(Coordinate::ZERO, *value, *direction)),
            None => Err(DomainError::UnrecognizedDirection {
                direction: direction.to_string(),
                operation: "PMap::to_pace".to_string(),
            }),
        }
    }
}

/// Ordered record of the paces taken during one action.
///
/// Ticked actions pre-size the path to the expected number of ticks and fill
/// slots by index; instantaneous moves append. Unfilled slots stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    paces: Vec<Option<Pace>>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(len: usize) -> Self {
        Self {
            paces: vec![None; len],
        }
    }

    /// Writes `pace` into slot `index`, growing the path if needed.
    pub fn set(&mut self, index: usize, pace: Pace) {
        if index >= self.paces.len() {
            self.paces.resize(index + 1, None);
        }
        self.paces[index] = Some(pace);
    }

    pub fn push(&mut self, pace: Pace) {
        self.paces.push(Some(pace));
    }

    /// Appends the populated paces of `other`, dropping its empty slots.
    pub fn extend_from(&mut self, other: &Path) {
        self.paces.extend(other.paces().map(|p| Some(*p)));
    }

    pub fn slot(&self, index: usize) -> Option<&Pace> {
        self.paces.get(index).and_then(Option::as_ref)
    }

    /// Number of slots, populated or not.
    pub fn len(&self) -> usize {
        self.paces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paces.is_empty()
    }

    pub fn populated_count(&self) -> usize {
        self.paces.iter().filter(|p| p.is_some()).count()
    }

    pub fn paces(&self) -> impl Iterator<Item = &Pace> {
        self.paces.iter().flatten()
    }

    /// Keyed view of every populated slot, in order.
    pub fn magnitudes(&self) -> DomainResult<Vec<PMap>> {
        self.paces().map(Pace::to_point_map).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right(n: i64) -> Pace {
        let mut p = Pace::new(Direction::Right);
        p.scalar_move(Coordinate::new(n)).unwrap();
        p
    }

    #[test]
    fn test_presized_path_fills_by_index() {
        let mut path = Path::with_slots(3);
        assert_eq!(path.len(), 3);
        assert_eq!(path.populated_count(), 0);

        path.set(2, right(4));
        path.set(0, right(1));
        assert_eq!(path.populated_count(), 2);
        assert!(path.slot(1).is_none());
        assert_eq!(path.slot(2).unwrap().x(), Coordinate::new(4));
    }

    #[test]
    fn test_extend_from_skips_empty_slots() {
        let mut partial = Path::with_slots(4);
        partial.set(1, right(2));

        let mut total = Path::new();
        total.push(right(1));
        total.extend_from(&partial);
        assert_eq!(total.len(), 2);
        assert_eq!(total.populated_count(), 2);
    }

    #[test]
    fn test_magnitudes_derive_from_paces() {
        let mut path = Path::new();
        path.push(right(5));
        let maps = path.magnitudes().unwrap();
        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0].get(Direction::Right), Some(Coordinate::new(5)));
    }

    #[test]
    fn test_pmap_to_pace_requires_single_entry() {
        let empty = PMap::default();
        assert_eq!(
            empty.to_pace().unwrap_err(),
            DomainError::InvalidPointMap { entries: 0 }
        );

        let diagonal = PMap::singleton(Direction::Southeast, Coordinate::new(1));
        assert!(matches!(
            diagonal.to_pace(),
            Err(DomainError::UnrecognizedDirection { .. })
        ));
    }

    #[test]
    fn test_pmap_to_pace_assigns_by_axis() {
        let pace = PMap::singleton(Direction::North, Coordinate::new(9))
            .to_pace()
            .unwrap();
        assert_eq!(pace.y(), Coordinate::new(9));
        assert_eq!(pace.x(), Coordinate::ZERO);
        assert_eq!(pace.direction(), Direction::North);
    }
}
