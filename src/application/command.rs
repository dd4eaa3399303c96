use crate::common::{ApplicationError, ApplicationResult, DomainResult};
use crate::config::ActionSpec;
use crate::domains::movement::{
    ActionTrace, Coordinate, Direction, Hare, TravelOutcome, MAX_TRAVEL_SECS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A typed instruction for the movement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move { dx: Coordinate, dy: Coordinate },
    Walk { duration: Duration, direction: Direction },
    Run { duration: Duration, direction: Direction },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Moved(ActionTrace),
    Travelled(TravelOutcome),
}

impl Command {
    pub async fn execute(&self, hare: &Hare) -> DomainResult<CommandOutcome> {
        match *self {
            Command::Move { dx, dy } => hare.move_by(dx, dy).await.map(CommandOutcome::Moved),
            Command::Walk { duration, direction } => hare
                .walk(duration, direction)
                .await
                .map(CommandOutcome::Travelled),
            Command::Run { duration, direction } => hare
                .run(duration, direction)
                .await
                .map(CommandOutcome::Travelled),
        }
    }
}

impl ActionSpec {
    /// Translates the record at position `index` of the action list.
    pub fn into_command(&self, index: usize) -> ApplicationResult<Command> {
        let invalid = |reason: String| ApplicationError::InvalidAction { index, reason };

        if self.duration < 0 {
            return Err(invalid(format!("duration {} is negative", self.duration)));
        }
        if self.duration as u64 > MAX_TRAVEL_SECS {
            return Err(invalid(format!(
                "duration {} exceeds {} seconds",
                self.duration, MAX_TRAVEL_SECS
            )));
        }
        let duration = Duration::from_secs(self.duration as u64);
        let direction = || {
            Direction::from_code(&self.direction)
                .ok_or_else(|| invalid(format!("direction {:?} not recognized", self.direction)))
        };

        match self.name.as_str() {
            "walk" => Ok(Command::Walk {
                duration,
                direction: direction()?,
            }),
            "run" => Ok(Command::Run {
                duration,
                direction: direction()?,
            }),
            "move" => Ok(Command::Move {
                dx: Coordinate::new(self.x),
                dy: Coordinate::new(self.y),
            }),
            other => Err(invalid(format!("action {:?} not recognized", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_translation() {
        let cmd = ActionSpec::travel("walk", 5, "N").into_command(0).unwrap();
        assert_eq!(
            cmd,
            Command::Walk {
                duration: Duration::from_secs(5),
                direction: Direction::North
            }
        );
    }

    #[test]
    fn test_move_ignores_direction() {
        let spec = ActionSpec {
            name: "move".to_string(),
            x: 4,
            y: -1,
            ..ActionSpec::default()
        };
        assert_eq!(
            spec.into_command(2).unwrap(),
            Command::Move {
                dx: Coordinate::new(4),
                dy: Coordinate::new(-1)
            }
        );
    }

    #[test]
    fn test_translation_errors_carry_index() {
        let negative = ActionSpec::travel("run", -1, "E").into_command(3).unwrap_err();
        assert!(matches!(negative, ApplicationError::InvalidAction { index: 3, .. }));

        let bad_dir = ActionSpec::travel("walk", 1, "NE").into_command(0).unwrap_err();
        assert!(bad_dir.to_string().contains("direction"));

        let bad_name = ActionSpec::travel("crawl", 1, "N").into_command(1).unwrap_err();
        assert!(bad_name.to_string().contains("crawl"));
    }

    #[test]
    fn test_duration_bound() {
        let longest = MAX_TRAVEL_SECS as i64;
        assert!(ActionSpec::travel("walk", longest, "S").into_command(0).is_ok());

        let err = ActionSpec::travel("walk", longest + 1, "S").into_command(4).unwrap_err();
        match err {
            ApplicationError::InvalidAction { index, reason } => {
                assert_eq!(index, 4);
                assert!(reason.contains("exceeds"));
            }
            other => panic!("Expected InvalidAction, got {:?}", other),
        }
    }
}
