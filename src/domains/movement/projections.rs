use super::direction::Direction;
use super::hare::{ActionKind, ActionTrace, HareState};
use super::pace::Pace;
use super::point::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read model of everything the agent has recorded so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceReport {
    pub agent_id: String,
    pub last_action: ActionKind,
    pub position: Point,
    pub paces: Vec<Pace>,
    pub all_positions: Vec<Point>,
    pub traces: Vec<ActionTrace>,
    pub generated_at: DateTime<Utc>,
}

impl TraceReport {
    pub(crate) fn from_state(agent_id: &str, state: &HareState) -> Self {
        Self {
            agent_id: agent_id.to_string(),
            last_action: state.action,
            position: state.position,
            paces: state.path_taken.paces().copied().collect(),
            all_positions: state.all_positions.clone(),
            traces: state.traces.clone(),
            generated_at: Utc::now(),
        }
    }
}

fn side_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward | Direction::North => "FORWARD",
        Direction::Backward | Direction::South => "BACKWARD",
        Direction::Right | Direction::West => "RIGHT",
        Direction::Left | Direction::East => "LEFT",
        other => other.as_str(),
    }
}

fn write_paces<'a>(
    f: &mut fmt::Formatter<'_>,
    paces: impl Iterator<Item = &'a Pace>,
) -> fmt::Result {
    for pace in paces {
        match pace.magnitude() {
            Ok(magnitude) => {
                write!(f, "MOVED {} BY {}; ", side_label(pace.direction()), magnitude)?
            }
            Err(_) => write!(f, "UNRESOLVED {}; ", pace)?,
        }
    }
    Ok(())
}

impl fmt::Display for TraceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", ActionKind::Total, self.agent_id)?;
        for trace in &self.traces {
            match trace.direction {
                Some(direction) => write!(f, "  {} {}: ", trace.action, direction)?,
                None => write!(f, "  {}: ", trace.action)?,
            }
            write_paces(f, trace.path.paces())?;
            writeln!(f)?;
        }
        write_paces(f, self.paces.iter())?;
        writeln!(f)?;
        write!(
            f,
            "CURRENT POS: \n\tX = {} \n\tY = {}\n",
            self.position.x, self.position.y
        )
    }
}
