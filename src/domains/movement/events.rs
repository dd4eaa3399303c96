use super::direction::Direction;
use super::hare::ActionKind;
use super::point::Point;
use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MovementEvent {
    AgentCreated {
        agent_id: String,
        walk_speed: i64,
        run_speed: i64,
        timestamp: DateTime<Utc>,
    },
    Moved {
        agent_id: String,
        delta: Point,
        new_position: Point,
        timestamp: DateTime<Utc>,
    },
    TravelStarted {
        agent_id: String,
        action: ActionKind,
        direction: Direction,
        expected_paces: usize,
        start_position: Point,
        timestamp: DateTime<Utc>,
    },
    TravelCompleted {
        agent_id: String,
        action: ActionKind,
        completed_paces: usize,
        final_position: Point,
        timestamp: DateTime<Utc>,
    },
    TravelEndedPrematurely {
        agent_id: String,
        action: ActionKind,
        completed_paces: usize,
        expected_paces: usize,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for MovementEvent {
    fn event_type(&self) -> &'static str {
        match self {
            MovementEvent::AgentCreated { .. } => "AgentCreated",
            MovementEvent::Moved { .. } => "Moved",
            MovementEvent::TravelStarted { .. } => "TravelStarted",
            MovementEvent::TravelCompleted { .. } => "TravelCompleted",
            MovementEvent::TravelEndedPrematurely { .. } => "TravelEndedPrematurely",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            MovementEvent::AgentCreated { agent_id, .. } => agent_id,
            MovementEvent::Moved { agent_id, .. } => agent_id,
            MovementEvent::TravelStarted { agent_id, .. } => agent_id,
            MovementEvent::TravelCompleted { agent_id, .. } => agent_id,
            MovementEvent::TravelEndedPrematurely { agent_id, .. } => agent_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            MovementEvent::AgentCreated { timestamp, .. } => *timestamp,
            MovementEvent::Moved { timestamp, .. } => *timestamp,
            MovementEvent::TravelStarted { timestamp, .. } => *timestamp,
            MovementEvent::TravelCompleted { timestamp, .. } => *timestamp,
            MovementEvent::TravelEndedPrematurely { timestamp, .. } => *timestamp,
        }
    }
}
