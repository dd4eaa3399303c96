use super::coordinate::{Coordinate, Speed};
use super::direction::Direction;
use super::events::MovementEvent;
use super::flow::{expected_paces, flow, travel_span, FlowRequest};
use super::path::Path;
use super::point::Point;
use super::projections::TraceReport;
use crate::common::{DomainError, DomainResult};
use crate::domains::logger::DynLogger;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Label of the most recent operation on the agent. It never gates what may
/// run next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Move,
    Walk,
    Run,
    Total,
    #[default]
    Origin,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionKind::Move => "MOVE",
            ActionKind::Walk => "WALK",
            ActionKind::Run => "RUN",
            ActionKind::Total => "TOTAL",
            ActionKind::Origin => "ORIGIN",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedConfig {
    pub walk: Speed,
    pub run: Speed,
}

impl SpeedConfig {
    pub fn new(walk: impl Into<Speed>, run: impl Into<Speed>) -> Self {
        Self {
            walk: walk.into(),
            run: run.into(),
        }
    }
}

/// Record of a single move, walk or run call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTrace {
    pub action: ActionKind,
    pub direction: Option<Direction>,
    pub path: Path,
    pub positions: Vec<Point>,
}

/// Result of a ticked walk or run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelOutcome {
    pub action: ActionKind,
    pub direction: Direction,
    pub expected_paces: usize,
    pub completed_paces: usize,
    pub start_position: Point,
    pub positions: Vec<Point>,
    pub path: Path,
}

impl TravelOutcome {
    pub fn is_complete(&self) -> bool {
        self.completed_paces >= self.expected_paces
    }

    /// The informational error for a travel cut short by its deadline.
    pub fn premature_termination(&self) -> Option<DomainError> {
        if self.is_complete() {
            None
        } else {
            Some(DomainError::PrematureTermination {
                completed: self.completed_paces,
                expected: self.expected_paces,
            })
        }
    }

    pub fn final_position(&self) -> Point {
        self.positions.last().copied().unwrap_or(self.start_position)
    }
}

/// Mutable agent state. Only touched while holding the engine mutex.
#[derive(Debug, Clone, Default)]
pub(crate) struct HareState {
    pub position: Point,
    pub path_taken: Path,
    pub all_positions: Vec<Point>,
    pub traces: Vec<ActionTrace>,
    pub uncommitted_events: Vec<MovementEvent>,
    pub action: ActionKind,
}

/// The movement engine: one agent on the grid, driven by move, walk and run.
///
/// Calls must be serialized by the caller. The mutex only makes each
/// position update atomic with its path entry, it does not make two
/// overlapping travels safe.
pub struct Hare {
    id: String,
    speeds: SpeedConfig,
    time_scale: Duration,
    logger: DynLogger,
    state: Arc<Mutex<HareState>>,
}

impl Hare {
    pub fn new(speeds: SpeedConfig, logger: DynLogger) -> Self {
        let id = format!("hare-{}", Uuid::new_v4());
        let created = MovementEvent::AgentCreated {
            agent_id: id.clone(),
            walk_speed: speeds.walk.to_int(),
            run_speed: speeds.run.to_int(),
            timestamp: chrono::Utc::now(),
        };
        let state = HareState {
            action: ActionKind::Origin,
            uncommitted_events: vec![created],
            ..HareState::default()
        };
        logger.info(&format!("{} at {}", ActionKind::Origin, Point::ORIGIN));

        Self {
            id,
            speeds,
            time_scale: Duration::from_secs(1),
            logger,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Sets the wall-clock length of one simulated second.
    pub fn with_time_scale(mut self, time_scale: Duration) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn speeds(&self) -> SpeedConfig {
        self.speeds
    }

    pub fn time_scale(&self) -> Duration {
        self.time_scale
    }

    pub async fn position(&self) -> Point {
        self.state.lock().await.position
    }

    pub async fn action(&self) -> ActionKind {
        self.state.lock().await.action
    }

    pub async fn path_taken(&self) -> Path {
        self.state.lock().await.path_taken.clone()
    }

    pub async fn all_positions(&self) -> Vec<Point> {
        self.state.lock().await.all_positions.clone()
    }

    pub async fn traces(&self) -> Vec<ActionTrace> {
        self.state.lock().await.traces.clone()
    }

    pub async fn uncommitted_events(&self) -> Vec<MovementEvent> {
        self.state.lock().await.uncommitted_events.clone()
    }

    pub async fn mark_events_as_committed(&self) {
        self.state.lock().await.uncommitted_events.clear();
    }

    /// Instantaneous displacement by `(dx, dy)`. No ticking.
    pub async fn move_by(&self, dx: Coordinate, dy: Coordinate) -> DomainResult<ActionTrace> {
        let delta = Point::new(dx, dy);
        let path = delta.path_from_origin()?;

        let mut state = self.state.lock().await;
        let position = state.position.checked_add(delta)?;
        state.action = ActionKind::Move;
        state.position = position;
        state.all_positions.push(position);
        state.path_taken.extend_from(&path);

        let trace = ActionTrace {
            action: ActionKind::Move,
            direction: None,
            path,
            positions: vec![position],
        };
        state.traces.push(trace.clone());
        state.uncommitted_events.push(MovementEvent::Moved {
            agent_id: self.id.clone(),
            delta,
            new_position: position,
            timestamp: chrono::Utc::now(),
        });
        drop(state);

        self.logger.info(&format!(
            "{}: displaced by {} to {}",
            ActionKind::Move,
            delta,
            position
        ));
        Ok(trace)
    }

    /// Appends the paces of an axis-wise delta to the running path.
    ///
    /// Negative x records LEFT, positive x RIGHT, negative y BACKWARD and
    /// positive y FORWARD. Zero components record nothing.
    pub async fn record(&self, delta: Point) -> DomainResult<()> {
        let path = delta.path_from_origin()?;
        self.state.lock().await.path_taken.extend_from(&path);
        Ok(())
    }

    pub async fn walk(
        &self,
        duration: Duration,
        direction: Direction,
    ) -> DomainResult<TravelOutcome> {
        self.travel(ActionKind::Walk, duration, direction, self.speeds.walk)
            .await
    }

    pub async fn run(
        &self,
        duration: Duration,
        direction: Direction,
    ) -> DomainResult<TravelOutcome> {
        self.travel(ActionKind::Run, duration, direction, self.speeds.run)
            .await
    }

    /// Snapshot of everything recorded so far.
    pub async fn report(&self) -> TraceReport {
        let state = self.state.lock().await;
        TraceReport::from_state(&self.id, &state)
    }

    async fn travel(
        &self,
        action: ActionKind,
        duration: Duration,
        direction: Direction,
        speed: Speed,
    ) -> DomainResult<TravelOutcome> {
        if !direction.is_heading() {
            return Err(DomainError::UnrecognizedDirection {
                direction: direction.to_string(),
                operation: action.to_string(),
            });
        }
        travel_span(duration, self.time_scale)?;

        let start_position = {
            let mut state = self.state.lock().await;
            state.action = action;
            let start_position = state.position;
            state.uncommitted_events.push(MovementEvent::TravelStarted {
                agent_id: self.id.clone(),
                action,
                direction,
                expected_paces: expected_paces(duration),
                start_position,
                timestamp: chrono::Utc::now(),
            });
            start_position
        };

        let request = FlowRequest {
            direction,
            speed,
            duration,
            time_scale: self.time_scale,
        };
        let result = flow(self.state.clone(), self.logger.clone(), request).await?;

        let outcome = TravelOutcome {
            action,
            direction,
            expected_paces: result.expected_paces,
            completed_paces: result.completed_paces,
            start_position,
            positions: result.positions,
            path: result.path,
        };

        let mut state = self.state.lock().await;
        state.traces.push(ActionTrace {
            action,
            direction: Some(direction),
            path: outcome.path.clone(),
            positions: outcome.positions.clone(),
        });
        let event = if outcome.is_complete() {
            MovementEvent::TravelCompleted {
                agent_id: self.id.clone(),
                action,
                completed_paces: outcome.completed_paces,
                final_position: state.position,
                timestamp: chrono::Utc::now(),
            }
        } else {
            MovementEvent::TravelEndedPrematurely {
                agent_id: self.id.clone(),
                action,
                completed_paces: outcome.completed_paces,
                expected_paces: outcome.expected_paces,
                timestamp: chrono::Utc::now(),
            }
        };
        state.uncommitted_events.push(event);
        drop(state);

        if let Some(err) = outcome.premature_termination() {
            self.logger.warn(&format!("{}: {}", action, err));
        }
        self.logger.info(&format!(
            "{}: went {} from {} to {}",
            action,
            direction,
            start_position,
            outcome.final_position()
        ));
        Ok(outcome)
    }
}
