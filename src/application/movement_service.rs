use crate::common::ApplicationResult;
use crate::config::{ActionSpec, Config};
use crate::domains::logger::DynLogger;
use crate::domains::movement::{Hare, TraceReport};
use super::command::{Command, CommandOutcome};
use std::sync::Arc;

/// Drives one movement engine through a sequence of configured actions.
pub struct MovementService {
    hare: Arc<Hare>,
}

impl MovementService {
    pub fn new(hare: Arc<Hare>) -> Self {
        Self { hare }
    }

    pub fn from_config(config: &Config, logger: DynLogger) -> ApplicationResult<Self> {
        let speeds = config.resolve_speeds()?;
        let hare = Hare::new(speeds, logger).with_time_scale(config.time_scale());
        tracing::info!(
            "Created agent {} (walk speed {}, run speed {})",
            hare.id(),
            speeds.walk,
            speeds.run
        );
        Ok(Self::new(Arc::new(hare)))
    }

    pub fn hare(&self) -> Arc<Hare> {
        self.hare.clone()
    }

    /// Translates every action up front. The first invalid action aborts the
    /// whole plan.
    pub fn plan(&self, actions: &[ActionSpec]) -> ApplicationResult<Vec<Command>> {
        actions
            .iter()
            .enumerate()
            .map(|(index, action)| action.into_command(index))
            .collect()
    }

    /// Runs commands strictly in sequence, stopping at the first engine error.
    pub async fn execute(&self, commands: &[Command]) -> ApplicationResult<Vec<CommandOutcome>> {
        let mut outcomes = Vec::with_capacity(commands.len());
        for (index, command) in commands.iter().enumerate() {
            tracing::debug!("Executing command #{}: {:?}", index, command);
            let outcome = command.execute(&self.hare).await?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    pub async fn run_all(&self, actions: &[ActionSpec]) -> ApplicationResult<Vec<CommandOutcome>> {
        let commands = self.plan(actions)?;
        tracing::info!("Planned {} commands", commands.len());
        self.execute(&commands).await
    }

    pub async fn report(&self) -> TraceReport {
        self.hare.report().await
    }
}
