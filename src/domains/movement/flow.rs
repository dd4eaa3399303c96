use super::coordinate::Speed;
use super::direction::Direction;
use super::hare::HareState;
use super::pace::Pace;
use super::path::Path;
use super::point::Point;
use crate::common::{DomainError, DomainResult};
use crate::domains::logger::DynLogger;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};
use tokio::time::{interval_at, sleep_until, Instant};

/// Parameters of one ticked walk or run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlowRequest {
    pub direction: Direction,
    pub speed: Speed,
    pub duration: Duration,
    /// Wall-clock length of one simulated second.
    pub time_scale: Duration,
}

/// What one ticked travel produced before it stopped.
#[derive(Debug, Clone)]
pub(crate) struct FlowResult {
    pub expected_paces: usize,
    pub completed_paces: usize,
    pub positions: Vec<Point>,
    pub path: Path,
}

/// Longest walk or run accepted, in simulated seconds.
pub const MAX_TRAVEL_SECS: u64 = 1_000_000;

/// Buffers grow past this many entries only as ticks arrive.
const PREALLOCATED_PACES: usize = 1024;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Number of paces a travel of `duration` simulated seconds attempts.
pub fn expected_paces(duration: Duration) -> usize {
    duration.as_secs_f64().ceil() as usize
}

/// Wall-clock length of a travel, or an error when it cannot be scheduled.
pub(crate) fn travel_span(duration: Duration, time_scale: Duration) -> DomainResult<Duration> {
    let limit = Duration::from_secs(MAX_TRAVEL_SECS);
    if duration > limit {
        return Err(DomainError::DurationOutOfRange {
            requested: format!("{:?}", duration),
            limit: format!("{:?}", limit),
        });
    }
    tick_period(time_scale)
        .as_nanos()
        .checked_mul(duration.as_nanos())
        .map(|nanos| nanos / NANOS_PER_SEC)
        .and_then(|nanos| u64::try_from(nanos).ok())
        .map(Duration::from_nanos)
        .ok_or_else(|| DomainError::DurationOutOfRange {
            requested: format!("{:?} at {:?} per second", duration, time_scale),
            limit: format!("{:?}", Duration::from_nanos(u64::MAX)),
        })
}

fn tick_period(time_scale: Duration) -> Duration {
    // interval_at panics on a zero period
    time_scale.max(Duration::from_millis(1))
}

/// Runs the tick loop on its own task and waits for the deadline.
///
/// One pace is taken per simulated second. Each pace updates the position, the
/// running path and the position history inside a single critical section.
/// The loop stops after the expected number of paces or when the deadline
/// fires, whichever comes first.
pub(crate) async fn flow(
    state: Arc<Mutex<HareState>>,
    logger: DynLogger,
    request: FlowRequest,
) -> DomainResult<FlowResult> {
    let expected = expected_paces(request.duration);
    let period = tick_period(request.time_scale);
    let span = travel_span(request.duration, request.time_scale)?;
    let start = Instant::now();
    let out_of_clock = || DomainError::DurationOutOfRange {
        requested: format!("{:?}", span.max(period)),
        limit: "the runtime clock".to_string(),
    };
    let deadline = start.checked_add(span).ok_or_else(out_of_clock)?;
    let first_tick = start.checked_add(period).ok_or_else(out_of_clock)?;
    let (stop_tx, stop_rx) = oneshot::channel();

    logger.debug(&format!(
        "Travelling {} for {:?} at speed {}: {} paces expected",
        request.direction, request.duration, request.speed, expected
    ));
    let ticker = tokio::spawn(tick_loop(
        state,
        logger.clone(),
        request,
        expected,
        first_tick,
        period,
        stop_rx,
    ));

    sleep_until(deadline).await;
    logger.debug("Deadline reached, stopping ticker");
    // the ticker may already be done
    let _ = stop_tx.send(());

    match ticker.await {
        Ok(result) => result,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(_) => Err(DomainError::PrematureTermination {
            completed: 0,
            expected,
        }),
    }
}

async fn tick_loop(
    state: Arc<Mutex<HareState>>,
    logger: DynLogger,
    request: FlowRequest,
    expected: usize,
    first_tick: Instant,
    period: Duration,
    mut stop: oneshot::Receiver<()>,
) -> DomainResult<FlowResult> {
    let mut positions = Vec::with_capacity(expected.min(PREALLOCATED_PACES));
    let mut path = Path::with_slots(expected);
    let mut ticker = interval_at(first_tick, period);
    let mut index = 0;

    while index < expected {
        // A tick due at the same instant as the deadline still counts.
        tokio::select! {
            biased;
            _ = ticker.tick() => {}
            _ = &mut stop => break,
        }

        let speed = request.speed.as_coordinate();
        let mut pace = Pace::new(request.direction);
        pace.scalar_move(speed)?;

        let (from, to) = {
            let mut guard = state.lock().await;
            let from = guard.position;
            // The pace records the signed step; the position always gains `speed`.
            guard.position = from.advanced(request.direction, speed)?;
            guard.path_taken.push(pace);
            let to = guard.position;
            guard.all_positions.push(to);
            (from, to)
        };

        positions.push(to);
        path.set(index, pace);
        logger.debug(&format!("Pace {}: travelled from {} to {}", index + 1, from, to));
        index += 1;
    }

    Ok(FlowResult {
        expected_paces: expected,
        completed_paces: index,
        positions,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_paces_rounds_up() {
        assert_eq!(expected_paces(Duration::from_secs(6)), 6);
        assert_eq!(expected_paces(Duration::from_millis(500)), 1);
        assert_eq!(expected_paces(Duration::from_millis(2001)), 3);
        assert_eq!(expected_paces(Duration::ZERO), 0);
    }

    #[test]
    fn test_travel_span_bounds() {
        let second = Duration::from_secs(1);
        assert_eq!(
            travel_span(Duration::from_secs(3), Duration::from_millis(10)).unwrap(),
            Duration::from_millis(30)
        );
        assert_eq!(
            travel_span(Duration::from_secs(2), Duration::ZERO).unwrap(),
            Duration::from_millis(2)
        );
        assert!(travel_span(Duration::from_secs(MAX_TRAVEL_SECS), second).is_ok());
        assert!(matches!(
            travel_span(Duration::from_secs(MAX_TRAVEL_SECS + 1), second),
            Err(DomainError::DurationOutOfRange { .. })
        ));
        assert!(matches!(
            travel_span(Duration::from_secs(10), Duration::MAX),
            Err(DomainError::DurationOutOfRange { .. })
        ));
    }
}
