use chardot::adapters::outbound::init_noop_logger;
use chardot::application::*;
use chardot::common::ApplicationError;
use chardot::config::{ActionSpec, Config, SpeedValue};
use chardot::domains::movement::*;
use std::time::Duration;

fn config(actions: Vec<ActionSpec>) -> Config {
    Config {
        log_level: Some("INFO".to_string()),
        walk_speed: Some(SpeedValue::Number(5)),
        run_speed: Some(SpeedValue::Text("6".to_string())),
        second_millis: None,
        actions,
    }
}

#[tokio::test(start_paused = true)]
async fn test_run_all_executes_in_sequence() {
    let cfg = config(vec![
        ActionSpec::travel("walk", 2, "N"),
        ActionSpec::travel("run", 1, "E"),
    ]);
    let service = MovementService::from_config(&cfg, init_noop_logger()).unwrap();

    let outcomes = service.run_all(&cfg.actions).await.unwrap();
    assert_eq!(outcomes.len(), 2);
    match &outcomes[0] {
        CommandOutcome::Travelled(outcome) => {
            assert_eq!(outcome.action, ActionKind::Walk);
            assert_eq!(outcome.direction, Direction::North);
            assert_eq!(outcome.final_position(), Point::from((0, 10)));
        }
        other => panic!("Expected a travel outcome, got {:?}", other),
    }

    let report = service.report().await;
    assert_eq!(report.position, Point::from((6, 10)));
    assert_eq!(report.last_action, ActionKind::Run);
    assert_eq!(report.traces.len(), 2);
}

#[tokio::test]
async fn test_plan_aborts_on_first_invalid_action() {
    let cfg = config(vec![
        ActionSpec::travel("walk", 1, "N"),
        ActionSpec::travel("walk", 1, "Q"),
        ActionSpec::travel("hop", 1, "E"),
    ]);
    let service = MovementService::from_config(&cfg, init_noop_logger()).unwrap();

    let err = service.run_all(&cfg.actions).await.unwrap_err();
    match err {
        ApplicationError::InvalidAction { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("\"Q\""));
        }
        other => panic!("Expected InvalidAction, got {:?}", other),
    }

    // nothing ran
    let hare = service.hare();
    assert_eq!(hare.position().await, Point::ORIGIN);
    assert!(hare.traces().await.is_empty());
}

#[tokio::test]
async fn test_move_commands_are_instant() {
    let service = MovementService::from_config(&config(vec![]), init_noop_logger()).unwrap();
    let commands = vec![
        Command::Move {
            dx: Coordinate::new(4),
            dy: Coordinate::new(5),
        },
        Command::Move {
            dx: Coordinate::new(10),
            dy: Coordinate::new(-2),
        },
    ];

    let outcomes = service.execute(&commands).await.unwrap();
    assert!(outcomes
        .iter()
        .all(|o| matches!(o, CommandOutcome::Moved(_))));
    assert_eq!(service.report().await.position, Point::from((14, 3)));
}

#[tokio::test]
async fn test_engine_errors_stop_execution() {
    let service = MovementService::from_config(&config(vec![]), init_noop_logger()).unwrap();
    let commands = vec![
        Command::Walk {
            duration: Duration::from_secs(1),
            direction: Direction::Northwest,
        },
        Command::Move {
            dx: Coordinate::new(1),
            dy: Coordinate::new(1),
        },
    ];

    let err = service.execute(&commands).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
    assert_eq!(service.report().await.position, Point::ORIGIN);
}

#[tokio::test]
async fn test_service_uses_configured_speeds_and_scale() {
    let mut cfg = config(vec![]);
    cfg.second_millis = Some(250);
    let service = MovementService::from_config(&cfg, init_noop_logger()).unwrap();

    let hare = service.hare();
    assert_eq!(hare.speeds(), SpeedConfig::new(5, 6));
    assert_eq!(hare.time_scale(), Duration::from_millis(250));
}
