// tests/error_handling_tests.rs
mod common;
use common::*;
use recant::{cond, run, RecantError};

#[test]
fn test_anyhow_error_becomes_command_error() {
  let err: RecantError = anyhow::anyhow!("disk full").into();
  match err {
    RecantError::CommandError { source } => assert_eq!(source.to_string(), "disk full"),
    other => panic!("Expected RecantError::CommandError, got {:?}", other),
  }
}

#[test]
fn test_recant_error_round_trips_through_anyhow_unnested() {
  // A command that uses `?` on an engine error inside an anyhow context must not
  // end up with CommandError(UndoBeforeExecute(..)).
  let original = RecantError::UndoBeforeExecute {
    command: "Conditional<Test>".to_string(),
  };
  let through_anyhow = anyhow::Error::new(original);
  let back: RecantError = through_anyhow.into();

  match back {
    RecantError::UndoBeforeExecute { command } => assert_eq!(command, "Conditional<Test>"),
    other => panic!("Expected RecantError::UndoBeforeExecute, got {:?}", other),
  }
}

#[test]
fn test_error_messages() {
  let undo = RecantError::UndoBeforeExecute {
    command: "Conditional<Ctx>".to_string(),
  };
  assert!(undo.to_string().contains("before it executed"));

  let command = RecantError::from(anyhow::Error::new(TestError::Exploded("x".to_string())));
  assert!(command.to_string().contains("Test command exploded: x"));
}

#[test]
fn test_business_failure_is_not_an_error() {
  setup_tracing();
  let result = run(&TestContext::default(), &[tracked_failing("a")]);
  assert!(result.is_ok());
  assert!(!result.unwrap().success);
}

#[test]
fn test_selector_choosing_explode_propagates_error() {
  setup_tracing();
  let step = cond(|_: &TestContext| recant::of::<Explode, _>());
  let result = run(&TestContext::default(), &[step]);
  assert!(matches!(result, Err(RecantError::CommandError { .. })));
}
