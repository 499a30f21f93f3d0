// recant/src/pipeline/execution.rs

//! Contains the `run` family: clone the caller's context, instantiate every
//! factory against the clone, execute, undo on failure, return the clone.

use crate::core::async_command::AsyncCommandFactory;
use crate::core::command::{instantiate, CommandFactory};
use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::core::control::Outcome;
use crate::error::RecantResult;
use crate::runner::definition::{AsyncRunner, Runner};
use tracing::{event, instrument, Level};

/// Runs `factories` against a clone of `context` and returns the clone.
///
/// The caller's value is never touched. If the clone reports failure after
/// execution, every command in the executed prefix is undone in reverse before
/// the clone is returned.
///
/// An `Err` raised by a command during execution is returned immediately,
/// without compensation. An `Err` raised by an `undo` is returned as well.
pub fn run<T: CommandContext>(context: &T, factories: &[CommandFactory<T>]) -> RecantResult<T> {
  run_with_outcome(context, factories).map(|(result, _)| result)
}

/// Like [`run`], also reporting whether compensation took place.
#[instrument(
    name = "recant::run",
    skip_all,
    fields(
        context_type = %std::any::type_name::<T>(),
        num_commands = factories.len(),
    ),
    err(Display)
)]
pub fn run_with_outcome<T: CommandContext>(context: &T, factories: &[CommandFactory<T>]) -> RecantResult<(T, Outcome)> {
  let shared = ContextData::new(context.clone());
  let mut runner = Runner::new(shared.clone(), instantiate(factories, &shared));

  runner.execute()?;

  let succeeded = shared.read().success();
  let outcome = if succeeded {
    Outcome::Completed
  } else {
    event!(Level::INFO, executed = runner.executed().len(), "Pipeline failed, compensating.");
    runner.undo()?;
    Outcome::Compensated
  };

  // Commands hold handles to the shared context; release them before unwrapping.
  drop(runner);
  event!(Level::DEBUG, ?outcome, "Pipeline run finished.");
  Ok((shared.into_inner_or_snapshot(), outcome))
}

/// Async counterpart of [`run`]. Every `execute` and `undo` is awaited in
/// sequence, never concurrently.
pub async fn run_async<T: CommandContext>(context: &T, factories: &[AsyncCommandFactory<T>]) -> RecantResult<T> {
  run_async_with_outcome(context, factories).await.map(|(result, _)| result)
}

#[instrument(
    name = "recant::run_async",
    skip_all,
    fields(
        context_type = %std::any::type_name::<T>(),
        num_commands = factories.len(),
    ),
    err(Display)
)]
pub async fn run_async_with_outcome<T: CommandContext>(
  context: &T,
  factories: &[AsyncCommandFactory<T>],
) -> RecantResult<(T, Outcome)> {
  let shared = ContextData::new(context.clone());
  let mut runner: AsyncRunner<T> = Runner::new(shared.clone(), instantiate(factories, &shared));

  runner.execute().await?;

  let succeeded = shared.read().success();
  let outcome = if succeeded {
    Outcome::Completed
  } else {
    event!(Level::INFO, executed = runner.executed().len(), "Pipeline failed, compensating.");
    runner.undo().await?;
    Outcome::Compensated
  };

  drop(runner);
  event!(Level::DEBUG, ?outcome, "Pipeline run finished.");
  Ok((shared.into_inner_or_snapshot(), outcome))
}
