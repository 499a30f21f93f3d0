// recant/src/runner/execution.rs

//! Contains `execute()` and `undo()` for the synchronous `Runner<T>` and the
//! asynchronous `AsyncRunner<T>`. Both follow the same algorithm; the async one
//! awaits each command to completion before touching the next.

use crate::core::async_command::AsyncCommand;
use crate::core::context::CommandContext;
use crate::core::control::CommandState;
use crate::error::RecantResult;
use crate::runner::definition::{AsyncRunner, Runner};
use tracing::{event, instrument, Level};

impl<T: CommandContext> Runner<T> {
  /// Runs the commands in declaration order.
  ///
  /// Each command is appended to the executed prefix BEFORE it is invoked, so a
  /// command that fails is still undone later. After every command the context's
  /// success indicator is checked; once it is `false` the remaining commands are
  /// never invoked and `Ok(CommandState::Failed)` is returned.
  ///
  /// An `Err` raised by a command is propagated as-is.
  #[instrument(
        name = "Runner::execute",
        skip_all,
        fields(
            context_type = %std::any::type_name::<T>(),
            num_commands = self.commands.len(),
        ),
        err(Display)
    )]
  pub fn execute(&mut self) -> RecantResult<CommandState> {
    self.executed = 0;
    self.pending_undo = 0;
    self.state = CommandState::Executing;
    event!(Level::DEBUG, "Runner execution starting.");

    for index in 0..self.commands.len() {
      self.executed = index + 1;
      self.pending_undo = index + 1;
      let command = &mut self.commands[index];
      event!(Level::TRACE, command_index = index, command = %command.name(), "Executing command.");

      if let Err(e) = command.execute() {
        event!(Level::ERROR, command_index = index, error = %e, "Command raised an error.");
        self.state = CommandState::Failed;
        return Err(e);
      }

      if !self.context_succeeded() {
        event!(Level::INFO, command_index = index, "Command signalled failure, stopping.");
        self.state = CommandState::Failed;
        return Ok(self.state);
      }
    }

    event!(Level::DEBUG, "Runner execution completed successfully.");
    self.state = CommandState::Succeeded;
    Ok(self.state)
  }

  /// Undoes the executed prefix in exact reverse order.
  ///
  /// A no-op when nothing was executed or when the prefix was already undone.
  /// If an `undo` raises, the error is returned and the runner stays `Undoing`;
  /// calling `undo()` again resumes at the command that raised.
  #[instrument(
        name = "Runner::undo",
        skip_all,
        fields(num_pending = self.pending_undo),
        err(Display)
    )]
  pub fn undo(&mut self) -> RecantResult<()> {
    if self.pending_undo == 0 || self.state == CommandState::Undone {
      event!(Level::DEBUG, "Nothing to undo.");
      return Ok(());
    }
    self.state = CommandState::Undoing;
    event!(Level::DEBUG, "Compensation starting.");

    while self.pending_undo > 0 {
      let index = self.pending_undo - 1;
      let command = &mut self.commands[index];
      event!(Level::TRACE, command_index = index, command = %command.name(), "Undoing command.");
      if let Err(e) = command.undo() {
        event!(Level::ERROR, command_index = index, error = %e, "Undo raised an error, compensation aborted.");
        return Err(e);
      }
      self.pending_undo = index;
    }

    event!(Level::DEBUG, "Compensation finished.");
    self.state = CommandState::Undone;
    Ok(())
  }
}

impl<T: CommandContext> AsyncRunner<T> {
  /// Async counterpart of [`Runner::execute`].
  #[instrument(
        name = "AsyncRunner::execute",
        skip_all,
        fields(
            context_type = %std::any::type_name::<T>(),
            num_commands = self.commands.len(),
        ),
        err(Display)
    )]
  pub async fn execute(&mut self) -> RecantResult<CommandState> {
    self.executed = 0;
    self.pending_undo = 0;
    self.state = CommandState::Executing;
    event!(Level::DEBUG, "Runner execution starting.");

    for index in 0..self.commands.len() {
      self.executed = index + 1;
      self.pending_undo = index + 1;
      let command: &mut Box<dyn AsyncCommand<T>> = &mut self.commands[index];
      event!(Level::TRACE, command_index = index, command = %command.name(), "Executing command.");

      if let Err(e) = command.execute().await {
        event!(Level::ERROR, command_index = index, error = %e, "Command raised an error.");
        self.state = CommandState::Failed;
        return Err(e);
      }

      if !self.context_succeeded() {
        event!(Level::INFO, command_index = index, "Command signalled failure, stopping.");
        self.state = CommandState::Failed;
        return Ok(self.state);
      }
    }

    event!(Level::DEBUG, "Runner execution completed successfully.");
    self.state = CommandState::Succeeded;
    Ok(self.state)
  }

  /// Async counterpart of [`Runner::undo`].
  #[instrument(
        name = "AsyncRunner::undo",
        skip_all,
        fields(num_pending = self.pending_undo),
        err(Display)
    )]
  pub async fn undo(&mut self) -> RecantResult<()> {
    if self.pending_undo == 0 || self.state == CommandState::Undone {
      event!(Level::DEBUG, "Nothing to undo.");
      return Ok(());
    }
    self.state = CommandState::Undoing;
    event!(Level::DEBUG, "Compensation starting.");

    while self.pending_undo > 0 {
      let index = self.pending_undo - 1;
      let command: &mut Box<dyn AsyncCommand<T>> = &mut self.commands[index];
      event!(Level::TRACE, command_index = index, command = %command.name(), "Undoing command.");
      if let Err(e) = command.undo().await {
        event!(Level::ERROR, command_index = index, error = %e, "Undo raised an error, compensation aborted.");
        return Err(e);
      }
      self.pending_undo = index;
    }

    event!(Level::DEBUG, "Compensation finished.");
    self.state = CommandState::Undone;
    Ok(())
  }
}
