// recant/src/runner/definition.rs

//! Contains the `Runner<T, C>` struct definition and its read-only accessors.
//! Execution and compensation live in `execution.rs`.

use crate::core::async_command::AsyncCommand;
use crate::core::command::Command;
use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::core::control::CommandState;

/// Sequential executor over an ordered list of commands sharing one context.
///
/// `C` is the command object type: `dyn Command<T>` for the synchronous runner
/// (the default) and `dyn AsyncCommand<T>` for [`AsyncRunner`].
///
/// The executed prefix is stored as a length into `commands`, so it is always a
/// prefix of `commands` in original order. It is reset at the start of every
/// `execute()`, which means a runner can be reused but compensation only ever
/// covers its most recent run.
///
/// `pending_undo` is the length of the prefix still awaiting compensation. It
/// shrinks as each `undo` succeeds, so a retried `undo()` after an error resumes
/// at the command that raised and never repeats a finished compensation.
pub struct Runner<T, C = dyn Command<T>>
where
  T: CommandContext,
  C: ?Sized,
{
  pub(crate) context: ContextData<T>,
  pub(crate) commands: Vec<Box<C>>,
  pub(crate) executed: usize,
  pub(crate) pending_undo: usize,
  pub(crate) state: CommandState,
}

/// Runner whose commands suspend; every call is awaited in sequence.
pub type AsyncRunner<T> = Runner<T, dyn AsyncCommand<T>>;

impl<T, C> Runner<T, C>
where
  T: CommandContext,
  C: ?Sized,
{
  /// Creates an idle runner. `commands` should all be bound to `context`; the
  /// runner inspects `context` between commands to decide whether to continue.
  pub fn new(context: ContextData<T>, commands: Vec<Box<C>>) -> Self {
    Self {
      context,
      commands,
      executed: 0,
      pending_undo: 0,
      state: CommandState::Idle,
    }
  }

  pub fn commands(&self) -> &[Box<C>] {
    &self.commands
  }

  /// The commands actually begun during the most recent `execute()`, including
  /// the one that signalled failure. This is the exact undo worklist.
  pub fn executed(&self) -> &[Box<C>] {
    &self.commands[..self.executed]
  }

  pub fn context(&self) -> &ContextData<T> {
    &self.context
  }

  pub fn state(&self) -> CommandState {
    self.state
  }

  pub fn len(&self) -> usize {
    self.commands.len()
  }

  pub fn is_empty(&self) -> bool {
    self.commands.is_empty()
  }

  pub(crate) fn context_succeeded(&self) -> bool {
    self.context.read().success()
  }
}

impl<T, C> std::fmt::Debug for Runner<T, C>
where
  T: CommandContext,
  C: ?Sized,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Runner")
      .field("commands", &self.commands.len())
      .field("executed", &self.executed)
      .field("pending_undo", &self.pending_undo)
      .field("state", &self.state)
      .finish()
  }
}
