// recant/src/core/control.rs

//! Lifecycle states shared by commands, runners, composites and delegators,
//! and the outcome of a full pipeline run.

/// Where a runner (or anything driven like one) is in its lifecycle.
///
/// `Idle -> Executing -> {Succeeded, Failed}`, then `-> Undoing -> Undone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandState {
  #[default]
  Idle,
  Executing,
  /// Every command ran and the success indicator is still `true`.
  Succeeded,
  /// A command cleared the success indicator, or raised an error.
  Failed,
  Undoing,
  /// The executed prefix has been compensated. Terminal.
  Undone,
}

/// Outcome of a full `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// All commands ran and the context still reports success.
  Completed,
  /// A command signalled failure; the executed prefix was undone in reverse.
  Compensated,
}
