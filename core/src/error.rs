// recant/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Exceptional conditions raised by the engine or by the commands it drives.
///
/// A command that merely fails its business rule does NOT produce one of these;
/// it sets the context's success indicator to `false` instead.
#[derive(Debug, Error)]
pub enum RecantError {
  #[error("Error raised inside a command. Source: {source}")]
  CommandError {
    #[source]
    source: AnyhowError,
  },

  #[error("Undo called on conditional command '{command}' before it executed; nothing to compensate")]
  UndoBeforeExecute { command: String },
}

// Lets command bodies use `anyhow` freely and still surface a RecantError.
impl From<AnyhowError> for RecantError {
  fn from(err: AnyhowError) -> Self {
    // An engine error that travelled through anyhow comes back out as itself,
    // not as CommandError(UndoBeforeExecute(..)).
    match err.downcast::<RecantError>() {
      Ok(recant_err) => recant_err,
      Err(source) => RecantError::CommandError { source },
    }
  }
}

pub type RecantResult<T, E = RecantError> = std::result::Result<T, E>;
