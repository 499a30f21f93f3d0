pub mod async_command;
pub mod command;
pub mod context;
pub mod context_data;
pub mod control;
pub mod guard;

// Re-export key types for easier access from other recant modules (and lib.rs)
pub use async_command::{AsyncCommand, AsyncCommandFactory};
pub use command::{Command, CommandFactory, Factory};
pub use context::CommandContext;
pub use context_data::ContextData;
pub use control::{CommandState, Outcome};
pub use guard::Guarded;
