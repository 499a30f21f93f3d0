// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use recant::{AsyncCommand, Command, CommandContext, ContextData, RecantError, RecantResult};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::time::Duration;
use tracing::Level;

// --- Common Context Struct ---
#[derive(Clone, Debug, PartialEq)]
pub struct TestContext {
  pub success: bool,
  pub value: i32,
  pub string: String,
  pub log: Vec<String>,
}

impl Default for TestContext {
  fn default() -> Self {
    Self {
      success: true,
      value: 0,
      string: String::new(),
      log: Vec::new(),
    }
  }
}

impl CommandContext for TestContext {
  fn success(&self) -> bool {
    self.success
  }

  fn set_success(&mut self, success: bool) {
    self.success = success;
  }
}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Test command exploded: {0}")]
  Exploded(String),

  #[error("Test undo exploded: {0}")]
  UndoExploded(String),
}

// --- Synchronous commands ---

/// Sets `value` to 2. No compensation.
pub struct SetValue(pub ContextData<TestContext>);

impl From<ContextData<TestContext>> for SetValue {
  fn from(ctx: ContextData<TestContext>) -> Self {
    SetValue(ctx)
  }
}

impl Command<TestContext> for SetValue {
  fn execute(&mut self) -> RecantResult<()> {
    self.0.write().value = 2;
    Ok(())
  }
}

/// Adds 2 to `value`. No compensation.
pub struct AddTwo(pub ContextData<TestContext>);

impl From<ContextData<TestContext>> for AddTwo {
  fn from(ctx: ContextData<TestContext>) -> Self {
    AddTwo(ctx)
  }
}

impl Command<TestContext> for AddTwo {
  fn execute(&mut self) -> RecantResult<()> {
    self.0.write().value += 2;
    Ok(())
  }
}

/// Sets `string` to "Hello"; its undo sets it to "Undone".
pub struct SetString(pub ContextData<TestContext>);

impl From<ContextData<TestContext>> for SetString {
  fn from(ctx: ContextData<TestContext>) -> Self {
    SetString(ctx)
  }
}

impl Command<TestContext> for SetString {
  fn execute(&mut self) -> RecantResult<()> {
    self.0.write().string = "Hello".to_string();
    Ok(())
  }

  fn undo(&mut self) -> RecantResult<()> {
    self.0.write().string = "Undone".to_string();
    Ok(())
  }
}

/// Signals business failure.
pub struct Fail(pub ContextData<TestContext>);

impl From<ContextData<TestContext>> for Fail {
  fn from(ctx: ContextData<TestContext>) -> Self {
    Fail(ctx)
  }
}

impl Command<TestContext> for Fail {
  fn execute(&mut self) -> RecantResult<()> {
    self.0.write().fail();
    Ok(())
  }
}

/// Raises an error instead of clearing the success indicator.
pub struct Explode(pub ContextData<TestContext>);

impl From<ContextData<TestContext>> for Explode {
  fn from(ctx: ContextData<TestContext>) -> Self {
    Explode(ctx)
  }
}

impl Command<TestContext> for Explode {
  fn execute(&mut self) -> RecantResult<()> {
    self.0.write().log.push("execute:explode".to_string());
    Err(anyhow::Error::new(TestError::Exploded("boom".to_string())).into())
  }
}

/// Records `execute:<name>` / `undo:<name>` into the context log; optionally fails.
pub struct Tracked {
  ctx: ContextData<TestContext>,
  name: &'static str,
  fails: bool,
  undo_explodes: bool,
}

impl Tracked {
  pub fn new(ctx: ContextData<TestContext>, name: &'static str) -> Self {
    Self {
      ctx,
      name,
      fails: false,
      undo_explodes: false,
    }
  }

  pub fn failing(ctx: ContextData<TestContext>, name: &'static str) -> Self {
    Self {
      fails: true,
      ..Self::new(ctx, name)
    }
  }

  pub fn undo_exploding(ctx: ContextData<TestContext>, name: &'static str) -> Self {
    Self {
      undo_explodes: true,
      ..Self::new(ctx, name)
    }
  }
}

impl Command<TestContext> for Tracked {
  fn execute(&mut self) -> RecantResult<()> {
    let mut guard = self.ctx.write();
    guard.log.push(format!("execute:{}", self.name));
    tracing::debug!(target: "test_commands", command = self.name, "executed");
    if self.fails {
      guard.fail();
    }
    Ok(())
  }

  fn undo(&mut self) -> RecantResult<()> {
    if self.undo_explodes {
      return Err(RecantError::from(anyhow::Error::new(TestError::UndoExploded(
        self.name.to_string(),
      ))));
    }
    self.ctx.write().log.push(format!("undo:{}", self.name));
    Ok(())
  }

  fn name(&self) -> &str {
    self.name
  }
}

pub fn tracked(name: &'static str) -> recant::CommandFactory<TestContext> {
  recant::factory(move |ctx| Tracked::new(ctx, name))
}

pub fn tracked_failing(name: &'static str) -> recant::CommandFactory<TestContext> {
  recant::factory(move |ctx| Tracked::failing(ctx, name))
}

// --- Asynchronous commands ---

/// Sleeps, then records `execute:<name>` (and optionally fails). Undo sleeps too.
pub struct AsyncTracked {
  ctx: ContextData<TestContext>,
  name: &'static str,
  delay: Duration,
  fails: bool,
}

impl AsyncTracked {
  pub fn new(ctx: ContextData<TestContext>, name: &'static str, delay_millis: u64) -> Self {
    Self {
      ctx,
      name,
      delay: Duration::from_millis(delay_millis),
      fails: false,
    }
  }

  pub fn failing(ctx: ContextData<TestContext>, name: &'static str, delay_millis: u64) -> Self {
    Self {
      fails: true,
      ..Self::new(ctx, name, delay_millis)
    }
  }
}

#[async_trait]
impl AsyncCommand<TestContext> for AsyncTracked {
  async fn execute(&mut self) -> RecantResult<()> {
    self.ctx.write().log.push(format!("start:{}", self.name));
    tokio::time::sleep(self.delay).await;
    let mut guard = self.ctx.write();
    guard.log.push(format!("execute:{}", self.name));
    if self.fails {
      guard.fail();
    }
    Ok(())
  }

  async fn undo(&mut self) -> RecantResult<()> {
    tokio::time::sleep(self.delay).await;
    self.ctx.write().log.push(format!("undo:{}", self.name));
    Ok(())
  }

  fn name(&self) -> &str {
    self.name
  }
}

pub fn async_tracked(name: &'static str, delay_millis: u64) -> recant::AsyncCommandFactory<TestContext> {
  recant::async_factory(move |ctx| AsyncTracked::new(ctx, name, delay_millis))
}

pub fn async_tracked_failing(name: &'static str, delay_millis: u64) -> recant::AsyncCommandFactory<TestContext> {
  recant::async_factory(move |ctx| AsyncTracked::failing(ctx, name, delay_millis))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking evaluation counts ---
pub static SELECTOR_EVAL_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static FACTORY_CALL_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  SELECTOR_EVAL_COUNTER.store(0, Ordering::SeqCst);
  FACTORY_CALL_COUNTER.store(0, Ordering::SeqCst);
}

pub fn log_of(ctx: &TestContext) -> Vec<&str> {
  ctx.log.iter().map(String::as_str).collect()
}
