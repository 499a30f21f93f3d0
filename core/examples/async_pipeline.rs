// recant/examples/async_pipeline.rs

use async_trait::async_trait;
use recant::{
  async_factory, compose_async, lift, of, AsyncCommand, AsyncPipeline, Command, CommandContext, ContextData, Outcome,
  RecantError, RecantResult,
};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
enum ProvisionError {
  #[error("Quota service unreachable")]
  QuotaUnavailable,
}

#[derive(Clone, Debug, Default)]
struct Provisioning {
  success: bool,
  vm_id: Option<String>,
  dns_record: Option<String>,
  audit: Vec<String>,
  dns_conflict: bool,
}

impl CommandContext for Provisioning {
  fn success(&self) -> bool {
    self.success
  }

  fn set_success(&mut self, success: bool) {
    self.success = success;
  }
}

struct CreateVm(ContextData<Provisioning>);

#[async_trait]
impl AsyncCommand<Provisioning> for CreateVm {
  async fn execute(&mut self) -> RecantResult<()> {
    tokio::time::sleep(Duration::from_millis(20)).await;
    // Guards are never held across an await.
    self.0.write().vm_id = Some("vm-42".to_string());
    info!("VM created");
    Ok(())
  }

  async fn undo(&mut self) -> RecantResult<()> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    self.0.write().vm_id = None;
    info!("VM destroyed");
    Ok(())
  }
}

struct RegisterDns(ContextData<Provisioning>);

#[async_trait]
impl AsyncCommand<Provisioning> for RegisterDns {
  async fn execute(&mut self) -> RecantResult<()> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    let mut data = self.0.write();
    if data.dns_conflict {
      warn!("DNS name already taken");
      data.fail();
      return Ok(());
    }
    data.dns_record = Some("web.internal".to_string());
    Ok(())
  }

  async fn undo(&mut self) -> RecantResult<()> {
    self.0.write().dns_record = None;
    Ok(())
  }
}

struct CheckQuota;

#[async_trait]
impl AsyncCommand<Provisioning> for CheckQuota {
  async fn execute(&mut self) -> RecantResult<()> {
    Err(anyhow::Error::new(ProvisionError::QuotaUnavailable).into())
  }
}

struct Audit(ContextData<Provisioning>);

impl From<ContextData<Provisioning>> for Audit {
  fn from(ctx: ContextData<Provisioning>) -> Self {
    Audit(ctx)
  }
}

impl Command<Provisioning> for Audit {
  fn execute(&mut self) -> RecantResult<()> {
    self.0.write().audit.push("provisioned".to_string());
    Ok(())
  }

  fn undo(&mut self) -> RecantResult<()> {
    self.0.write().audit.push("rolled back".to_string());
    Ok(())
  }
}

#[tokio::main]
async fn main() -> Result<(), RecantError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Async Pipeline Example ---");

  let pipeline = AsyncPipeline::new()
    .then(lift(of::<Audit, _>()))
    .then(compose_async(vec![async_factory(CreateVm), async_factory(RegisterDns)]));

  let fresh = Provisioning {
    success: true,
    ..Default::default()
  };

  let (done, outcome) = pipeline.run_with_outcome(&fresh).await?;
  assert_eq!(outcome, Outcome::Completed);
  assert_eq!(done.vm_id.as_deref(), Some("vm-42"));
  assert_eq!(done.dns_record.as_deref(), Some("web.internal"));

  let conflicting = Provisioning {
    dns_conflict: true,
    ..fresh.clone()
  };
  let (undone, outcome) = pipeline.run_with_outcome(&conflicting).await?;
  assert_eq!(outcome, Outcome::Compensated);
  assert!(undone.vm_id.is_none());
  assert_eq!(undone.audit, vec!["provisioned".to_string(), "rolled back".to_string()]);

  // A raised error is not a failed step: it propagates without compensation.
  let broken = pipeline.clone().then(async_factory(|_| CheckQuota));
  match broken.run(&fresh).await {
    Err(RecantError::CommandError { source }) => {
      info!("Pipeline raised as expected: {}", source);
      assert!(source.downcast_ref::<ProvisionError>().is_some());
    }
    other => panic!("Expected a command error, got {:?}", other.map(|ctx| ctx.success)),
  }

  Ok(())
}
