// recant/examples/checkout_saga.rs

use recant::{compose, factory, guarded, run_with_outcome, Command, CommandContext, ContextData, Outcome, RecantResult};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct Checkout {
  success: bool,
  stock: u32,
  reserved: u32,
  balance_cents: i64,
  charged_cents: i64,
  emails_sent: Vec<String>,
  card_declined: bool,
}

impl CommandContext for Checkout {
  fn success(&self) -> bool {
    self.success
  }

  fn set_success(&mut self, success: bool) {
    self.success = success;
  }
}

struct ReserveInventory {
  ctx: ContextData<Checkout>,
  quantity: u32,
}

impl Command<Checkout> for ReserveInventory {
  fn execute(&mut self) -> RecantResult<()> {
    let mut order = self.ctx.write();
    if order.stock < self.quantity {
      warn!(requested = self.quantity, available = order.stock, "Not enough stock");
      order.fail();
      return Ok(());
    }
    order.stock -= self.quantity;
    order.reserved += self.quantity;
    info!(quantity = self.quantity, "Reserved inventory");
    Ok(())
  }

  fn undo(&mut self) -> RecantResult<()> {
    let mut order = self.ctx.write();
    let released = order.reserved.min(self.quantity);
    order.reserved -= released;
    order.stock += released;
    info!(quantity = released, "Released inventory");
    Ok(())
  }

  fn name(&self) -> &str {
    "reserve_inventory"
  }
}

struct ChargeCard {
  ctx: ContextData<Checkout>,
  amount_cents: i64,
  charged: bool,
}

impl Command<Checkout> for ChargeCard {
  fn execute(&mut self) -> RecantResult<()> {
    let mut order = self.ctx.write();
    if order.card_declined {
      warn!(amount_cents = self.amount_cents, "Card declined");
      order.fail();
      return Ok(());
    }
    order.balance_cents -= self.amount_cents;
    order.charged_cents += self.amount_cents;
    self.charged = true;
    info!(amount_cents = self.amount_cents, "Charged card");
    Ok(())
  }

  fn undo(&mut self) -> RecantResult<()> {
    if !self.charged {
      return Ok(());
    }
    let mut order = self.ctx.write();
    order.balance_cents += self.amount_cents;
    order.charged_cents -= self.amount_cents;
    self.charged = false;
    info!(amount_cents = self.amount_cents, "Refunded card");
    Ok(())
  }

  fn name(&self) -> &str {
    "charge_card"
  }
}

struct SendReceipt(ContextData<Checkout>);

impl Command<Checkout> for SendReceipt {
  fn execute(&mut self) -> RecantResult<()> {
    let mut order = self.0.write();
    let line = format!("receipt for {} cents", order.charged_cents);
    info!("Sending {}", line);
    order.emails_sent.push(line);
    Ok(())
  }

  fn name(&self) -> &str {
    "send_receipt"
  }
}

fn checkout(ctx: &Checkout) -> RecantResult<(Checkout, Outcome)> {
  // Payment is one logical step made of two commands.
  let payment = compose(vec![
    factory(|ctx| ReserveInventory { ctx, quantity: 2 }),
    factory(|ctx| ChargeCard {
      ctx,
      amount_cents: 4_999,
      charged: false,
    }),
  ]);

  // The receipt is skipped if anything before it failed.
  run_with_outcome(ctx, &[payment, guarded(factory(SendReceipt))])
}

fn main() -> RecantResult<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,recant=debug")))
    .init();

  let order = Checkout {
    success: true,
    stock: 10,
    balance_cents: 10_000,
    ..Default::default()
  };

  info!("--- Scenario 1: happy path ---");
  let (done, outcome) = checkout(&order)?;
  assert_eq!(outcome, Outcome::Completed);
  assert_eq!(done.stock, 8);
  assert_eq!(done.balance_cents, 5_001);
  assert_eq!(done.emails_sent.len(), 1);

  info!("--- Scenario 2: card declined, inventory released ---");
  let declined = Checkout {
    card_declined: true,
    ..order.clone()
  };
  let (undone, outcome) = checkout(&declined)?;
  assert_eq!(outcome, Outcome::Compensated);
  assert!(!undone.success);
  assert_eq!(undone.stock, 10);
  assert_eq!(undone.reserved, 0);
  assert_eq!(undone.balance_cents, 10_000);
  assert!(undone.emails_sent.is_empty());

  info!("Final stock after declined checkout: {}", undone.stock);
  Ok(())
}
