// vitrine/src/main.rs

use std::io;
use std::sync::Arc;

use anyhow::{bail, Context};
use vitrine::admin::{AdminOutcome, TerminalPrompter};
use vitrine::config::StorefrontConfig;
use vitrine::models::ProductId;
use vitrine::storage::FileStorage;
use vitrine::telemetry::init_tracing;
use vitrine::Storefront;

const USAGE: &str = "usage: vitrine [render | admin | edit <id> | delete <id> | cart-add <id> <size> | cart-clear | checkout-link]";

fn parse_id(raw: Option<&String>) -> anyhow::Result<ProductId> {
  let raw = raw.context("a product id is required")?;
  let id = raw
    .trim()
    .parse::<i64>()
    .with_context(|| format!("'{}' is not a product id", raw))?;
  Ok(ProductId(id))
}

fn report(outcome: &AdminOutcome) {
  tracing::info!(?outcome, mutated = outcome.mutated(), "Admin action finished.");
  println!("{:?}", outcome);
}

fn main() -> anyhow::Result<()> {
  let config = Arc::new(StorefrontConfig::from_env().context("Failed to load storefront configuration")?);
  init_tracing(config.log_json);

  if config.uses_placeholder_contact() {
    tracing::warn!(
      contact_id = %config.contact_id,
      "VITRINE_CONTACT_ID not set; order links point at the example contact."
    );
  }
  tracing::info!(storage_dir = %config.storage_dir.display(), "Storefront configuration loaded.");

  let storage = Arc::new(FileStorage::open(&config.storage_dir)?);
  let mut storefront = Storefront::open(config.clone(), storage)?;

  let args: Vec<String> = std::env::args().skip(1).collect();
  let command = args.first().map(String::as_str).unwrap_or("render");

  let stdin = io::stdin();
  let mut prompter = TerminalPrompter::new(stdin.lock(), io::stdout());

  match command {
    "render" => println!("{}", storefront.render_page()?),
    "admin" => report(&storefront.admin_toggle(&mut prompter)?),
    "edit" => {
      let id = parse_id(args.get(1))?;
      report(&storefront.edit_product(&mut prompter, id)?);
    }
    "delete" => {
      let id = parse_id(args.get(1))?;
      report(&storefront.delete_product(&mut prompter, id)?);
    }
    "cart-add" => {
      let id = parse_id(args.get(1))?;
      let size = args.get(2).context("a size is required")?;
      let line = storefront.add_to_cart(id, size)?;
      println!("{} x{}", line.key, line.qty);
    }
    "cart-clear" => storefront.clear_cart()?,
    "checkout-link" => match storefront.checkout_link() {
      Some(link) => println!("{}", link),
      None => println!("Cart is empty."),
    },
    other => bail!("unknown command '{}'\n{}", other, USAGE),
  }
  Ok(())
}
