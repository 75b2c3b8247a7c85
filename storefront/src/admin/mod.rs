// vitrine/src/admin/mod.rs

//! Catalog administration: the admin toggle, the add/edit editor and deletion.

pub mod editor;
pub mod prompt;

pub use editor::{parse_price, parse_sizes, run_editor, EditTarget, EditorState, PriceParseError};
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};

use std::str::FromStr;

use tracing::{info, instrument};

use crate::config::StorefrontConfig;
use crate::errors::Result;
use crate::models::ProductId;
use crate::stores::CatalogStore;

pub const ADMIN_ACTION_PROMPT: &str = "Type 'add' to add product, 'clear' to reset all products:";
pub const RESET_CONFIRMATION: &str = "Clear all saved products and restore defaults?";
pub const DELETE_CONFIRMATION: &str = "Delete this product?";

/// Where an admin operation was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelPoint {
  /// The admin toggle's action prompt was cancelled or left empty.
  ActionPrompt,
  /// A yes/no confirmation was declined.
  Confirmation,
  /// The editor was cancelled while this prompt was open.
  Editor(EditorState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminOutcome {
  Added(ProductId),
  Updated(ProductId),
  Deleted(ProductId),
  Reset,
  Cancelled(CancelPoint),
  NotFound(ProductId),
  UnknownAction(String),
}

impl AdminOutcome {
  /// Whether the catalog was changed.
  pub fn mutated(&self) -> bool {
    matches!(
      self,
      AdminOutcome::Added(_) | AdminOutcome::Updated(_) | AdminOutcome::Deleted(_) | AdminOutcome::Reset
    )
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
  Add,
  Reset,
}

impl FromStr for AdminAction {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "add" => Ok(AdminAction::Add),
      "clear" => Ok(AdminAction::Reset),
      other => Err(other.to_string()),
    }
  }
}

/// The admin toggle: asks for an action, then opens the editor for a new
/// product or resets the catalog after confirmation.
#[instrument(name = "admin::toggle", skip_all)]
pub fn run_admin_toggle(
  prompter: &mut dyn Prompter,
  catalog: &mut CatalogStore,
  config: &StorefrontConfig,
) -> Result<AdminOutcome> {
  let raw = match prompter.prompt(ADMIN_ACTION_PROMPT, "") {
    Some(raw) if !raw.trim().is_empty() => raw,
    _ => return Ok(AdminOutcome::Cancelled(CancelPoint::ActionPrompt)),
  };

  match raw.parse::<AdminAction>() {
    Ok(AdminAction::Add) => run_editor(prompter, catalog, config, EditTarget::New),
    Ok(AdminAction::Reset) => {
      if !prompter.confirm(RESET_CONFIRMATION) {
        return Ok(AdminOutcome::Cancelled(CancelPoint::Confirmation));
      }
      catalog.reset()?;
      Ok(AdminOutcome::Reset)
    }
    Err(unknown) => {
      info!(action = %unknown, "Unknown admin action ignored.");
      Ok(AdminOutcome::UnknownAction(unknown))
    }
  }
}

/// Deletes a product after confirmation. Cart lines holding it are left alone.
#[instrument(name = "admin::delete_product", skip(prompter, catalog))]
pub fn delete_product(prompter: &mut dyn Prompter, catalog: &mut CatalogStore, id: ProductId) -> Result<AdminOutcome> {
  if catalog.get(id).is_none() {
    return Ok(AdminOutcome::NotFound(id));
  }
  if !prompter.confirm(DELETE_CONFIRMATION) {
    return Ok(AdminOutcome::Cancelled(CancelPoint::Confirmation));
  }
  match catalog.remove(id)? {
    Some(_) => Ok(AdminOutcome::Deleted(id)),
    None => Ok(AdminOutcome::NotFound(id)),
  }
}
