// vitrine/src/admin/editor.rs

//! The add/edit product editor.
//!
//! Four prompts and a commit, run as a `vitrine_flow` pipeline:
//! `prompt_name -> prompt_price -> prompt_image -> prompt_sizes -> commit`.
//! A cancelled prompt stops the pipeline before `commit`, so an aborted edit
//! never touches the catalog.

use thiserror::Error;
use tracing::{info, instrument, warn};
use vitrine_flow::{FlowResult, Pipeline, PipelineControl, PipelineResult};

use super::prompt::Prompter;
use super::{AdminOutcome, CancelPoint};
use crate::config::StorefrontConfig;
use crate::errors::{AppError, Result};
use crate::models::{ProductDraft, ProductId};
use crate::stores::CatalogStore;

pub const STEP_PROMPT_NAME: &str = "prompt_name";
pub const STEP_PROMPT_PRICE: &str = "prompt_price";
pub const STEP_PROMPT_IMAGE: &str = "prompt_image";
pub const STEP_PROMPT_SIZES: &str = "prompt_sizes";
pub const STEP_COMMIT: &str = "commit";

/// Price given to a new product when the typed price is unusable.
pub const DEFAULT_NEW_PRICE: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
  Idle,
  PromptName,
  PromptPrice,
  PromptImage,
  PromptSizes,
  Commit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
  New,
  Existing(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
  #[error("price is empty")]
  Empty,
  #[error("'{0}' is not a whole number")]
  NotANumber(String),
  #[error("price {0} is negative")]
  Negative(i64),
}

/// Strict price parse: surrounding whitespace is ignored, anything else must be a
/// non-negative integer.
pub fn parse_price(raw: &str) -> std::result::Result<i64, PriceParseError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(PriceParseError::Empty);
  }
  let price = trimmed
    .parse::<i64>()
    .map_err(|_| PriceParseError::NotANumber(trimmed.to_string()))?;
  if price < 0 {
    return Err(PriceParseError::Negative(price));
  }
  Ok(price)
}

/// Comma-separated sizes, trimmed, empties dropped, order kept.
pub fn parse_sizes(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

/// Everything the editor steps read and write during one run.
pub struct EditorContext<'a> {
  prompter: &'a mut dyn Prompter,
  catalog: &'a mut CatalogStore,
  placeholder_image: String,
  target: EditTarget,
  /// Current values of the product being edited; blank for a new product.
  base: ProductDraft,
  state: EditorState,
  name: Option<String>,
  raw_price: Option<String>,
  image: Option<String>,
  raw_sizes: Option<String>,
  committed: Option<ProductId>,
}

impl<'a> EditorContext<'a> {
  fn new(
    prompter: &'a mut dyn Prompter,
    catalog: &'a mut CatalogStore,
    config: &StorefrontConfig,
    target: EditTarget,
    base: ProductDraft,
  ) -> Self {
    Self {
      prompter,
      catalog,
      placeholder_image: config.placeholder_image.clone(),
      target,
      base,
      state: EditorState::Idle,
      name: None,
      raw_price: None,
      image: None,
      raw_sizes: None,
      committed: None,
    }
  }

  fn ask(&mut self, state: EditorState, message: &str, default: &str) -> Option<String> {
    self.state = state;
    self.prompter.prompt(message, default)
  }

  /// Applies the fallbacks: blank name keeps the previous name, an unusable price
  /// keeps the previous price (or `DEFAULT_NEW_PRICE` for new products), a blank
  /// image becomes the placeholder.
  fn assemble_draft(&self) -> ProductDraft {
    let name = self.name.as_deref().map(str::trim).unwrap_or_default();
    let name = if name.is_empty() {
      self.base.name.clone()
    } else {
      name.to_string()
    };

    let price_fallback = match self.target {
      EditTarget::Existing(_) => self.base.price,
      EditTarget::New => DEFAULT_NEW_PRICE,
    };
    let raw_price = self.raw_price.as_deref().unwrap_or_default();
    let price = match parse_price(raw_price) {
      Ok(price) => price,
      Err(e) => {
        warn!(error = %e, fallback = price_fallback, "Unusable price entered; keeping fallback price.");
        price_fallback
      }
    };

    let image = self.image.as_deref().map(str::trim).unwrap_or_default();
    let image = if image.is_empty() {
      self.placeholder_image.clone()
    } else {
      image.to_string()
    };

    ProductDraft {
      name,
      price,
      image,
      size_options: parse_sizes(self.raw_sizes.as_deref().unwrap_or_default()),
    }
  }
}

fn answered(answer: Option<String>, slot: &mut Option<String>) -> PipelineControl {
  match answer {
    Some(text) => {
      *slot = Some(text);
      PipelineControl::Continue
    }
    None => PipelineControl::Stop,
  }
}

/// Builds the editor pipeline. Each run borrows its prompter and catalog for `'a`.
pub fn editor_pipeline<'a>() -> FlowResult<Pipeline<EditorContext<'a>, AppError>> {
  let mut p = Pipeline::<EditorContext<'a>, AppError>::new(&[
    (STEP_PROMPT_NAME, false),
    (STEP_PROMPT_PRICE, false),
    (STEP_PROMPT_IMAGE, false),
    (STEP_PROMPT_SIZES, false),
    (STEP_COMMIT, false),
  ]);

  p.on_root(STEP_PROMPT_NAME, |ctx: &mut EditorContext<'a>| {
    let default = ctx.base.name.clone();
    let answer = ctx.ask(EditorState::PromptName, "Product name:", &default);
    Ok::<_, AppError>(answered(answer, &mut ctx.name))
  })?;

  p.on_root(STEP_PROMPT_PRICE, |ctx: &mut EditorContext<'a>| {
    let default = ctx.base.price.to_string();
    let answer = ctx.ask(EditorState::PromptPrice, "Price (number):", &default);
    Ok::<_, AppError>(answered(answer, &mut ctx.raw_price))
  })?;

  p.on_root(STEP_PROMPT_IMAGE, |ctx: &mut EditorContext<'a>| {
    let default = if ctx.base.image.is_empty() {
      ctx.placeholder_image.clone()
    } else {
      ctx.base.image.clone()
    };
    let answer = ctx.ask(EditorState::PromptImage, "Image URL:", &default);
    Ok::<_, AppError>(answered(answer, &mut ctx.image))
  })?;

  p.on_root(STEP_PROMPT_SIZES, |ctx: &mut EditorContext<'a>| {
    let default = ctx.base.size_options.join(",");
    let answer = ctx.ask(EditorState::PromptSizes, "Sizes (comma separated):", &default);
    Ok::<_, AppError>(answered(answer, &mut ctx.raw_sizes))
  })?;

  p.on_root(STEP_COMMIT, |ctx: &mut EditorContext<'a>| -> Result<PipelineControl> {
    ctx.state = EditorState::Commit;
    let draft = ctx.assemble_draft();
    let id = match ctx.target {
      EditTarget::New => ctx.catalog.add(draft)?,
      EditTarget::Existing(id) => {
        // The product was present when the editor opened; a miss here means it
        // vanished mid-edit.
        ctx
          .catalog
          .update(id, draft)?
          .ok_or_else(|| AppError::NotFound(format!("Product {} disappeared during edit", id)))?;
        id
      }
    };
    ctx.committed = Some(id);
    Ok(PipelineControl::Continue)
  })?;

  Ok(p)
}

/// Runs the editor for a new product or an existing one.
///
/// Editing an unknown id asks nothing and returns `AdminOutcome::NotFound`.
#[instrument(name = "admin::run_editor", skip(prompter, catalog, config))]
pub fn run_editor(
  prompter: &mut dyn Prompter,
  catalog: &mut CatalogStore,
  config: &StorefrontConfig,
  target: EditTarget,
) -> Result<AdminOutcome> {
  let base = match target {
    EditTarget::New => ProductDraft::default(),
    EditTarget::Existing(id) => match catalog.get(id) {
      Some(product) => product.to_draft(),
      None => {
        warn!(%id, "Edit requested for unknown product.");
        return Ok(AdminOutcome::NotFound(id));
      }
    },
  };

  let pipeline = editor_pipeline()?;
  let mut ctx = EditorContext::new(prompter, catalog, config, target, base);

  let outcome = match pipeline.run(&mut ctx)? {
    PipelineResult::Completed => match (ctx.committed, target) {
      (Some(id), EditTarget::New) => AdminOutcome::Added(id),
      (Some(id), EditTarget::Existing(_)) => AdminOutcome::Updated(id),
      (None, _) => return Err(AppError::Internal("Editor completed without committing".to_string())),
    },
    PipelineResult::Stopped { step } => {
      // The state records which prompt was open when the user backed out.
      let at = ctx.state;
      info!(%step, ?at, "Editor cancelled; catalog left unchanged.");
      AdminOutcome::Cancelled(CancelPoint::Editor(at))
    }
  };
  Ok(outcome)
}
