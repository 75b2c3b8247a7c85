// vitrine_flow/src/pipeline/definition.rs

//! Contains the `Pipeline<TData, Err>` struct definition and methods for its
//! construction and structural modification.

use crate::core::context::Handler;
use crate::core::step::StepDef;
use crate::error::{FlowError, FlowResult};
use std::collections::HashMap;

/// The core Pipeline type, generic over the context data `TData` its handlers
/// operate on and the error type `Err` those handlers return.
///
/// `Err` must be convertible from [`FlowError`] so that structural problems
/// found during a run (a required step with no handler) come back through the
/// same error channel as handler failures.
pub struct Pipeline<TData, Err>
where
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Ordered list of step definitions for this pipeline.
  pub(crate) steps: Vec<StepDef>,

  // Handlers for the different phases of each step.
  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a new `Pipeline` from `(name, optional)` step definitions.
  pub fn new(step_defs: &[(&str, bool)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional)| StepDef::new(*name, *optional))
      .collect();

    Self {
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  /// Step names in execution order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  pub fn has_step(&self, step_name: &str) -> bool {
    self.steps.iter().any(|s| s.name == step_name)
  }

  pub(crate) fn position_of(&self, step_name: &str) -> FlowResult<usize> {
    self
      .steps
      .iter()
      .position(|s| s.name == step_name)
      .ok_or_else(|| FlowError::StepNotFound {
        step_name: step_name.to_string(),
      })
  }

  fn ensure_step_not_exists(&self, step_name: &str) -> FlowResult<()> {
    if self.has_step(step_name) {
      return Err(FlowError::DuplicateStep {
        step_name: step_name.to_string(),
      });
    }
    Ok(())
  }

  // --- Basic Step Manipulation Methods ---

  pub fn insert_before_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
  ) -> FlowResult<()> {
    let idx = self.position_of(existing_step_name)?;
    let name_str: String = new_step_name.into();
    self.ensure_step_not_exists(&name_str)?;
    self.steps.insert(idx, StepDef::new(name_str, optional));
    Ok(())
  }

  pub fn insert_after_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
  ) -> FlowResult<()> {
    let idx = self.position_of(existing_step_name)?;
    let name_str: String = new_step_name.into();
    self.ensure_step_not_exists(&name_str)?;
    self.steps.insert(idx + 1, StepDef::new(name_str, optional));
    Ok(())
  }

  /// Removes a step and every handler registered for it. Removing an unknown step is a no-op.
  pub fn remove_step(&mut self, step_name: &str) {
    if let Ok(idx) = self.position_of(step_name) {
      self.steps.remove(idx);
      self.before.remove(step_name);
      self.on.remove(step_name);
      self.after.remove(step_name);
    }
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) -> FlowResult<()> {
    let idx = self.position_of(step_name)?;
    self.steps[idx].optional = optional;
    Ok(())
  }
}
