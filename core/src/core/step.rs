// vitrine_flow/src/core/step.rs

//! Definition of a single step within a pipeline.

/// A named step. Optional steps are skipped when no handler is registered for them;
/// a non-optional step without handlers fails the run with `FlowError::HandlerMissing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
  pub name: String,
  pub optional: bool,
}

impl StepDef {
  pub fn new(name: impl Into<String>, optional: bool) -> Self {
    Self {
      name: name.into(),
      optional,
    }
  }
}
