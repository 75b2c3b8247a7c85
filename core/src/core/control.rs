// vitrine_flow/src/core/control.rs

//! Signals for controlling pipeline flow and the outcome of a pipeline run.

/// Signal from a handler indicating whether the pipeline should continue or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  /// Run the next handler of the current step, then the following steps.
  Continue,
  /// Halt the pipeline. Remaining handlers of this step and all later steps are skipped.
  Stop,
}

/// Outcome of a full pipeline execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every step ran (or was legitimately skipped).
  Completed,
  /// A handler returned `PipelineControl::Stop` while `step` was executing.
  Stopped { step: String },
}

impl PipelineResult {
  pub fn is_completed(&self) -> bool {
    matches!(self, PipelineResult::Completed)
  }

  /// Name of the step that stopped the run, if any.
  pub fn stopped_at(&self) -> Option<&str> {
    match self {
      PipelineResult::Completed => None,
      PipelineResult::Stopped { step } => Some(step.as_str()),
    }
  }
}
