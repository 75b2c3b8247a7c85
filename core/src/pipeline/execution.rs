// vitrine_flow/src/pipeline/execution.rs

//! Contains the `Pipeline::run()` method, responsible for executing the pipeline's steps and handlers.

use crate::core::context::Handler;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

/// Outcome of running one phase (`before`, `on` or `after`) of a step.
enum PhaseOutcome {
  Continue,
  Stop,
}

impl<TData, Err> Pipeline<TData, Err>
where
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Executes the pipeline against `ctx`.
  ///
  /// Steps run in order and, inside a step, handlers run `before` -> `on` -> `after`
  /// in registration order. The first `Stop` ends the run with
  /// `PipelineResult::Stopped`; the first error is returned unchanged.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            pipeline_context_type = %std::any::type_name::<TData>(),
            num_steps = self.steps.len(),
        ),
        err(Display)
    )]
  pub fn run(&self, ctx: &mut TData) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name_str = step_def.name.as_str();

      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step_name_str,
        step_index = step_idx,
        optional = step_def.optional
      );
      let _step_span_guard = step_span.enter();
      event!(Level::DEBUG, "Processing step.");

      let has_handlers = [&self.before, &self.on, &self.after]
        .iter()
        .any(|phase| phase.get(step_name_str).map_or(false, |v| !v.is_empty()));

      if !has_handlers {
        if step_def.optional {
          event!(Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(Level::ERROR, "Non-optional step has no handlers.");
        return Err(Err::from(FlowError::HandlerMissing {
          step_name: step_def.name.clone(),
        }));
      }

      for (phase_name, phase) in [("before", &self.before), ("on", &self.on), ("after", &self.after)] {
        let Some(handlers) = phase.get(step_name_str) else {
          continue;
        };
        if let PhaseOutcome::Stop = run_phase(phase_name, handlers, ctx)? {
          event!(Level::INFO, phase = phase_name, "Pipeline stopped by a handler.");
          return Ok(PipelineResult::Stopped {
            step: step_def.name.clone(),
          });
        }
      }
      event!(Level::DEBUG, "Step processing finished successfully.");
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(PipelineResult::Completed)
  }
}

fn run_phase<TData, Err>(
  phase_name: &'static str,
  handlers: &[Handler<TData, Err>],
  ctx: &mut TData,
) -> Result<PhaseOutcome, Err>
where
  Err: std::error::Error,
{
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    let handler_span = span!(Level::DEBUG, "step_handler", phase = phase_name, handler_index = handler_idx);
    let _handler_span_guard = handler_span.enter();
    match handler_fn(ctx) {
      Ok(PipelineControl::Continue) => {}
      Ok(PipelineControl::Stop) => return Ok(PhaseOutcome::Stop),
      Err(e) => {
        event!(Level::ERROR, error = %e, "'{}' handler failed.", phase_name);
        return Err(e);
      }
    }
  }
  Ok(PhaseOutcome::Continue)
}
