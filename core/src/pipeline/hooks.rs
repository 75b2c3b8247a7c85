// vitrine_flow/src/pipeline/hooks.rs

//! Methods for registering `before`, `on` and `after` handlers for pipeline steps.

use tracing::{event, Level};

use crate::core::context::Handler;
use crate::core::control::PipelineControl;
use crate::error::{FlowError, FlowResult};
use crate::pipeline::definition::Pipeline;

impl<TData, Err> Pipeline<TData, Err>
where
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Registers a `before` hook for a given step.
  ///
  /// The handler may return any error type that converts into the pipeline's `Err`.
  pub fn before_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) -> FlowResult<()>
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.position_of(step_name)?;
    self
      .before
      .entry(step_name.to_string())
      .or_default()
      .push(wrap_handler(handler_fn));
    event!(Level::TRACE, %step_name, "'before' handler registered.");
    Ok(())
  }

  /// Registers an `on` hook for a given step.
  pub fn on_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) -> FlowResult<()>
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.position_of(step_name)?;
    self
      .on
      .entry(step_name.to_string())
      .or_default()
      .push(wrap_handler(handler_fn));
    event!(Level::TRACE, %step_name, "'on' handler registered.");
    Ok(())
  }

  /// Registers an `after` hook for a given step.
  pub fn after_root<UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
  ) -> FlowResult<()>
  where
    UserProvidedErr: Into<Err> + 'static,
  {
    self.position_of(step_name)?;
    self
      .after
      .entry(step_name.to_string())
      .or_default()
      .push(wrap_handler(handler_fn));
    event!(Level::TRACE, %step_name, "'after' handler registered.");
    Ok(())
  }
}

fn wrap_handler<TData, Err, UserProvidedErr>(
  handler_fn: impl Fn(&mut TData) -> Result<PipelineControl, UserProvidedErr> + Send + Sync + 'static,
) -> Handler<TData, Err>
where
  UserProvidedErr: Into<Err> + 'static,
{
  Box::new(move |ctx: &mut TData| handler_fn(ctx).map_err(Into::into))
}
