// vitrine_flow/src/core/context.rs

//! The `Handler<TData, Err>` type used for every pipeline hook.

use crate::core::control::PipelineControl;

/// A pipeline step handler.
///
/// Handlers borrow the run's context mutably for the duration of the call and
/// return `PipelineControl::Continue` to proceed or `PipelineControl::Stop` to
/// halt the pipeline. Because runs are synchronous, a handler may perform
/// blocking interaction (such as prompting a user) directly.
pub type Handler<TData, Err> = Box<dyn Fn(&mut TData) -> Result<PipelineControl, Err> + Send + Sync>;
