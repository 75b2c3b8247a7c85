// src/lib.rs

//! vitrine-flow: a synchronous step pipeline for prompt-driven workflows.
//!
//! A pipeline is an ordered list of named steps. Each step can carry
//! `before`, `on` and `after` handlers that receive `&mut TData` and return a
//! [`PipelineControl`]:
//!  - `Continue` moves on to the next handler, then the next step.
//!  - `Stop` halts the run immediately; nothing after it executes and the run
//!    reports which step stopped it.
//!  - An `Err` is propagated to the caller as-is.
//!
//! Steps may be optional (skipped when nothing is registered for them) and
//! can be inserted or removed after construction.
//!
//! The storefront admin editor is built on this: one step per prompt, where a
//! cancelled prompt returns `Stop` so the whole edit is discarded.

pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::context::Handler;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::StepDef;

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{FlowError, FlowResult};

/*
    Core Workflow:
    1. Define a context struct `MyCtx` holding everything the steps read or write.
    2. Create a `Pipeline<MyCtx, MyErr>` with its step names, where `MyErr: From<FlowError>`.
    3. Register handlers with `.on_root()`, `.before_root()`, `.after_root()`.
    4. Build a `MyCtx` and call `pipeline.run(&mut ctx)`.
    5. Inspect the `PipelineResult` (Completed / Stopped { step }) and the context.
*/
