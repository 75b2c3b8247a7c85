pub mod context;
pub mod control;
pub mod step;

// Re-export key types for easier access from the pipeline modules (and lib.rs)
pub use context::Handler;
pub use control::{PipelineControl, PipelineResult};
pub use step::StepDef;
