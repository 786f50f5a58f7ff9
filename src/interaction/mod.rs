//! Pointer-driven interaction

pub mod machine;
pub mod log;

pub use machine::{Feedback, InteractionMachine, Mutation, PointerEvent, StepOutput};
pub use log::{Action, ActionKind, ActionLog};
