//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `guidance.rs` — schema/guide command trees.
//! - `runtime.rs` — analyze/template/validate/submit/confirm/status.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod guidance;
pub mod runtime;

pub use guidance::handle_guidance_commands;
pub use runtime::handle_runtime_commands;
