//! Effectful document machine built on Stillwater 0.11.0.
//!
//! This module provides the "imperative shell" around the pure core:
//! it looks up the collaborators from an effect environment, runs the
//! pure transition, and applies the result.
//!
//! Following Stillwater 0.11.0 conventions:
//! - [`DocumentMachine::handle`] returns `impl Effect` for zero-cost
//!   composition
//! - Environments are `Clone + Send + Sync` and built with
//!   [`EditorContext`]
//! - Effects are constructed with the free-standing `from_fn`

mod machine;

pub use machine::{DocumentMachine, EditorContext, EditorEnv, MachineError};
