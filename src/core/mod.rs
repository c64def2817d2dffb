//! Core document lifecycle types and logic.
//!
//! This module contains the pure functional core of the machine:
//! - State definitions: [`DocumentState`] and [`FileName`]
//! - Events: [`DocumentEvent`]
//! - The [`transition`] function and its [`Step`]/[`Outcome`] results
//! - Immutable history tracking
//!
//! The only side effects are the zero-or-one collaborator calls a
//! transition makes through the injected interfaces; everything else
//! is pure, following the "pure core, imperative shell" philosophy.

mod event;
mod history;
mod machine;
mod state;

pub use event::DocumentEvent;
pub use history::{DocumentHistory, TransitionRecord};
pub use machine::{transition, Outcome, SaveBlocked, Step};
pub use state::{DocumentState, FileName, InvalidFileName};
