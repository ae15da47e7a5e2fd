//! State machine engine.
//!
//! The engine is split in two halves:
//!
//! - **`Fsm<M>`**: caller side. Starts a machine, dispatches events to its
//!   current state and inspects which state is current.
//! - **`Transit<S>`**: handler side. Handed by value to every reaction;
//!   performs the exit, action, reassignment, entry sequence of a
//!   transition.
//!
//! # Re-entrancy
//!
//! Handlers, hooks and transition actions must not dispatch into a machine
//! whose current state is held by a handler further up the stack. The
//! registry detects this: the `try_*` entry points report
//! [`FsmError::StateBusy`](crate::FsmError::StateBusy), the others panic
//! with the same message. A transition whose target is held is refused
//! before any hook runs, so the machine never ends up half-transitioned.

mod machine;
mod transition;

pub use machine::Fsm;
pub use transition::Transit;

#[doc(hidden)]
pub use machine::{deliver, enter_state};
