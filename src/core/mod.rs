//! Core contracts implemented by application code.
//!
//! This module contains the traits a state machine is built from:
//! - Events via the `Event` marker trait
//! - States via the `State` trait, registered as singletons by [`machine!`](crate::machine)
//! - Machines via the `Machine` trait, with per-event reactions (`Reacts`, `React`)
//!
//! Nothing in here allocates or dispatches dynamically. Every route from an
//! event to a handler is resolved by monomorphization.

mod event;
mod machine;
mod state;

pub use event::Event;
pub use machine::{Machine, React, Reacts, Route};
pub use state::{Singleton, State};
