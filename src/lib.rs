//! TinyFSM: a tiny finite state machine core with static dispatch
//!
//! Each machine owns a fixed set of state types, and each state type exists
//! exactly once. Events are routed to the current state through generated
//! `match` tables over monomorphized generics: no heap allocation, no trait
//! objects, no runtime type lookup.
//!
//! # Core Concepts
//!
//! - **Event**: any type implementing the `Event` marker trait
//! - **State**: a `Default` value type with entry/exit hooks, one singleton
//!   per type
//! - **Machine**: declared with [`machine!`], bound to its initial state and
//!   its closed state set
//! - **Reactions**: `Reacts<E>` on the machine declares an event and its
//!   default reaction; `React<E>` on a state overrides it
//! - **Engine**: `Fsm<M>` starts and drives a machine; `Transit` performs
//!   transitions from inside a reaction
//! - **Groups**: `FsmList` broadcasts to several machines in order;
//!   `StateList` resets several states at once
//!
//! # Example
//!
//! ```rust
//! use tinyfsm::{machine, Event, Fsm, React, Reacts, State, StateList, Transit};
//!
//! struct Toggle;
//! impl Event for Toggle {}
//!
//! #[derive(Default)]
//! struct On;
//!
//! #[derive(Default)]
//! struct Off {
//!     times_opened: u32,
//! }
//!
//! machine! {
//!     Switch {
//!         initial: Off,
//!         states: [On, Off],
//!     }
//! }
//!
//! impl State for On {
//!     type Machine = Switch;
//!
//!     fn entry(&mut self) {
//!         println!("* Closing circuit (light goes ON)");
//!     }
//! }
//!
//! impl State for Off {
//!     type Machine = Switch;
//!
//!     fn entry(&mut self) {
//!         self.times_opened += 1;
//!         println!("* Opening circuit (light goes OFF)");
//!     }
//! }
//!
//! impl Reacts<Toggle> for Switch {}
//!
//! impl React<Toggle> for On {
//!     fn react(fsm: Transit<'_, Self>, _: &Toggle) {
//!         fsm.transit::<Off>();
//!     }
//! }
//!
//! impl React<Toggle> for Off {
//!     fn react(fsm: Transit<'_, Self>, _: &Toggle) {
//!         fsm.transit::<On>();
//!     }
//! }
//!
//! Fsm::<Switch>::start();
//! Fsm::<Switch>::dispatch(&Toggle);
//! Fsm::<Switch>::dispatch(&Toggle);
//!
//! assert!(Fsm::<Switch>::is_in_state::<Off>());
//! assert_eq!(Fsm::<Switch>::state::<Off, _>(|off| off.times_opened), 2);
//!
//! StateList::<(On, Off)>::reset();
//! assert_eq!(Fsm::<Switch>::state::<Off, _>(|off| off.times_opened), 0);
//! ```
//!
//! # Compile-time guarantees
//!
//! Transitioning to a state of another machine does not compile:
//!
//! ```compile_fail
//! use tinyfsm::{machine, Event, React, Reacts, State, Transit};
//!
//! struct Go;
//! impl Event for Go {}
//!
//! #[derive(Default)]
//! struct A;
//! #[derive(Default)]
//! struct B;
//!
//! machine! { First { initial: A, states: [A] } }
//! machine! { Second { initial: B, states: [B] } }
//!
//! impl State for A { type Machine = First; }
//! impl State for B { type Machine = Second; }
//!
//! impl Reacts<Go> for First {}
//! impl React<Go> for A {
//!     fn react(fsm: Transit<'_, Self>, _: &Go) {
//!         fsm.transit::<B>();
//!     }
//! }
//! ```
//!
//! Neither does accessing a foreign state through a machine:
//!
//! ```compile_fail
//! use tinyfsm::{machine, Fsm, State};
//!
//! #[derive(Default)]
//! struct A;
//! #[derive(Default)]
//! struct B;
//!
//! machine! { First { initial: A, states: [A] } }
//! machine! { Second { initial: B, states: [B] } }
//!
//! impl State for A { type Machine = First; }
//! impl State for B { type Machine = Second; }
//!
//! let _ = Fsm::<First>::is_in_state::<B>();
//! ```
//!
//! Nor dispatching an event the machine never declared:
//!
//! ```compile_fail
//! use tinyfsm::{machine, Event, Fsm, State};
//!
//! struct Unknown;
//! impl Event for Unknown {}
//!
//! #[derive(Default)]
//! struct A;
//!
//! machine! { First { initial: A, states: [A] } }
//!
//! impl State for A { type Machine = First; }
//!
//! Fsm::<First>::dispatch(&Unknown);
//! ```
//!
//! Nor listing a state under a machine it does not belong to:
//!
//! ```compile_fail
//! use tinyfsm::{machine, State};
//!
//! #[derive(Default)]
//! struct A;
//! #[derive(Default)]
//! struct B;
//!
//! machine! { First { initial: A, states: [A, B] } }
//! machine! { Second { initial: B, states: [B] } }
//!
//! impl State for A { type Machine = First; }
//! impl State for B { type Machine = Second; }
//! ```
//!
//! # Threading
//!
//! The engine is synchronous and runs every handler inline. State
//! singletons and current-state slots are process-wide, so all threads see
//! the same instances. The engine never blocks: a state held by one thread
//! is reported as busy to another. Programs driving a machine from several
//! threads serialise their calls with a lock of their own.

pub mod core;
pub mod engine;
pub mod error;
pub mod group;
pub mod registry;

mod macros;

#[cfg(test)]
mod testing;

#[doc(hidden)]
pub use paste;

// Re-export commonly used types
pub use crate::core::{Event, Machine, React, Reacts, Route, Singleton, State};
pub use engine::{Fsm, Transit};
pub use error::FsmError;
pub use group::{FsmList, StateList};
