//! Ordered groups of machines and states.
//!
//! Groups are tuples of types. They own no instances, only the order in
//! which an operation fans out. Every operation visits the members in
//! declared order and runs to completion before the next member is visited.
//! The empty tuple `()` is the base case and turns every operation into a
//! no-op.
//!
//! Tuples of up to twelve members are supported.

mod machine_list;
mod state_list;

pub use machine_list::{Broadcast, FsmList, Machines};
pub use state_list::{StateList, States};
