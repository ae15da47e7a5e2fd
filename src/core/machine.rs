//! Machine contract and per-event reactions.

use super::event::Event;
use super::state::Singleton;
use crate::engine::Transit;
use crate::error::FsmError;
use parking_lot::Mutex;
use std::any::type_name;
use std::fmt::Debug;

/// A named category of behavior with a closed set of states.
///
/// Implemented by [`machine!`](crate::machine). The declaration binds the
/// machine to its initial state, so a machine without one cannot be
/// expressed. Runtime operations live on [`Fsm`](crate::Fsm).
///
/// Data shared by all states of a machine lives at machine scope, e.g. in a
/// `static`. The declaration may name a `reset` function for it, which
/// [`Fsm::reset`](crate::Fsm::reset) runs after resetting the states.
pub trait Machine: Sized + 'static {
    /// Identity of the machine's states, one variant per state.
    type StateId: Copy + Eq + Debug + Send + 'static;

    /// The state made current by `start()`.
    type Initial: Singleton<Machine = Self>;

    /// Human readable machine name, used in logs and errors.
    const NAME: &'static str;

    /// Name of the state identified by `id`.
    fn state_name(id: Self::StateId) -> &'static str;

    /// Reset machine-scope data. Does nothing unless the declaration names
    /// a `reset` function.
    fn reset() {}

    #[doc(hidden)]
    fn current() -> &'static Mutex<Self::StateId>;

    #[doc(hidden)]
    fn enter_state(id: Self::StateId) -> Result<(), FsmError>;

    #[doc(hidden)]
    fn reset_states() -> Result<(), FsmError>;
}

/// Declares that a machine reacts to events of type `E`.
///
/// Dispatching an event the machine does not declare fails to compile.
/// The provided [`unhandled`](Reacts::unhandled) is the machine-wide default
/// reaction, used by every state that does not override
/// [`React::react`]. It logs the event at debug level and ignores it;
/// machines override it to give an event a common meaning across states.
///
/// # Example
///
/// ```rust
/// use tinyfsm::{machine, Event, React, Reacts, Singleton, State, Transit};
///
/// struct Alarm;
/// impl Event for Alarm {}
///
/// #[derive(Default)]
/// struct Idle;
/// #[derive(Default)]
/// struct Panic;
///
/// machine! {
///     Elevator {
///         initial: Idle,
///         states: [Idle, Panic],
///     }
/// }
///
/// impl State for Idle {
///     type Machine = Elevator;
/// }
/// impl State for Panic {
///     type Machine = Elevator;
/// }
///
/// // Every state panics on an alarm unless it says otherwise.
/// impl Reacts<Alarm> for Elevator {
///     fn unhandled<S>(fsm: Transit<'_, S>, _: &Alarm)
///     where
///         S: Singleton<Machine = Self>,
///     {
///         fsm.transit::<Panic>();
///     }
/// }
///
/// impl React<Alarm> for Idle {}
/// impl React<Alarm> for Panic {}
/// ```
pub trait Reacts<E: Event>: Machine {
    /// Default reaction to `E` for states without their own handler.
    fn unhandled<S>(_fsm: Transit<'_, S>, _event: &E)
    where
        S: Singleton<Machine = Self>,
    {
        tracing::debug!(
            machine = Self::NAME,
            state = S::NAME,
            event = type_name::<E>(),
            "event ignored"
        );
    }
}

/// Reaction of a state to events of type `E`.
///
/// An empty impl opts into the machine's default reaction. The handler
/// receives the state wrapped in a [`Transit`], which dereferences to the
/// state and is consumed by a transition.
pub trait React<E: Event>: Singleton
where
    Self::Machine: Reacts<E>,
{
    fn react(fsm: Transit<'_, Self>, event: &E) {
        <Self::Machine as Reacts<E>>::unhandled(fsm, event)
    }
}

/// Static routing of `E` to the current state of a machine.
///
/// Implemented by [`machine!`](crate::machine) whenever the machine declares
/// [`Reacts<E>`] and every one of its states implements [`React<E>`].
pub trait Route<E: Event>: Reacts<E> {
    #[doc(hidden)]
    fn route(id: Self::StateId, event: &E) -> Result<(), FsmError>;
}
