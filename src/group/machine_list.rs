//! Machine groups.

use crate::core::{Event, Machine, Route};
use crate::engine::Fsm;
use crate::error::FsmError;
use std::marker::PhantomData;

/// A tuple of machines, visited in declared order.
///
/// Implemented for `()` and for tuples of up to twelve [`Machine`]s. The
/// machines of a group are expected to be distinct.
pub trait Machines {
    /// Bind every machine to its initial state.
    fn set_initial_state();

    /// Run the entry hook of every machine's current state.
    fn try_enter() -> Result<(), FsmError>;

    /// Reset every machine, see [`Fsm::reset`].
    fn try_reset() -> Result<(), FsmError>;
}

/// A tuple of machines that all react to `E`.
pub trait Broadcast<E: Event>: Machines {
    /// Dispatch `event` to every machine, stopping at the first error.
    fn try_dispatch(event: &E) -> Result<(), FsmError>;
}

impl Machines for () {
    fn set_initial_state() {}

    fn try_enter() -> Result<(), FsmError> {
        Ok(())
    }

    fn try_reset() -> Result<(), FsmError> {
        Ok(())
    }
}

impl<E: Event> Broadcast<E> for () {
    fn try_dispatch(_event: &E) -> Result<(), FsmError> {
        Ok(())
    }
}

macro_rules! impl_machines {
    ($($m:ident),+) => {
        impl<$($m: Machine),+> Machines for ($($m,)+) {
            fn set_initial_state() {
                $(Fsm::<$m>::set_initial_state();)+
            }

            fn try_enter() -> Result<(), FsmError> {
                $(Fsm::<$m>::try_enter()?;)+
                Ok(())
            }

            fn try_reset() -> Result<(), FsmError> {
                $(Fsm::<$m>::try_reset()?;)+
                Ok(())
            }
        }

        impl<E: Event, $($m: Route<E>),+> Broadcast<E> for ($($m,)+) {
            fn try_dispatch(event: &E) -> Result<(), FsmError> {
                $(Fsm::<$m>::try_dispatch(event)?;)+
                Ok(())
            }
        }
    };
}

impl_machines!(M1);
impl_machines!(M1, M2);
impl_machines!(M1, M2, M3);
impl_machines!(M1, M2, M3, M4);
impl_machines!(M1, M2, M3, M4, M5);
impl_machines!(M1, M2, M3, M4, M5, M6);
impl_machines!(M1, M2, M3, M4, M5, M6, M7);
impl_machines!(M1, M2, M3, M4, M5, M6, M7, M8);
impl_machines!(M1, M2, M3, M4, M5, M6, M7, M8, M9);
impl_machines!(M1, M2, M3, M4, M5, M6, M7, M8, M9, M10);
impl_machines!(M1, M2, M3, M4, M5, M6, M7, M8, M9, M10, M11);
impl_machines!(M1, M2, M3, M4, M5, M6, M7, M8, M9, M10, M11, M12);

/// Engine of a group of machines.
///
/// Every operation applies to each machine of `L` in declared order. The
/// order is part of the contract: a machine earlier in the list has fully
/// reacted to an event before the next one sees it.
///
/// # Example
///
/// ```rust
/// use tinyfsm::{machine, Event, FsmList, React, Reacts, State};
///
/// struct Stop;
/// impl Event for Stop {}
///
/// #[derive(Default)]
/// struct Running;
/// #[derive(Default)]
/// struct Watching;
///
/// machine! {
///     Motor {
///         initial: Running,
///         states: [Running],
///     }
/// }
///
/// machine! {
///     Controller {
///         initial: Watching,
///         states: [Watching],
///     }
/// }
///
/// impl State for Running {
///     type Machine = Motor;
/// }
/// impl State for Watching {
///     type Machine = Controller;
/// }
///
/// impl Reacts<Stop> for Motor {}
/// impl Reacts<Stop> for Controller {}
/// impl React<Stop> for Running {}
/// impl React<Stop> for Watching {}
///
/// type Plant = FsmList<(Motor, Controller)>;
///
/// Plant::start();
/// Plant::dispatch(&Stop);
/// ```
pub struct FsmList<L: Machines> {
    _machines: PhantomData<L>,
}

impl<L: Machines> FsmList<L> {
    /// Bind every machine to its initial state, without running hooks.
    pub fn set_initial_state() {
        L::set_initial_state();
    }

    /// Run the entry hook of every machine's current state.
    ///
    /// # Panics
    ///
    /// Panics if one of the states is held.
    pub fn enter() {
        if let Err(err) = L::try_enter() {
            panic!("{err}");
        }
    }

    /// Fallible variant of [`enter`](FsmList::enter).
    pub fn try_enter() -> Result<(), FsmError> {
        L::try_enter()
    }

    /// Bind every machine to its initial state, then enter every machine.
    ///
    /// These are two full passes: all initial states are bound before the
    /// first entry hook runs.
    ///
    /// # Panics
    ///
    /// Panics if one of the initial states is held.
    pub fn start() {
        Self::set_initial_state();
        Self::enter();
    }

    /// Fallible variant of [`start`](FsmList::start).
    pub fn try_start() -> Result<(), FsmError> {
        Self::set_initial_state();
        Self::try_enter()
    }

    /// Reset every machine, see [`Fsm::reset`].
    ///
    /// # Panics
    ///
    /// Panics if one of the states is held.
    pub fn reset() {
        if let Err(err) = L::try_reset() {
            panic!("{err}");
        }
    }

    /// Fallible variant of [`reset`](FsmList::reset).
    pub fn try_reset() -> Result<(), FsmError> {
        L::try_reset()
    }

    /// Dispatch the same `event` to every machine in declared order.
    ///
    /// # Panics
    ///
    /// Panics on a re-entrant dispatch, see [`Fsm::dispatch`].
    pub fn dispatch<E: Event>(event: &E)
    where
        L: Broadcast<E>,
    {
        if let Err(err) = L::try_dispatch(event) {
            panic!("{err}");
        }
    }

    /// Fallible variant of [`dispatch`](FsmList::dispatch). Machines after
    /// the failing one do not see the event.
    pub fn try_dispatch<E: Event>(event: &E) -> Result<(), FsmError>
    where
        L: Broadcast<E>,
    {
        L::try_dispatch(event)
    }
}
