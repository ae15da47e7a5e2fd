//! Caller-side engine operations.

use crate::core::{Event, Machine, React, Reacts, Route, Singleton};
use crate::engine::transition::Transit;
use crate::error::FsmError;
use crate::registry;
use std::any::type_name;
use std::cell::Cell;
use std::marker::PhantomData;

/// Engine of the machine `M`.
///
/// `Fsm` is never constructed; every operation is an associated function
/// working on `M`'s current-state slot and state singletons. The current
/// state starts out as `M::Initial` and is only ever reassigned by
/// [`Transit`], [`set_initial_state`](Fsm::set_initial_state) and
/// [`reset`](Fsm::reset).
///
/// # Example
///
/// ```rust
/// use tinyfsm::{machine, Event, Fsm, React, Reacts, State, Transit};
///
/// struct Toggle;
/// impl Event for Toggle {}
///
/// #[derive(Default)]
/// struct On;
/// #[derive(Default)]
/// struct Off;
///
/// machine! {
///     Switch {
///         initial: Off,
///         states: [On, Off],
///     }
/// }
///
/// impl State for On {
///     type Machine = Switch;
/// }
/// impl State for Off {
///     type Machine = Switch;
/// }
///
/// impl Reacts<Toggle> for Switch {}
///
/// impl React<Toggle> for On {
///     fn react(fsm: Transit<'_, Self>, _: &Toggle) {
///         fsm.transit::<Off>();
///     }
/// }
/// impl React<Toggle> for Off {
///     fn react(fsm: Transit<'_, Self>, _: &Toggle) {
///         fsm.transit::<On>();
///     }
/// }
///
/// Fsm::<Switch>::start();
/// assert!(Fsm::<Switch>::is_in_state::<Off>());
///
/// Fsm::<Switch>::dispatch(&Toggle);
/// assert!(Fsm::<Switch>::is_in_state::<On>());
/// assert_eq!(Fsm::<Switch>::current_name(), "On");
/// ```
pub struct Fsm<M: Machine> {
    _machine: PhantomData<M>,
}

impl<M: Machine> Fsm<M> {
    /// Point the current state at the initial state, without running hooks.
    pub fn set_initial_state() {
        Self::set_current(<M::Initial as Singleton>::ID);
    }

    /// Run the entry hook of the current state.
    ///
    /// # Panics
    ///
    /// Panics if the current state is held.
    pub fn enter() {
        if let Err(err) = Self::try_enter() {
            panic!("{err}");
        }
    }

    /// Fallible variant of [`enter`](Fsm::enter).
    pub fn try_enter() -> Result<(), FsmError> {
        M::enter_state(Self::current())
    }

    /// Make the initial state current and run its entry hook.
    ///
    /// # Panics
    ///
    /// Panics if the initial state is held.
    pub fn start() {
        Self::set_initial_state();
        Self::enter();
    }

    /// Fallible variant of [`start`](Fsm::start).
    pub fn try_start() -> Result<(), FsmError> {
        Self::set_initial_state();
        Self::try_enter()
    }

    /// Reset every state of the machine to its default value, run
    /// [`Machine::reset`] for machine-scope data and point the current state
    /// back at the initial state. No entry or exit hooks run.
    ///
    /// # Panics
    ///
    /// Panics if one of the states is held.
    pub fn reset() {
        if let Err(err) = Self::try_reset() {
            panic!("{err}");
        }
    }

    /// Fallible variant of [`reset`](Fsm::reset).
    pub fn try_reset() -> Result<(), FsmError> {
        M::reset_states()?;
        M::reset();
        Self::set_initial_state();
        Ok(())
    }

    /// Deliver `event` to the current state.
    ///
    /// States without their own [`React::react`] fall back to the machine's
    /// [`Reacts::unhandled`]. An event type the machine does not declare
    /// through [`Reacts`] does not compile.
    ///
    /// # Panics
    ///
    /// Panics when the current state, or the target of the transition it
    /// takes, is held elsewhere, e.g. by a re-entrant dispatch.
    pub fn dispatch<E: Event>(event: &E)
    where
        M: Route<E>,
    {
        if let Err(err) = Self::try_dispatch(event) {
            panic!("{err}");
        }
    }

    /// Fallible variant of [`dispatch`](Fsm::dispatch).
    ///
    /// A transition refused because its target is held runs no hook and
    /// leaves the current state unchanged.
    pub fn try_dispatch<E: Event>(event: &E) -> Result<(), FsmError>
    where
        M: Route<E>,
    {
        M::route(Self::current(), event)
    }

    /// Run `f` with mutable access to the singleton of `S`.
    ///
    /// Useful to seed state data before [`start`](Fsm::start). `S` must be a
    /// state of `M`.
    ///
    /// # Panics
    ///
    /// Panics if the state is held.
    pub fn state<S, R>(f: impl FnOnce(&mut S) -> R) -> R
    where
        S: Singleton<Machine = M>,
    {
        registry::with::<M, S, R>(f)
    }

    /// Whether `S` is the current state. Compares identities, not content.
    pub fn is_in_state<S>() -> bool
    where
        S: Singleton<Machine = M>,
    {
        Self::current() == S::ID
    }

    /// Identity of the current state.
    pub fn current() -> M::StateId {
        *M::current().lock()
    }

    /// Name of the current state.
    pub fn current_name() -> &'static str {
        M::state_name(Self::current())
    }

    pub(crate) fn set_current(id: M::StateId) {
        *M::current().lock() = id;
    }
}

/// Hand `event` to the reaction of `S`. Called by the router generated by
/// [`machine!`](crate::machine).
pub fn deliver<S, E>(event: &E) -> Result<(), FsmError>
where
    S: React<E>,
    S::Machine: Reacts<E>,
    E: Event,
{
    let state = S::slot().try_lock().ok_or_else(FsmError::busy::<S>)?;
    tracing::trace!(
        machine = <S::Machine as Machine>::NAME,
        state = S::NAME,
        event = type_name::<E>(),
        "dispatch"
    );

    let refused = Cell::new(None);
    S::react(Transit::new(state, &refused), event);
    match refused.into_inner() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Run the entry hook of `S`.
pub fn enter_state<S: Singleton>() -> Result<(), FsmError> {
    let mut state = S::slot().try_lock().ok_or_else(FsmError::busy::<S>)?;
    state.entry();
    Ok(())
}
