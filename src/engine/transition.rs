//! Handler-side transition context.

use crate::core::{Machine, Singleton};
use crate::engine::machine::Fsm;
use crate::error::FsmError;
use parking_lot::MutexGuard;
use std::any::Any;
use std::cell::Cell;
use std::ops::{Deref, DerefMut};

/// The current state, held for the duration of a reaction.
///
/// A reaction receives its state wrapped in a `Transit`. It dereferences to
/// the state, so fields are read and written directly. Every transition
/// consumes the context: once the state has been exited the handler can no
/// longer touch it.
///
/// All transitions run in the same order:
///
/// 1. `exit()` of the current state
/// 2. the transition action, if any
/// 3. reassignment of the machine's current state
/// 4. `entry()` of the target state
///
/// The target must belong to the same machine; anything else is rejected at
/// compile time. The target is claimed before `exit()` runs. If it is held
/// elsewhere the transition is refused as a whole: no hook or action runs,
/// the current state stays, and the dispatch that led here reports
/// [`FsmError::StateBusy`].
pub struct Transit<'a, S: Singleton> {
    state: MutexGuard<'a, S>,
    refused: &'a Cell<Option<FsmError>>,
}

impl<'a, S: Singleton> Transit<'a, S> {
    pub(crate) fn new(state: MutexGuard<'a, S>, refused: &'a Cell<Option<FsmError>>) -> Self {
        Self { state, refused }
    }

    /// Unconditional transition to `T`.
    pub fn transit<T>(self)
    where
        T: Singleton<Machine = S::Machine>,
    {
        self.transit_with::<T, _>(|| {});
    }

    /// Transition to `T`, running `action` between the exit of the current
    /// state and the reassignment of the current state.
    ///
    /// The current state is released before `action` runs, except on a self
    /// transition. The action must not dispatch events into this machine or
    /// start transitions of its own.
    pub fn transit_with<T, A>(self, action: A)
    where
        T: Singleton<Machine = S::Machine>,
        A: FnOnce(),
    {
        let Self { mut state, refused } = self;

        if let Some(same) = (&mut *state as &mut dyn Any).downcast_mut::<T>() {
            same.exit();
            action();
            Self::reassign::<T>();
            same.entry();
            return;
        }

        let Some(mut target) = T::slot().try_lock() else {
            tracing::debug!(
                machine = <S::Machine as Machine>::NAME,
                from = S::NAME,
                to = T::NAME,
                "transit refused, target busy"
            );
            refused.set(Some(FsmError::busy::<T>()));
            return;
        };

        state.exit();
        drop(state);

        action();

        Self::reassign::<T>();
        target.entry();
    }

    /// Guarded transition to `T`.
    ///
    /// `guard` is evaluated first, while the current state is still held. If
    /// it returns `false` nothing happens: no hook runs, `action` is dropped
    /// unused and the context is handed back. Otherwise this behaves like
    /// [`transit_with`](Transit::transit_with) and returns `None`.
    pub fn transit_if<T, A, G>(self, action: A, guard: G) -> Option<Self>
    where
        T: Singleton<Machine = S::Machine>,
        A: FnOnce(),
        G: FnOnce() -> bool,
    {
        if !guard() {
            return Some(self);
        }
        self.transit_with::<T, _>(action);
        None
    }

    fn reassign<T>()
    where
        T: Singleton<Machine = S::Machine>,
    {
        tracing::debug!(
            machine = <S::Machine as Machine>::NAME,
            from = S::NAME,
            to = T::NAME,
            "transit"
        );
        Fsm::<S::Machine>::set_current(T::ID);
    }
}

impl<S: Singleton> Deref for Transit<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.state
    }
}

impl<S: Singleton> DerefMut for Transit<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.state
    }
}
