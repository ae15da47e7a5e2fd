//! State groups.

use crate::core::Singleton;
use crate::error::FsmError;
use crate::registry;
use std::marker::PhantomData;

/// A tuple of states, visited in declared order.
///
/// Implemented for `()` and for tuples of up to twelve [`Singleton`]s. The
/// states may belong to different machines.
pub trait States {
    /// Reset every state to its default value, stopping at the first error.
    fn try_reset() -> Result<(), FsmError>;
}

impl States for () {
    fn try_reset() -> Result<(), FsmError> {
        Ok(())
    }
}

macro_rules! impl_states {
    ($($s:ident),+) => {
        impl<$($s: Singleton),+> States for ($($s,)+) {
            fn try_reset() -> Result<(), FsmError> {
                $(registry::try_reset::<$s>()?;)+
                Ok(())
            }
        }
    };
}

impl_states!(S1);
impl_states!(S1, S2);
impl_states!(S1, S2, S3);
impl_states!(S1, S2, S3, S4);
impl_states!(S1, S2, S3, S4, S5);
impl_states!(S1, S2, S3, S4, S5, S6);
impl_states!(S1, S2, S3, S4, S5, S6, S7);
impl_states!(S1, S2, S3, S4, S5, S6, S7, S8);
impl_states!(S1, S2, S3, S4, S5, S6, S7, S8, S9);
impl_states!(S1, S2, S3, S4, S5, S6, S7, S8, S9, S10);
impl_states!(S1, S2, S3, S4, S5, S6, S7, S8, S9, S10, S11);
impl_states!(S1, S2, S3, S4, S5, S6, S7, S8, S9, S10, S11, S12);

/// Bulk reset of state singletons.
///
/// Resetting replaces the content of each listed state with its default
/// value. No machine's current state changes: a machine whose current state
/// was reset still points at the same singleton, now holding default
/// content.
pub struct StateList<L: States> {
    _states: PhantomData<L>,
}

impl<L: States> StateList<L> {
    /// Reset every listed state in declared order.
    ///
    /// # Panics
    ///
    /// Panics if one of the states is held.
    pub fn reset() {
        if let Err(err) = L::try_reset() {
            panic!("{err}");
        }
    }

    /// Fallible variant of [`reset`](StateList::reset). States after the
    /// busy one are left untouched.
    pub fn try_reset() -> Result<(), FsmError> {
        L::try_reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use crate::engine::Fsm;
    use crate::machine;
    use crate::testing::serial;
    use parking_lot::MutexGuard;

    #[derive(Default, Debug, Clone, PartialEq)]
    struct Filling {
        litres: u32,
    }

    #[derive(Default, Debug, Clone, PartialEq)]
    struct Draining {
        litres: u32,
    }

    #[derive(Default, Debug, Clone, PartialEq)]
    struct Closed {
        openings: u32,
    }

    machine! {
        Tank {
            initial: Filling,
            states: [Filling, Draining],
        }
    }

    machine! {
        Valve {
            initial: Closed,
            states: [Closed],
        }
    }

    impl State for Filling {
        type Machine = Tank;
    }

    impl State for Draining {
        type Machine = Tank;
    }

    impl State for Closed {
        type Machine = Valve;
    }

    fn fresh() -> MutexGuard<'static, ()> {
        let guard = serial();
        Fsm::<Tank>::reset();
        Fsm::<Valve>::reset();
        guard
    }

    fn dirty() {
        Fsm::<Tank>::state::<Filling, _>(|s| s.litres = 30);
        Fsm::<Tank>::state::<Draining, _>(|s| s.litres = 12);
        Fsm::<Valve>::state::<Closed, _>(|s| s.openings = 4);
    }

    #[test]
    fn reset_spans_machines() {
        let _serial = fresh();
        dirty();

        StateList::<(Filling, Closed)>::reset();

        assert_eq!(Fsm::<Tank>::state::<Filling, _>(|s| s.clone()), Filling::default());
        assert_eq!(Fsm::<Valve>::state::<Closed, _>(|s| s.clone()), Closed::default());
        assert_eq!(Fsm::<Tank>::state::<Draining, _>(|s| s.litres), 12);
    }

    #[test]
    fn reset_keeps_current_state() {
        let _serial = fresh();
        Fsm::<Tank>::start();
        dirty();

        StateList::<(Filling, Draining)>::reset();

        assert!(Fsm::<Tank>::is_in_state::<Filling>());
        assert_eq!(Fsm::<Tank>::state::<Filling, _>(|s| s.litres), 0);
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let _serial = fresh();
        dirty();
        StateList::<(Filling, Draining, Closed)>::reset();
        let once = (
            Fsm::<Tank>::state::<Filling, _>(|s| s.clone()),
            Fsm::<Tank>::state::<Draining, _>(|s| s.clone()),
            Fsm::<Valve>::state::<Closed, _>(|s| s.clone()),
        );

        StateList::<(Filling, Draining, Closed)>::reset();
        let twice = (
            Fsm::<Tank>::state::<Filling, _>(|s| s.clone()),
            Fsm::<Tank>::state::<Draining, _>(|s| s.clone()),
            Fsm::<Valve>::state::<Closed, _>(|s| s.clone()),
        );

        assert_eq!(once, twice);
        assert_eq!(once, (Filling::default(), Draining::default(), Closed::default()));
    }

    #[test]
    fn reset_stops_at_a_busy_state() {
        let _serial = fresh();
        dirty();

        let result = Fsm::<Tank>::state::<Draining, _>(|_| {
            StateList::<(Filling, Draining, Closed)>::try_reset()
        });

        assert_eq!(
            result,
            Err(FsmError::StateBusy {
                machine: "Tank",
                state: "Draining",
            })
        );
        assert_eq!(Fsm::<Tank>::state::<Filling, _>(|s| s.litres), 0);
        assert_eq!(Fsm::<Tank>::state::<Draining, _>(|s| s.litres), 12);
        assert_eq!(Fsm::<Valve>::state::<Closed, _>(|s| s.openings), 4);
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let _serial = fresh();
        dirty();
        StateList::<()>::reset();
        assert_eq!(Fsm::<Tank>::state::<Filling, _>(|s| s.litres), 30);
    }
}
