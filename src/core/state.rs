//! State trait and singleton registration.
//!
//! Every state type of a machine exists exactly once in the process. The
//! instance is default-constructed on first access and lives until the
//! process exits, unless it is reset to a fresh default value in place.

use super::machine::Machine;
use parking_lot::Mutex;

/// One mode of a machine.
///
/// A state is a plain value type. It may carry fields that survive across
/// transitions, since the same instance is reused every time the machine
/// enters the state. Construction takes no arguments; configuration happens
/// through later mutation or inside [`entry`](State::entry).
///
/// States are `Send` because their singletons live in process-wide storage.
///
/// The entry and exit hooks default to no-ops. Which ones are overridden
/// selects the flavor of the machine:
///
/// - **Moore**: outputs live in `entry`, `exit` stays a no-op, reactions only
///   choose the next state.
/// - **Mealy**: `entry` and `exit` stay no-ops, outputs live in reactions and
///   transition actions.
///
/// # Example
///
/// ```rust
/// use tinyfsm::{machine, State};
///
/// #[derive(Default)]
/// struct On {
///     switched: u32,
/// }
///
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
///
///     fn entry(&mut self) {
///         self.switched += 1;
///     }
/// }
///
/// impl State for Off {
///     type Machine = Switch;
/// }
/// ```
pub trait State: Default + Send + 'static {
    /// The machine owning this state.
    type Machine: Machine;

    /// Entry action, run right after the state became current.
    fn entry(&mut self) {}

    /// Exit action, run while the state is still current.
    fn exit(&mut self) {}
}

/// A state with a registry slot.
///
/// Implemented by [`machine!`](crate::machine) for every listed state; not
/// meant to be implemented by hand. A state type can be listed by only one
/// machine, and its `State::Machine` must name that machine, otherwise the
/// generated `ID` does not type-check.
pub trait Singleton: State {
    /// Identity of this state within its machine.
    const ID: <Self::Machine as Machine>::StateId;

    /// Human readable state name, used in logs and errors.
    const NAME: &'static str;

    #[doc(hidden)]
    fn slot() -> &'static Mutex<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine;
    use crate::registry;
    use crate::testing::serial;

    #[derive(Default, Debug, PartialEq)]
    struct Green {
        cycles: u32,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Red;

    machine! {
        Light {
            initial: Red,
            states: [Green, Red],
        }
    }

    impl State for Green {
        type Machine = Light;

        fn entry(&mut self) {
            self.cycles += 1;
        }
    }

    impl State for Red {
        type Machine = Light;
    }

    #[test]
    fn singleton_names_follow_type_names() {
        assert_eq!(Green::NAME, "Green");
        assert_eq!(Red::NAME, "Red");
    }

    #[test]
    fn singleton_ids_are_distinct() {
        assert_eq!(Green::ID, LightState::Green);
        assert_eq!(Red::ID, LightState::Red);
        assert_ne!(Green::ID, Red::ID);
    }

    #[test]
    fn default_hooks_are_no_ops() {
        let mut red = Red;
        red.entry();
        red.exit();
        assert_eq!(red, Red);
    }

    #[test]
    fn slot_holds_the_default_value_after_reset() {
        let _serial = serial();
        registry::with::<Light, Green, _>(|green| green.cycles = 9);

        registry::reset::<Green>();

        let cycles = registry::with::<Light, Green, _>(|green| green.cycles);
        assert_eq!(cycles, 0);
    }

    #[test]
    fn overridden_entry_mutates_the_singleton() {
        let _serial = serial();
        registry::reset::<Green>();
        registry::with::<Light, Green, _>(|green| green.entry());
        registry::with::<Light, Green, _>(|green| green.entry());

        assert_eq!(registry::with::<Light, Green, _>(|green| green.cycles), 2);
    }
}
