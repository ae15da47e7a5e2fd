//! Machine declaration macro.

/// Declare a machine, its initial state and its closed set of states.
///
/// Generates:
///
/// - the machine marker struct `Name`
/// - the state identity enum `NameState`, one variant per state
/// - `Machine for Name`, bound to the initial state
/// - `Singleton` for every listed state, i.e. its registry slot
/// - the static router `Route<E> for Name`, available for every event `E`
///   the machine declares through `Reacts<E>` and every state handles
///   through `React<E>`
///
/// The `initial` key is required and must name one of the listed states.
/// The optional `reset` key names a function clearing machine-scope data; it
/// becomes [`Machine::reset`](crate::Machine::reset). Each state still needs
/// a `State` impl naming this machine.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use tinyfsm::{machine, Fsm, State};
///
/// static CURRENT_FLOOR: AtomicI32 = AtomicI32::new(0);
///
/// fn reset_floor() {
///     CURRENT_FLOOR.store(0, Ordering::SeqCst);
/// }
///
/// #[derive(Default)]
/// pub struct Idle;
/// #[derive(Default)]
/// pub struct Moving {
///     floors_passed: u32,
/// }
///
/// machine! {
///     /// The elevator cabin.
///     pub Elevator {
///         initial: Idle,
///         reset: reset_floor,
///         states: [Idle, Moving],
///     }
/// }
///
/// impl State for Idle {
///     type Machine = Elevator;
/// }
/// impl State for Moving {
///     type Machine = Elevator;
/// }
///
/// assert_eq!(ElevatorState::Idle, <Idle as tinyfsm::Singleton>::ID);
///
/// CURRENT_FLOOR.store(3, Ordering::SeqCst);
/// Fsm::<Elevator>::reset();
/// assert_eq!(CURRENT_FLOOR.load(Ordering::SeqCst), 0);
/// ```
#[macro_export]
macro_rules! machine {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            initial: $initial:ident,
            $(reset: $reset:expr,)?
            states: [$($state:ident),+ $(,)?] $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            #[doc = concat!("Identity of the states of [`", stringify!($name), "`].")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum [<$name State>] {
                $($state),+
            }

            impl $crate::Machine for $name {
                type StateId = [<$name State>];
                type Initial = $initial;

                const NAME: &'static str = stringify!($name);

                fn state_name(id: [<$name State>]) -> &'static str {
                    match id {
                        $([<$name State>]::$state => stringify!($state),)+
                    }
                }

                $(
                    fn reset() {
                        ($reset)()
                    }
                )?

                fn current() -> &'static $crate::registry::Lock<[<$name State>]> {
                    static CURRENT: $crate::registry::Lock<[<$name State>]> =
                        $crate::registry::const_mutex([<$name State>]::$initial);
                    &CURRENT
                }

                fn enter_state(
                    id: [<$name State>],
                ) -> ::core::result::Result<(), $crate::FsmError> {
                    match id {
                        $([<$name State>]::$state => $crate::engine::enter_state::<$state>(),)+
                    }
                }

                fn reset_states() -> ::core::result::Result<(), $crate::FsmError> {
                    $($crate::registry::try_reset::<$state>()?;)+
                    ::core::result::Result::Ok(())
                }
            }

            $(
                impl $crate::Singleton for $state {
                    const ID: [<$name State>] = [<$name State>]::$state;
                    const NAME: &'static str = stringify!($state);

                    fn slot() -> &'static $crate::registry::Lock<Self> {
                        static SLOT: $crate::registry::Slot<$state> =
                            $crate::registry::Slot::new(|| {
                                $crate::registry::Lock::new(
                                    <$state as ::core::default::Default>::default(),
                                )
                            });
                        &SLOT
                    }
                }
            )+

            impl<E: $crate::Event> $crate::Route<E> for $name
            where
                $name: $crate::Reacts<E>,
                $($state: $crate::React<E>,)+
            {
                fn route(
                    id: [<$name State>],
                    event: &E,
                ) -> ::core::result::Result<(), $crate::FsmError> {
                    match id {
                        $([<$name State>]::$state => $crate::engine::deliver::<$state, E>(event),)+
                    }
                }
            }
        }
    };
}
