//! Per-type state singletons.
//!
//! Each state listed by [`machine!`](crate::machine) owns one lazily
//! initialised, process-wide slot, so every thread sees the same instance
//! per (machine, state) pair. Slots are guarded by a mutex that is only
//! ever tried, never waited on: an access to a state that is already held,
//! by a handler further up the stack or by another thread, is reported as
//! [`FsmError::StateBusy`] instead of blocking or aliasing. Programs that
//! drive a machine from several threads serialise their calls themselves.

use crate::core::{Machine, Singleton};
use crate::error::FsmError;
use once_cell::sync::Lazy;

#[doc(hidden)]
pub use parking_lot::const_mutex;

/// Mutex guarding a singleton or a current-state slot.
#[doc(hidden)]
pub type Lock<T> = parking_lot::Mutex<T>;

/// Storage of one state singleton, created on first access.
#[doc(hidden)]
pub type Slot<S> = Lazy<Lock<S>>;

/// Run `f` with mutable access to the singleton of `S`.
///
/// `S` must belong to `M`; a state of another machine does not compile.
///
/// # Panics
///
/// Panics if the singleton is already held, e.g. when called from inside
/// one of its own handlers. Use [`try_with`] to get an error instead.
///
/// # Example
///
/// ```rust
/// use tinyfsm::{machine, registry, State};
///
/// #[derive(Default)]
/// struct Counting {
///     ticks: u32,
/// }
///
/// machine! {
///     Counter {
///         initial: Counting,
///         states: [Counting],
///     }
/// }
///
/// impl State for Counting {
///     type Machine = Counter;
/// }
///
/// registry::with::<Counter, Counting, _>(|s| s.ticks += 1);
/// assert_eq!(registry::with::<Counter, Counting, _>(|s| s.ticks), 1);
/// ```
pub fn with<M, S, R>(f: impl FnOnce(&mut S) -> R) -> R
where
    M: Machine,
    S: Singleton<Machine = M>,
{
    match try_with::<M, S, R>(f) {
        Ok(result) => result,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible variant of [`with`].
pub fn try_with<M, S, R>(f: impl FnOnce(&mut S) -> R) -> Result<R, FsmError>
where
    M: Machine,
    S: Singleton<Machine = M>,
{
    let mut state = S::slot().try_lock().ok_or_else(FsmError::busy::<S>)?;
    Ok(f(&mut state))
}

/// Replace the content of the singleton of `S` with `S::default()`.
///
/// The slot itself is kept, so its address does not change and a machine
/// whose current state is `S` keeps pointing at it.
///
/// # Panics
///
/// Panics if the singleton is held.
pub fn reset<S: Singleton>() {
    if let Err(err) = try_reset::<S>() {
        panic!("{err}");
    }
}

/// Fallible variant of [`reset`].
pub fn try_reset<S: Singleton>() -> Result<(), FsmError> {
    let mut state = S::slot().try_lock().ok_or_else(FsmError::busy::<S>)?;
    *state = S::default();
    Ok(())
}

/// Address of the singleton of `S`.
///
/// Stable for the lifetime of the process and the same on every thread. Only
/// meant for identity comparisons.
pub fn addr<S: Singleton>() -> *const S {
    S::slot().data_ptr() as *const S
}
