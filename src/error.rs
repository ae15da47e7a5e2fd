//! Usage violations detected at runtime.

use crate::core::{Machine, Singleton};
use thiserror::Error;

/// Errors reported by the fallible `try_*` entry points.
///
/// Everything else the engine guards against is rejected at compile time.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FsmError {
    /// A state singleton was requested while a handler, hook or accessor
    /// already held it: a re-entrant dispatch or reset, a transition into a
    /// held state, or a concurrent call from another thread.
    #[error("State '{state}' of machine '{machine}' is busy (held elsewhere)")]
    StateBusy {
        machine: &'static str,
        state: &'static str,
    },
}

impl FsmError {
    pub(crate) fn busy<S: Singleton>() -> Self {
        FsmError::StateBusy {
            machine: <S::Machine as Machine>::NAME,
            state: S::NAME,
        }
    }
}
