//! Helpers shared by the unit tests.
//!
//! State singletons are process-wide while the test harness runs tests on
//! parallel threads, so every test touching a machine holds [`serial`].

use parking_lot::{const_mutex, Mutex, MutexGuard};
use std::cell::RefCell;

static SERIAL: Mutex<()> = const_mutex(());

thread_local! {
    static JOURNAL: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Run exclusively of every other unit test holding the guard. Starts with
/// an empty journal.
pub(crate) fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock();
    journal();
    guard
}

pub(crate) fn record(entry: &str) {
    JOURNAL.with(|journal| journal.borrow_mut().push(entry.to_string()));
}

/// Take every entry recorded so far, leaving the journal empty.
pub(crate) fn journal() -> Vec<String> {
    JOURNAL.with(RefCell::take)
}
