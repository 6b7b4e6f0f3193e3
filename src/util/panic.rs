use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

/// Asserts that the provided block panics. The block runs behind
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe), so it may borrow collections from the
/// surrounding test.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
        println!("^ panic caught");
    };
}

pub(crate) use assert_panics;

static HOOK_LOCK: Mutex<()> = Mutex::new(());

thread_local! {
    static LAST_PANIC: RefCell<Option<(String, u32)>> = const { RefCell::new(None) };
}

/// Runs `run`, which is expected to panic, and returns the file and line that the panic was
/// reported at. The panic hook is swapped out while `run` executes, so callers are serialized.
pub fn panic_location<R>(run: impl FnOnce() -> R) -> Option<(String, u32)> {
    let _guard = HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    LAST_PANIC.with(|last| last.borrow_mut().take());

    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        if let Some(location) = info.location() {
            let reported = (location.file().to_owned(), location.line());
            LAST_PANIC.with(|last| *last.borrow_mut() = Some(reported));
        }
    }));
    let outcome = panic::catch_unwind(AssertUnwindSafe(run));
    panic::set_hook(previous);

    assert!(outcome.is_err(), "assertion failed to panic");
    LAST_PANIC.with(|last| last.borrow_mut().take())
}
