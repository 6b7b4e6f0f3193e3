use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many times it (or any of its clones) has been dropped. Used to check
/// that collections release everything they own.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    /// Returns the number of drops observed so far and resets the count.
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
