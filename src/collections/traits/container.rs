/// The capability shared by every collection in this crate: checking for emptiness and removing
/// everything at once.
///
/// # Examples
/// ```
/// # use adt_collections::collections::circular::Queue;
/// # use adt_collections::collections::traits::Container;
/// let mut queue: Queue<u8> = Queue::new();
/// queue.enqueue(1).unwrap();
/// assert!(!Container::is_empty(&queue));
/// queue.make_empty();
/// assert!(Container::is_empty(&queue));
/// ```
pub trait Container {
    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool;

    /// Removes (and drops) every element held by the container. Capacity is kept.
    fn make_empty(&mut self);
}
