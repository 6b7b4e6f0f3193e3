#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::ShrinkingResize;
use crate::util::panic::assert_panics;

#[test]
fn test_grow_doubles() {
    let mut buf = Buffer::<u8>::new();
    assert_eq!(buf.cap(), 0);

    buf.grow();
    assert_eq!(buf.cap(), 1, "An empty Buffer should grow to a single slot.");

    for expected in [2, 4, 8, 16] {
        buf.grow();
        assert_eq!(buf.cap(), expected, "Growth should always double the capacity.");
    }
}

#[test]
fn test_grow_preserves_contents() {
    let mut buf = Buffer::with_cap(3);
    buf.put(0, "zero");
    buf.put(2, "two");

    buf.grow();
    assert_eq!(buf.cap(), 6);
    assert_eq!(buf.get(0), Some(&"zero"), "Occupied slots should keep their index.");
    assert_eq!(buf.get(1), None, "Empty slots should stay empty.");
    assert_eq!(buf.get(2), Some(&"two"));
    assert!(
        buf.slots()[3..].iter().all(Option::is_none),
        "New slots should all be empty."
    );
}

#[test]
fn test_resize() {
    let mut buf = Buffer::with_cap(4);
    for i in 0..4 {
        buf.put(i, i * 10);
    }

    assert_eq!(
        buf.resize(2),
        Err(ShrinkingResize { cap: 4, requested: 2 }),
        "Resizing to a smaller capacity should fail."
    );
    assert_eq!(buf.cap(), 4, "A failed resize shouldn't change the Buffer.");

    assert_eq!(buf.resize(4), Ok(()));
    assert_eq!(buf.resize(7), Ok(()));
    assert_eq!(buf.cap(), 7);
    for i in 0..4 {
        assert_eq!(buf.get(i), Some(&(i * 10)), "Resizing should keep relative order.");
    }
}

#[test]
fn test_relocate() {
    let mut buf = Buffer::with_cap(8);
    for i in 0..3 {
        buf.put(i, i);
    }

    buf.relocate(0..3, 4);
    assert_eq!(
        buf.slots(),
        &[None, None, None, None, Some(0), Some(1), Some(2), None],
        "Non-overlapping relocation should empty the source."
    );

    buf.relocate(4..7, 3);
    assert_eq!(
        buf.slots(),
        &[None, None, None, Some(0), Some(1), Some(2), None, None],
        "Overlapping relocation to the left shouldn't lose values."
    );

    buf.relocate(3..6, 5);
    assert_eq!(
        buf.slots(),
        &[None, None, None, None, None, Some(0), Some(1), Some(2)],
        "Overlapping relocation to the right shouldn't lose values."
    );

    assert_panics!({
        buf.relocate(5..8, 6);
    });
}

#[test]
fn test_put_take_and_bounds() {
    let mut buf = Buffer::with_cap(2);
    assert_eq!(buf.put(1, 'a'), None);
    assert_eq!(buf.put(1, 'b'), Some('a'), "Putting should return the previous occupant.");
    assert_eq!(buf.take(1), Some('b'));
    assert_eq!(buf.take(1), None);
    assert_eq!(buf.take(5), None, "Taking out of bounds should return None.");

    assert_panics!({
        buf.put(2, 'c');
    });
}

#[test]
fn test_clear_drops() {
    let counter = CountedDrop::new();
    let mut buf = Buffer::with_cap(5);
    for i in 0..5 {
        buf.put(i, counter.clone());
    }

    buf.clear();
    assert_eq!(counter.take(), 5, "Clearing should drop every occupied slot.");
    assert_eq!(buf.cap(), 5, "Clearing shouldn't change the capacity.");

    buf.put(0, counter.clone());
    buf.grow();
    assert_eq!(counter.take(), 0, "Growing shouldn't drop anything.");
    drop(buf);
    assert_eq!(counter.take(), 1);
}
