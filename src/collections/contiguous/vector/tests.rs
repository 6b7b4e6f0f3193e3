#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::{assert_panics, panic_location};

#[test]
fn test_push_across_growth() {
    let mut vec = Vector::new();
    for i in 0..100_u32 {
        vec.push(i);
    }

    assert_eq!(vec.len(), 100);
    assert_eq!(vec.cap(), 128, "Capacity should have doubled from 1 up to 128.");
    assert!(
        vec.iter().copied().eq(0..100),
        "All pushed elements should survive every reallocation, in order."
    );
}

#[test]
fn test_insert_and_remove_shift() {
    let mut vec: Vector<_> = "acd".chars().collect();
    vec.insert(1, 'b');
    vec.insert(4, 'e');
    vec.insert(0, '_');
    assert_eq!(vec.iter().collect::<String>(), "_abcde");

    assert_eq!(vec.remove(0), '_');
    assert_eq!(vec.remove(2), 'c');
    assert_eq!(
        vec.iter().collect::<String>(),
        "abde",
        "Removal should shift later elements left, preserving order."
    );

    assert_eq!(vec.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_panics!({
        vec.insert(5, 'x');
    });
}

#[test]
fn test_swap_remove() {
    let mut vec: Vector<_> = (0..5).collect();
    assert_eq!(vec.swap_remove(1), 1);
    assert!(
        vec.iter().eq(&[0, 4, 2, 3]),
        "The last element should fill the removed slot."
    );
    assert_eq!(vec.swap_remove(3), 3, "Removing the last element should just pop it.");
    assert!(vec.iter().eq(&[0, 4, 2]));
}

#[test]
fn test_access() {
    let mut vec: Vector<_> = (1..=3).collect();
    assert_eq!(vec.first(), Some(&1));
    assert_eq!(vec.last(), Some(&3));
    assert_eq!(vec.get(3), None);

    vec[1] = 20;
    assert_eq!(vec.replace(2, 30), 3);
    assert!(vec.iter().eq(&[1, 20, 30]));
    assert!(vec.contains(&20));
    assert!(!vec.contains(&2));

    for value in vec.iter_mut() {
        *value += 1;
    }
    assert!(vec.iter().eq(&[2, 21, 31]));

    assert_eq!(vec.pop(), Some(31));
    assert_eq!(vec.pop(), Some(21));
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.last(), None);

    assert_panics!({
        let _first = vec[0];
    });
}

#[test]
fn test_panics_point_at_caller() {
    let mut vec: Vector<u8> = (0..3).collect();

    let line = line!() + 1;
    let location = panic_location(|| vec[3]);
    assert_eq!(location, Some((file!().to_owned(), line)), "Indexing should blame the caller.");

    let line = line!() + 1;
    let location = panic_location(|| vec.remove(5));
    assert_eq!(location, Some((file!().to_owned(), line)));

    let line = line!() + 1;
    let location = panic_location(|| vec.swap_remove(3));
    assert_eq!(location, Some((file!().to_owned(), line)));
    assert!(vec.iter().eq(&[0, 1, 2]), "A failed removal shouldn't change the Vector.");
}

#[test]
fn test_owned_iteration() {
    let vec: Vector<_> = (0..6).collect();
    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 6);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let mut vec = Vector::with_cap(16);
    vec.extend(std::iter::repeat_with(|| counter.clone()).take(10));
    drop(vec.into_iter());
    assert_eq!(counter.take(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_clear_and_equality() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = std::iter::repeat_with(|| counter.clone()).take(4).collect();
    vec.clear();
    assert_eq!(counter.take(), 4, "Clearing should drop every element.");
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 4, "Clearing should keep the capacity.");

    let a: Vector<_> = (0..4).collect();
    let mut b = Vector::with_cap(32);
    b.extend(0..4);
    assert_eq!(a, b, "Equality shouldn't depend on capacity.");
    assert_ne!(a, (0..5).collect::<Vector<_>>());
    assert_eq!(a.clone(), a);
    assert_eq!(Iter::<u8>::default().next(), None);
}
