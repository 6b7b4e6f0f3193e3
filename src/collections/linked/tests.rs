#![cfg(test)]

use super::*;
use crate::collections::traits::Container;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyCollection, InvalidIteratorState, NoSuchElement};

#[test]
fn test_both_ends() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.get_first(), Err(EmptyCollection));
    assert_eq!(list.get_last(), Err(EmptyCollection));
    assert_eq!(list.remove_first(), Err(EmptyCollection));
    assert_eq!(list.remove_last(), Err(EmptyCollection));

    list.add_first(2);
    list.add_last(3);
    list.add_first(1);
    list.add_last(4);
    assert_eq!(list.len(), 4);
    assert!(list.iter().eq(&[1, 2, 3, 4]));

    *list.get_first_mut().unwrap() *= 10;
    *list.get_last_mut().unwrap() *= 10;
    assert_eq!(list.get_first(), Ok(&10));
    assert_eq!(list.get_last(), Ok(&40));

    assert_eq!(list.remove_last(), Ok(40));
    assert_eq!(list.remove_last(), Ok(3));
    assert_eq!(list.get_last(), Ok(&2), "Removing the last node should move the tail back.");
    assert_eq!(list.remove_first(), Ok(10));
    assert_eq!(list.remove_first(), Ok(2));
    assert!(list.is_empty(), "The tail should be back on the header.");
}

#[test]
fn test_slots_are_reused() {
    let mut list = LinkedList::new();
    for i in 0..8 {
        list.add_last(i);
    }
    let arena = list.nodes.len();

    for i in 0..100 {
        list.remove_first().unwrap();
        list.add_last(i + 8);
    }
    assert_eq!(list.nodes.len(), arena, "Freed nodes should be reused before the arena grows.");
    assert!(list.iter().copied().eq(100..108));
}

#[test]
fn test_cursor_traversal() {
    let mut list: LinkedList<_> = "abc".chars().collect();
    let mut cursor = list.cursor();

    assert_eq!(cursor.remove(), Err(InvalidIteratorState), "Nothing has been visited yet.");
    assert!(cursor.has_next());
    assert_eq!(cursor.peek_next(), Some(&'a'));
    assert_eq!(cursor.next(), Ok(&mut 'a'));
    assert_eq!(cursor.next(), Ok(&mut 'b'));
    *cursor.next().unwrap() = 'C';
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), Err(NoSuchElement));

    assert!(list.iter().eq(&['a', 'b', 'C']));
}

#[test]
fn test_cursor_remove() {
    let mut list: LinkedList<_> = (1..=6).collect();
    let mut cursor = list.cursor();
    while cursor.has_next() {
        if *cursor.next().unwrap() % 3 != 0 {
            assert!(cursor.remove().is_ok());
            assert_eq!(
                cursor.remove(),
                Err(InvalidIteratorState),
                "The same element can't be removed twice."
            );
        }
    }
    assert!(list.iter().eq(&[3, 6]));
    assert_eq!(list.len(), 2);

    let mut cursor = list.cursor();
    cursor.next().unwrap();
    cursor.next().unwrap();
    assert_eq!(cursor.remove(), Ok(6));
    list.add_last(9);
    assert!(list.iter().eq(&[3, 9]), "Removing the last node should update the tail.");
}

#[test]
fn test_cursor_add() {
    let mut list = LinkedList::new();
    let mut cursor = list.cursor();
    cursor.add(1);
    cursor.add(3);
    assert_eq!(cursor.remove(), Ok(3), "The cursor should be on the last added node.");
    cursor.add(2);
    cursor.add(3);
    assert_eq!(cursor.list().len(), 3);

    let mut cursor = list.cursor();
    cursor.add(0);
    cursor.next().unwrap();
    cursor.add(15);
    assert!(list.iter().eq(&[0, 1, 15, 2, 3]));
    assert_eq!(list.get_last(), Ok(&3));
}

#[test]
fn test_owned_and_cloned() {
    let mut list: LinkedList<_> = (0..5).collect();
    list.remove_first().unwrap();
    list.add_first(10);

    let copy = list.clone();
    assert_eq!(copy, list);
    assert!(copy.contains(&10));
    assert!(!copy.contains(&0));
    assert_eq!(format!("{copy}"), "(10) -> (1) -> (2) -> (3) -> (4)");

    let mut iter = copy.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(10));
    assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_make_empty_drops() {
    let counter = CountedDrop::new();
    let mut list: LinkedList<_> = std::iter::repeat_with(|| counter.clone()).take(5).collect();
    list.make_empty();
    assert_eq!(counter.take(), 5);
    assert!(Container::is_empty(&list));

    list.extend(std::iter::repeat_with(|| counter.clone()).take(3));
    drop(list);
    assert_eq!(counter.take(), 3);
}

#[test]
fn test_linked_stack_and_queue() {
    let mut stack = LinkedStack::new();
    let mut queue = LinkedQueue::new();
    for i in 0..5 {
        stack.push(i);
        queue.enqueue(i);
    }
    assert!(stack.iter().copied().eq((0..5).rev()));
    assert!(queue.iter().copied().eq(0..5));

    assert_eq!(stack.top(), Ok(&4));
    assert_eq!(queue.front(), Ok(&0));
    for i in 0..5 {
        assert_eq!(stack.pop(), Ok(4 - i));
        assert_eq!(queue.dequeue(), Ok(i));
    }
    assert_eq!(stack.pop(), Err(EmptyCollection));
    assert_eq!(queue.dequeue(), Err(EmptyCollection));
    assert_eq!(stack.top(), Err(EmptyCollection));
    assert_eq!(queue.front(), Err(EmptyCollection));
}
