#![cfg(test)]

use super::*;
use crate::collections::traits::Container;
use crate::util::alloc::CountedDrop;
use crate::util::error::{ContainerFull, EmptyCollection, InvalidCapacity, PushError};

#[test]
fn test_queue_fifo_across_growth() {
    let mut queue: Queue<_> = Queue::with_cap(1).unwrap();
    for i in 0..50 {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.len(), 50);
    assert_eq!(queue.cap(), 64);

    for i in 0..50 {
        assert_eq!(queue.dequeue(), Ok(i), "Growth shouldn't change the order of elements.");
    }
    assert_eq!(queue.dequeue(), Err(EmptyCollection));
    assert_eq!(queue.front(), Err(EmptyCollection));
}

#[test]
fn test_queue_grows_while_wrapped() {
    let mut queue: Queue<_> = Queue::with_cap(4).unwrap();
    for i in 0..3 {
        queue.enqueue(i).unwrap();
    }
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    // Back wraps around to the start of the buffer.
    queue.enqueue(3).unwrap();
    queue.enqueue(4).unwrap();
    assert_eq!(queue.cap(), 4);

    queue.enqueue(5).unwrap();
    assert_eq!(queue.cap(), 8, "A full Queue should double.");
    assert!(
        queue.iter().copied().eq(2..6),
        "The wrapped elements should follow the others after growth."
    );
    assert!(queue.iter().rev().copied().eq((2..6).rev()));
}

#[test]
fn test_queue_cycling() {
    let mut queue: FixedQueue<_> = FixedQueue::with_cap(5).unwrap();
    for i in 0..4 {
        queue.enqueue(i).unwrap();
    }

    for i in 4..1000 {
        assert_eq!(queue.dequeue(), Ok(i - 4));
        queue.enqueue(i).unwrap();
        assert_eq!(queue.len(), 4);
    }
    assert_eq!(queue.cap(), 5, "Cycling through a Queue shouldn't grow it.");
    assert!(queue.iter().copied().eq(996..1000));
}

#[test]
fn test_fixed_queue_full() {
    let mut queue: FixedQueue<_> = FixedQueue::with_cap(3).unwrap();
    queue.enqueue('a').unwrap();
    queue.enqueue('b').unwrap();
    assert_eq!(
        queue.enqueue('c'),
        Err(ContainerFull { cap: 3 }),
        "A fixed Queue keeps one slot free."
    );
    assert_eq!(queue.len(), 2, "A failed enqueue shouldn't change the Queue.");
    assert_eq!(queue.front(), Ok(&'a'));

    assert_eq!(FixedQueue::<u8>::with_cap(0).err(), Some(InvalidCapacity { cap: 0 }));
    assert_eq!(Queue::<u8>::new().cap(), DEFAULT_CAP);
}

#[test]
fn test_deque_both_ends() {
    let mut deque: Deque<_> = Deque::with_cap(2).unwrap();
    for i in 0..10 {
        deque.add_first(i).unwrap();
        deque.add_last(i + 100).unwrap();
    }
    assert_eq!(deque.len(), 20);
    assert!(deque.iter().copied().eq((0..10).rev().chain(100..110)));

    assert_eq!(deque.get_first(), Ok(&9));
    assert_eq!(deque.get_last(), Ok(&109));
    assert_eq!(deque.remove_first(), Ok(9));
    assert_eq!(deque.remove_last(), Ok(109));
    assert_eq!(deque.len(), 18);
}

#[test]
fn test_fixed_deque_full() {
    let mut deque: FixedDeque<_> = FixedDeque::with_cap(4).unwrap();
    deque.add_first(2).unwrap();
    deque.add_first(1).unwrap();
    deque.add_last(3).unwrap();
    assert_eq!(deque.add_first(0), Err(ContainerFull { cap: 4 }));
    assert_eq!(deque.add_last(4), Err(ContainerFull { cap: 4 }));
    assert!(deque.iter().copied().eq(1..=3));

    assert_eq!(deque.remove_last(), Ok(3));
    assert_eq!(deque.remove_last(), Ok(2));
    assert_eq!(deque.remove_last(), Ok(1));
    assert_eq!(deque.remove_last(), Err(EmptyCollection));
    assert_eq!(deque.remove_first(), Err(EmptyCollection));
    assert_eq!(deque.get_first(), Err(EmptyCollection));
    assert_eq!(deque.get_last(), Err(EmptyCollection));
}

#[test]
fn test_stack_lifo() {
    let mut stack: Stack<_> = Stack::with_cap(1).unwrap();
    for i in 0..20 {
        stack.push(i).unwrap();
    }
    assert_eq!(stack.cap(), 32);
    assert!(stack.iter().copied().eq((0..20).rev()), "Iteration should go from top to bottom.");

    for i in (0..20).rev() {
        assert_eq!(stack.top(), Ok(&i));
        assert_eq!(stack.pop(), Ok(i));
    }
    assert_eq!(stack.pop(), Err(EmptyCollection));
}

#[test]
fn test_fixed_stack_single_slot() {
    let mut stack: FixedStack<_> = FixedStack::with_cap(1).unwrap();
    assert_eq!(stack.push("only"), Ok(()));
    assert_eq!(
        stack.push("another"),
        Err(PushError::Full(ContainerFull { cap: 1 })),
        "A fixed Stack uses every slot."
    );
    assert_eq!(stack.pop(), Ok("only"));
    assert_eq!(stack.pop(), Err(EmptyCollection));
    assert_eq!(stack.top(), Err(EmptyCollection));
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(&'static str),
    Number(i64),
}

#[test]
fn test_constrained_stack() {
    let words_only = |token: &Token| matches!(token, Token::Word(_));
    let mut stack = Stack::<Token, Fixed, _>::with_cap_and_constraint(1, words_only).unwrap();

    assert!(stack.push(Token::Number(4)).unwrap_err().is_rejected());
    assert_eq!(stack.push(Token::Word("four")), Ok(()));
    assert!(
        stack.push(Token::Number(5)).unwrap_err().is_rejected(),
        "Constraints should be checked before capacity."
    );
    assert!(stack.push(Token::Word("five")).unwrap_err().is_full());
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_make_empty() {
    let counter = CountedDrop::new();

    let mut queue: Queue<_> = Queue::with_cap(4).unwrap();
    let mut deque: Deque<_> = Deque::with_cap(4).unwrap();
    let mut stack: Stack<_> = Stack::with_cap(4).unwrap();
    for _ in 0..3 {
        queue.enqueue(counter.clone()).unwrap();
        deque.add_first(counter.clone()).unwrap();
        stack.push(counter.clone()).unwrap();
    }

    queue.make_empty();
    deque.make_empty();
    stack.make_empty();
    assert_eq!(counter.take(), 9, "Emptying should drop every element.");
    assert!(Container::is_empty(&queue));
    assert!(Container::is_empty(&deque));
    assert!(Container::is_empty(&stack));

    queue.enqueue(counter.clone()).unwrap();
    assert_eq!(queue.len(), 1, "An emptied Queue should be usable again.");
}
