#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::Container;
use crate::util::error::EmptyCollection;

fn assert_strictly_increasing<'a, T: Ord + 'a>(mut iter: impl Iterator<Item = &'a T>) {
    if let Some(mut prev) = iter.next() {
        for next in iter {
            assert!(prev < next, "Keys should be strictly increasing.");
            prev = next;
        }
    }
}

#[test]
fn test_bisect() {
    let items: Vector<_> = [1, 3, 5, 7, 9, 11].into_iter().collect();
    for (index, item) in items.iter().enumerate() {
        assert_eq!(bisect(&items, |probe| probe.cmp(item)), Ok(index));
    }
    assert_eq!(bisect(&items, |probe| probe.cmp(&0)), Err(0));
    assert_eq!(bisect(&items, |probe| probe.cmp(&6)), Err(3));
    assert_eq!(bisect(&items, |probe| probe.cmp(&12)), Err(6));
    assert_eq!(bisect(&Vector::<u8>::new(), |probe| probe.cmp(&1)), Err(0));
}

#[test]
fn test_dictionary_keeps_order() {
    let mut dict = SortedArrayDictionary::new();
    for (key, value) in [(50, 'a'), (10, 'b'), (30, 'c'), (10, 'd'), (40, 'e'), (20, 'f')] {
        dict.insert(key, value);
    }
    assert!(dict.sorted_keys().eq(&[10, 20, 30, 40, 50]));
    assert!(dict.keys().eq(dict.sorted_keys()));
    assert!(dict.find_all(&10).eq(&['b', 'd']));
    assert_eq!(dict.find(&30), Some(&'c'));
    assert_eq!(dict.find(&35), None);
    assert_eq!(dict.find_all(&35).count(), 0);

    assert_eq!(dict.remove(&10), Ok(Some('b')));
    assert_eq!(dict.remove(&10), Ok(Some('d')));
    assert_eq!(dict.remove(&10), Ok(None));
    assert!(dict.sorted_keys().eq(&[20, 30, 40, 50]), "Removal should keep the order.");

    let all = dict.remove_all(&40).unwrap().unwrap();
    assert!(all.iter().eq(&['e']));
    assert!(dict.sorted_keys().eq(&[20, 30, 50]));

    dict.make_empty();
    assert_eq!(dict.remove(&20), Err(EmptyCollection));
    assert_eq!(dict.remove_all(&20), Err(EmptyCollection));
}

#[test]
fn test_dictionary_mixed_operations() {
    let mut dict: SortedArrayDictionary<u32, i32> = SortedArrayDictionary::new();
    let mut seed = 7_u32;
    for round in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let key = (seed >> 16) % 64;
        if round % 3 == 0 {
            let _ = dict.remove(&key);
        } else {
            dict.insert(key, round);
        }
        assert_strictly_increasing(dict.sorted_keys());
    }
}

#[test]
fn test_map_round_trip() {
    let mut map = SortedArrayMap::new();
    for key in [8, 2, 6, 4] {
        assert_eq!(map.put(key, key * 10), None);
    }
    assert!(map.sorted_keys().eq(&[2, 4, 6, 8]));
    assert_eq!(map.get(&6), Some(&60));
    assert_eq!(map.put(6, 61), Some(60));
    assert_eq!(map.get(&6), Some(&61));
    assert_eq!(map.first(), Some((&2, &20)));
    assert_eq!(map.last(), Some((&8, &80)));

    *map.get_mut(&2).unwrap() += 1;
    assert_eq!(map.get(&2), Some(&21));

    assert_eq!(map.remove(&4), Ok(Some(40)));
    assert_eq!(map.remove(&4), Ok(None));
    assert!(!map.contains_key(&4));
    assert!(map.iter().eq([(&2, &21), (&6, &61), (&8, &80)]));

    let collected: SortedArrayMap<_, _> = map.clone().into_iter().collect();
    assert_eq!(collected, map);
}

#[test]
fn test_set_add_bubbles() {
    let mut set = SortedArraySet::new();
    for item in [5, 1, 4, 2, 3] {
        assert!(set.add(item));
    }
    assert!(!set.add(3), "Adding a duplicate should report false.");
    assert_eq!(set.len(), 5);
    assert!(set.iter().copied().eq(1..=5));
    assert!(set.to_sorted_array().iter().copied().eq(1..=5));
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&5));

    assert_eq!(set.remove(&3), Some(3));
    assert_eq!(set.remove(&3), None);
    assert!(set.iter().eq(&[1, 2, 4, 5]));
    assert!(set.contains(&4));
    assert!(!set.contains(&3));
}

#[test]
fn test_set_algebra() {
    let a: SortedArraySet<_> = [1, 3, 5].into_iter().collect();
    let b: SortedArraySet<_> = [2, 3, 4].into_iter().collect();

    assert!(a.union(&b).eq(&[1, 2, 3, 4, 5]));
    assert!(a.intersection(&b).eq(&[3]));
    assert!(a.difference(&b).eq(&[1, 5]));
    assert!(b.difference(&a).eq(&[2, 4]));

    let union: SortedArraySet<_> = a.union(&b).copied().collect();
    assert_eq!(union.len(), 5);
    assert!(a.is_subset(&union));
    assert!(union.is_superset(&b));
    assert!(!a.is_subset(&b));

    let empty = SortedArraySet::new();
    assert!(a.union(&empty).eq(a.iter()));
    assert_eq!(a.intersection(&empty).next(), None);
    assert!(a.difference(&empty).eq(a.iter()));
    assert_eq!(empty.difference(&a).next(), None);
}
