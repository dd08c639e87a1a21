//! Algebraic laws checked on a handful of representative sets.

#![recursion_limit = "256"]

use core::any::TypeId;

use tola_set::prelude::*;

type A = set![i32; 1, 2, 3];
type B = set![i32; 2, 3, 4, 5];
type C = set![i32; -7, 40, 0];
type E = set![i32];

fn same_type<X: 'static, Y: 'static>() -> bool {
    TypeId::of::<X>() == TypeId::of::<Y>()
}

#[test]
fn test_union_is_idempotent() {
    assert!(same_type::<UnionOf<A, A>, A>());
    assert!(same_type::<UnionOf<C, C>, C>());
    assert!(same_type::<UnionOf<E, E>, E>());
    assert_eq!(A::new() + A::new(), A::new());
}

#[test]
fn test_union_commutes_under_equals() {
    let (a, b, c) = (A::new(), B::new(), C::new());
    assert!((a + b).equals(&(b + a)));
    assert!((a + c).equals(&(c + a)));
    assert!((b + c).equals(&(c + b)));
    // Structure differs, equality does not.
    assert!(!same_type::<UnionOf<A, B>, UnionOf<B, A>>());
}

#[test]
fn test_union_with_empty() {
    assert!(same_type::<UnionOf<E, B>, B>());
    assert_eq!(B::new() + E::new(), B::new());
}

#[test]
fn test_difference_keeps_exactly_the_other_side() {
    let (a, b) = (A::new(), B::new());
    let diff = a.difference(b);
    for x in -1..=6 {
        assert_eq!(diff.contains(x), b.contains(x) && !a.contains(x), "x = {x}");
    }
    assert_eq!(diff, <set![i32; 4, 5]>::new());

    let diff = b.difference(a);
    for x in -1..=6 {
        assert_eq!(diff.contains(x), a.contains(x) && !b.contains(x), "x = {x}");
    }
}

#[test]
fn test_minus_empty_is_unchanged() {
    assert!(same_type::<DifferenceOf<E, C>, C>());
    assert_eq!(C::new() - E::new(), C::new());
    assert_eq!(E::new() - C::new(), E::new());
}

#[test]
fn test_intersection_with_empty_is_empty() {
    assert!(same_type::<IntersectionOf<E, A>, E>());
    assert!(same_type::<IntersectionOf<A, E>, E>());
}

#[test]
fn test_bag_round_trip() {
    let front = <bag![i32; 3, 3, 1, 2]>::new().to_set();
    let middle = <bag![i32; 1, 3, 2, 3, 3]>::new().to_set();
    let back = <bag![i32; 1, 2, 3, 2, 1, 3]>::new().to_set();

    for mut values in [front.to_vec(), middle.to_vec(), back.to_vec()] {
        values.sort();
        assert_eq!(values, vec![1, 2, 3]);
    }
    assert_eq!(front, A::new());
    assert_eq!(middle, A::new());
    assert_eq!(back, A::new());
}

#[test]
fn test_sort_is_ascending_and_keeps_elements() {
    fn check<S>(set: S)
    where
        S: Set + QuickSort,
        SortedOf<S>: Set + Equals<S>,
    {
        let sorted = set.quick_sort();
        assert!(<SortedOf<S> as Set>::IS_EVERSE_LIST);
        assert!(sorted.equals(&set));
        assert_eq!(sorted.size(), set.size());
    }

    check(A::new());
    check(C::new());
    check(E::new());
    check(<set![i32; 9, -3, 12, 0, -40, 7]>::new());
    check(<set![u8; 255, 0, 128, 127]>::new());
}

#[test]
fn test_all_equal_sequence_is_both_lists() {
    type Same = seq![i32; 6, 6, 6];
    assert!(<Same as IsEverseList>::VALUE);
    assert!(<Same as IsInverseList>::VALUE);
    assert!(<Same as IsList>::VALUE);
    assert!(!<Same as IsSet>::VALUE);
}
