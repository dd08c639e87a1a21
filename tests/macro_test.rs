//! Literal macros and the type-level convenience macros.

#![recursion_limit = "256"]

use core::any::TypeId;

use tola_set::prelude::*;
use tola_set::{difference, intersect, sorted, union};

fn same_type<X: 'static, Y: 'static>() -> bool {
    TypeId::of::<X>() == TypeId::of::<Y>()
}

#[test]
fn test_elem_decodes_to_its_literal() {
    assert_eq!(<elem![i16; -1] as tola_set::Element>::VALUE, -1i16);
    assert_eq!(<elem![u8; 255] as tola_set::Element>::VALUE, 255u8);
    assert_eq!(<elem![i128; -170141183460469231731687303715884105728] as tola_set::Element>::VALUE, i128::MIN);
    assert_eq!(<elem![u128; 340282366920938463463374607431768211455] as tola_set::Element>::VALUE, u128::MAX);
    assert_eq!(<elem![i32; 0x7f] as tola_set::Element>::VALUE, 127);
    assert_eq!(<elem![i64; -5i64] as tola_set::Element>::VALUE, -5);
}

#[test]
fn test_zero_and_negative_zero_are_one_element() {
    assert!(same_type::<elem![i8; 0], elem![i8; -0]>());
}

#[test]
fn test_set_macro_matches_hand_built_sequence() {
    type Hand = Cons<elem![i16; 2], Cons<elem![i16; 1], EmptySet<tola_set::I16>>>;
    assert!(same_type::<set![i16; 2, 1], Hand>());
    assert!(same_type::<Singleton<elem![i16; 5]>, set![i16; 5]>());
}

#[test]
fn test_union_macro_folds() {
    type U = union![set![i16; 1], set![i16; 2], set![i16; 3, 1]];
    assert_eq!(<U as Set>::SIZE, 3);
    assert!(<U as Equals<set![i16; 1, 2, 3]>>::VALUE);
}

#[test]
fn test_intersect_macro_folds() {
    type I = intersect![set![i16; 1, 2, 3, 4], set![i16; 4, 3, 2], set![i16; 2, 4]];
    assert!(same_type::<I, set![i16; 2, 4]>());
}

#[test]
fn test_difference_macro_removes_first_from_second() {
    type D = difference![set![i16; 1, 2], set![i16; 1, 2, 3]];
    assert!(same_type::<D, set![i16; 3]>());
}

#[test]
fn test_sorted_macro() {
    type S = sorted![set![u32; 30, 10, 20]];
    assert!(same_type::<S, set![u32; 10, 20, 30]>());
    assert!(same_type::<SortedOf<set![u32]>, set![u32]>());
}
