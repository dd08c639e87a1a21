//! Test runtime reflection via the Inspect trait

use tola_set::prelude::*;

#[test]
fn test_inspect_empty() {
    let empty = <set![i16]>::new();
    let mut names = Vec::new();
    empty.inspect(|n| names.push(n));
    assert!(names.is_empty());
}

#[test]
fn test_inspect_single_element() {
    let set = <set![u8; 10]>::new();
    let mut names = Vec::new();
    set.inspect(|n| names.push(n));
    assert_eq!(names.len(), 1);
    assert!(names[0].contains("Int<"), "unexpected name {}", names[0]);
    assert!(names[0].contains("U8"), "unexpected name {}", names[0]);
}

#[test]
fn test_inspect_follows_element_order() {
    let set = <set![u8; 10, 11, 12]>::new();
    let mut names = Vec::new();
    set.inspect(|n| names.push(n));
    assert_eq!(names.len(), 3);
    // 0x0A, 0x0B, 0x0C: the last nibble tells them apart
    assert!(names[0].contains("XA"), "Missing XA in {}", names[0]);
    assert!(names[1].contains("XB"), "Missing XB in {}", names[1]);
    assert!(names[2].contains("XC"), "Missing XC in {}", names[2]);
}

#[test]
fn test_inspect_sequence_with_repeats() {
    let mut names = Vec::new();
    <seq![u8; 10, 10, 11] as Inspect>::inspect_types(&mut |n| names.push(n));
    assert_eq!(names.len(), 3);
    assert_eq!(names[0], names[1]);
    assert!(names[2].contains("XB"), "Missing XB in {}", names[2]);
}

#[test]
fn test_inspect_bag_keeps_repeats() {
    let bag = <bag![u8; 12, 12]>::new();
    let mut names = Vec::new();
    bag.inspect(|n| names.push(n));
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.contains("XC")));
}
