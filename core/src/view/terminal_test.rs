//! Tests for the terminal operations

use super::SequenceView;
use crate::error::Error;
use pretty_assertions::assert_eq;

fn sample() -> SequenceView<i32> {
    SequenceView::from([1, 2, 3, 4, 5])
}

fn empty() -> SequenceView<i32> {
    SequenceView::empty()
}

// ============================================================================
// Reduce Tests
// ============================================================================

#[test]
fn test_reduce_sum() {
    assert_eq!(sample().reduce(|acc, x| acc + x, 0), 15);
}

#[test]
fn test_reduce_is_left_to_right() {
    let view = SequenceView::from(["a", "b", "c"]);
    let joined = view.reduce(|acc, s| format!("({acc}{s})"), String::new());
    assert_eq!(joined, "(((a)b)c)");
}

#[test]
fn test_reduce_empty_returns_initial() {
    assert_eq!(empty().reduce(|acc, x| acc + x, 10), 10);
    assert_eq!(empty().reduce(|_, _| 0, -7), -7);
    assert_eq!(empty().reduce(|acc, x| acc * x, 1), 1);
}

#[test]
fn test_reduce_to_different_type() {
    let total_len = SequenceView::from(["ab", "cde"]).reduce(|acc, s| acc + s.len(), 0usize);
    assert_eq!(total_len, 5);
}

// ============================================================================
// ForEach Tests
// ============================================================================

#[test]
fn test_for_each_visits_in_order() {
    let mut seen = Vec::new();
    sample().for_each(|x| seen.push(*x));
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_for_each_on_empty() {
    let mut calls = 0;
    empty().for_each(|_| calls += 1);
    assert_eq!(calls, 0);
}

// ============================================================================
// Any / All Tests
// ============================================================================

#[test]
fn test_any() {
    assert!(sample().any(|x| *x == 4));
    assert!(!sample().any(|x| *x > 5));
    assert!(!empty().any(|_| true));
}

#[test]
fn test_all() {
    assert!(sample().all(|x| *x > 0));
    assert!(!sample().all(|x| x % 2 == 0));
    assert!(empty().all(|_| false));
}

#[test]
fn test_any_short_circuits() {
    let mut visited = 0;
    assert!(sample().any(|x| {
        visited += 1;
        *x == 2
    }));
    assert_eq!(visited, 2);
}

#[test]
fn test_all_short_circuits() {
    let mut visited = 0;
    assert!(!sample().all(|x| {
        visited += 1;
        *x < 3
    }));
    assert_eq!(visited, 3);
}

// ============================================================================
// Find / First / Last / Get Tests
// ============================================================================

#[test]
fn test_find_returns_first_match() {
    let view = SequenceView::from([1, 4, 2, 6]);
    assert_eq!(view.find(|x| x % 2 == 0), Some(&4));
    assert_eq!(sample().find(|x| x % 2 == 0), Some(&2));
}

#[test]
fn test_find_no_match() {
    assert_eq!(sample().find(|x| *x > 5), None);
    assert_eq!(empty().find(|_| true), None);
}

#[test]
fn test_first_and_last() {
    assert_eq!(sample().first(), Some(&1));
    assert_eq!(sample().last(), Some(&5));
    assert_eq!(empty().first(), None);
    assert_eq!(empty().last(), None);

    let single = SequenceView::from(["only"]);
    assert_eq!(single.first(), single.last());
}

#[test]
fn test_get() {
    assert_eq!(sample().get(0), Some(&1));
    assert_eq!(sample().get(4), Some(&5));
    assert_eq!(sample().get(5), None);
}

// ============================================================================
// Count / Collect Tests
// ============================================================================

#[test]
fn test_count() {
    assert_eq!(sample().count(), 5);
    assert_eq!(empty().count(), 0);
    assert_eq!(sample().filter(|x| *x > 2).count(), 3);
}

#[test]
fn test_collect() {
    assert_eq!(sample().collect(), vec![1, 2, 3, 4, 5]);
    assert_eq!(empty().collect(), Vec::<i32>::new());
}

#[test]
fn test_collect_shared_view_keeps_other_intact() {
    let view = SequenceView::from([String::from("a"), String::from("b")]);
    let other = view.clone();
    let collected = view.collect();
    assert_eq!(collected, vec![String::from("a"), String::from("b")]);
    assert_eq!(other.count(), 2);
}

// ============================================================================
// Fallible Accessor Tests
// ============================================================================

#[test]
fn test_try_accessors_found() {
    let view = sample();
    assert_eq!(view.try_first(), Ok(&1));
    assert_eq!(view.try_last(), Ok(&5));
    assert_eq!(view.try_find(|x| *x > 3), Ok(&4));
    assert_eq!(view.try_get(2), Ok(&3));
}

#[test]
fn test_try_accessors_not_found() {
    assert_eq!(empty().try_first(), Err(Error::Empty { op: "first" }));
    assert_eq!(empty().try_last(), Err(Error::Empty { op: "last" }));
    assert_eq!(sample().try_find(|x| *x > 5), Err(Error::NoMatch));
    assert_eq!(
        sample().try_get(9),
        Err(Error::OutOfBounds { index: 9, len: 5 })
    );
}

#[test]
fn test_try_accessors_propagate() {
    fn first_even_squared(view: &SequenceView<i32>) -> crate::Result<i32> {
        let x = view.try_find(|x| x % 2 == 0)?;
        Ok(x * x)
    }

    assert_eq!(first_even_squared(&sample()), Ok(4));
    assert_eq!(first_even_squared(&empty()), Err(Error::NoMatch));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::Empty { op: "first" }.to_string(),
        "`first` called on an empty sequence"
    );
    assert_eq!(Error::NoMatch.to_string(), "no element matched the predicate");
    assert_eq!(
        Error::OutOfBounds { index: 3, len: 2 }.to_string(),
        "index 3 out of bounds for sequence of length 2"
    );
}
