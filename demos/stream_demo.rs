//! Walks through the main SequenceView operations on a small slice of numbers.
//!
//! Run with: `cargo run --example stream_demo`

use seqview::SequenceView;

fn main() {
    let a = [1, 2, 3, 4, 5];

    // Keep even numbers, then square them
    let b = SequenceView::from(a)
        .filter(|i| i % 2 == 0)
        .map(|i| i * i)
        .collect();
    println!("Filtered and mapped: {b:?}");

    let sum = SequenceView::from(a).reduce(|acc, v| acc + v, 0);
    println!("Sum: {sum}");

    if let Some(found) = SequenceView::from(a).find(|i| i % 2 == 0) {
        println!("First even number: {found}");
    }

    println!("Count of elements: {}", SequenceView::from(a).count());

    let reversed = SequenceView::from(a).reverse();
    println!("Reversed slice: {reversed}");

    SequenceView::from(a).for_each(|i| print!("Element: {i}, "));
    println!();
}
