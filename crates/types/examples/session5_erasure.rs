//! Session 5: Existential Erasure
//!
//! Run with: cargo run --example session5_erasure
//!
//! This example demonstrates:
//! - Erasing unrelated concrete types down to one capability
//! - Heterogeneous collections of erased values
//! - A user type joining the collection by implementing the capability

use std::fmt;

use fnshapes_types::Showable;

struct Temperature {
    celsius: f64,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.celsius)
    }
}

fn main() {
    println!("=== Session 5: Existential Erasure ===\n");

    // -------------------------------------------------------------------------
    // Erasing Concrete Types
    // -------------------------------------------------------------------------
    println!("1. Erasing Concrete Types");
    println!("-------------------------");

    let a = Showable::new(42);
    let b = Showable::new("text");
    println!("an erased integer: {}", a);
    println!("an erased string:  {}", b);
    println!();

    // -------------------------------------------------------------------------
    // Heterogeneous Collections
    // -------------------------------------------------------------------------
    println!("2. Heterogeneous Collections");
    println!("----------------------------");

    // Four unrelated types, one element type
    let mixed: Vec<Showable> = vec![
        Showable::new(7u8),
        Showable::new(true),
        Showable::new(2.5f64),
        Showable::new(Temperature { celsius: 21.5 }),
    ];

    for (i, item) in mixed.iter().enumerate() {
        println!("mixed[{}] = {}", i, item);
    }
    println!();

    // -------------------------------------------------------------------------
    // Only the Capability Survives
    // -------------------------------------------------------------------------
    println!("3. Only the Capability Survives");
    println!("-------------------------------");

    // All we can do with an erased value is what the capability allows
    let rendered: Vec<String> = mixed.iter().map(Showable::show).collect();
    println!("rendered = {:?}", rendered);

    println!("\n=== Session 5 Complete ===");
}
