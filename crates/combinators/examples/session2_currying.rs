//! Session 2: Curry, Uncurry, Flip
//!
//! Run with: cargo run --example session2_currying
//!
//! This example demonstrates:
//! - Turning a pair-taking function into a chain of one-argument functions
//! - Partial application with a reusable prefix
//! - Collapsing the chain back with `uncurry`
//! - Swapping argument order with `flip`
//! - A method bound to its receiver as an ordinary function value

use fnshapes_combinators::{curry, flip, uncurry, Composable};

struct Sentence {
    text: String,
}

impl Sentence {
    fn append(&self, rest: String) -> String {
        format!("{}{}", self.text, rest)
    }
}

fn main() {
    println!("=== Session 2: Curry, Uncurry, Flip ===\n");

    // -------------------------------------------------------------------------
    // Curry
    // -------------------------------------------------------------------------
    println!("1. Curry");
    println!("--------");

    let append = |a: String, b: String| format!("{}{}", a, b);
    let curried = curry(append);

    println!(
        "curry(append)(\"x\")(\"y\") = {:?}",
        curried("x".to_string())("y".to_string())
    );

    // Partial application: fix the first argument once, reuse it
    let greet = curried("Hello, ".to_string());
    println!("greet(\"Ada\")   = {:?}", greet("Ada".to_string()));
    println!("greet(\"Grace\") = {:?}", greet("Grace".to_string()));
    println!();

    // -------------------------------------------------------------------------
    // Uncurry
    // -------------------------------------------------------------------------
    println!("2. Uncurry");
    println!("----------");

    let append = |a: String, b: String| format!("{}{}", a, b);
    let roundtrip = uncurry(curry(append));
    println!(
        "uncurry(curry(append))(\"x\", \"y\") = {:?}",
        roundtrip("x".to_string(), "y".to_string())
    );
    println!();

    // -------------------------------------------------------------------------
    // Flip
    // -------------------------------------------------------------------------
    println!("3. Flip");
    println!("-------");

    let describe = |name: String| move |count: i64| format!("{} x{}", name, count);
    println!("describe(\"bolt\")(3)    = {:?}", describe("bolt".to_string())(3));

    let by_count = flip(describe);
    println!("flip(describe)(3)(\"bolt\") = {:?}", by_count(3)("bolt".to_string()));
    println!();

    // -------------------------------------------------------------------------
    // Bound Methods Are Function Values
    // -------------------------------------------------------------------------
    println!("4. Bound Methods Are Function Values");
    println!("------------------------------------");

    let sentence = Sentence {
        text: "functions ".to_string(),
    };

    // Binding the method to its receiver is just a closure capture
    let bound = move |rest: String| sentence.append(rest);
    println!("bound(\"compose\") = {:?}", bound("compose".to_string()));

    // And a bound method composes like anything else
    let shouted = bound.then(|s: String| s.to_uppercase());
    println!("bound >>> uppercase applied to \"compose\" = {:?}",
        shouted("compose".to_string()));

    println!("\n=== Session 2 Complete ===");
}
