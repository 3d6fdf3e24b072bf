//! Session 1: Forward Composition
//!
//! Run with: cargo run --example session1_composition
//!
//! This example demonstrates:
//! - `compose(f, g)`: f then g, in diagram order
//! - `.then()` method syntax
//! - Identity as the unit of composition
//! - Laziness: building a pipeline runs nothing

use fnshapes_combinators::{compose, identity, Composable, Probe};

fn main() {
    println!("=== Session 1: Forward Composition ===\n");

    // -------------------------------------------------------------------------
    // Basic Composition
    // -------------------------------------------------------------------------
    println!("1. Basic Composition");
    println!("--------------------");

    let double = |a: i32| (2 * a) as f64;
    let render = |b: f64| format!("{:?}", b);

    // compose(f, g) reads left to right: first double, then render
    let pipeline = compose(double, render);

    println!("pipeline(4) = {:?}", pipeline(4));
    println!("pipeline(5) = {:?}", pipeline(5));
    println!();

    // -------------------------------------------------------------------------
    // Method Syntax
    // -------------------------------------------------------------------------
    println!("2. Method Syntax");
    println!("----------------");

    // `f.then(g)` is the same operation; it chains naturally
    let count_digits = double.then(render).then(|s: String| s.len());
    println!("double >>> render >>> len applied to 123 = {}", count_digits(123));
    println!();

    // -------------------------------------------------------------------------
    // Identity Is the Unit
    // -------------------------------------------------------------------------
    println!("3. Identity Is the Unit");
    println!("-----------------------");

    let f = |x: i32| x * 7;
    println!("f(6)                      = {}", f(6));
    println!("compose(identity, f)(6)   = {}", compose(identity, f)(6));
    println!("compose(f, identity)(6)   = {}", compose(f, identity)(6));
    println!();

    // -------------------------------------------------------------------------
    // Laziness
    // -------------------------------------------------------------------------
    println!("4. Laziness");
    println!("-----------");

    let probe = Probe::new("double", |x: i32| x * 2);
    let lazy = compose(probe.as_fn(), |x: i32| x + 1);

    println!("after building the pipeline: {} calls", probe.calls());
    println!("lazy(10) = {}", lazy(10));
    println!("after one invocation:        {} calls", probe.calls());

    println!("\n=== Session 1 Complete ===");
}
