//! Session 3: Runtime-Typed Composition
//!
//! Run with: cargo run --example session3_dynamic
//!
//! This example demonstrates:
//! - Wrapping typed functions as erased `DynFn` stages
//! - Composition-time shape checking
//! - The explicit error when shapes don't line up
//! - Call-boundary type checking

use fnshapes_combinators::DynFn;

fn main() {
    println!("=== Session 3: Runtime-Typed Composition ===\n");

    // -------------------------------------------------------------------------
    // Building Stages
    // -------------------------------------------------------------------------
    println!("1. Building Stages");
    println!("------------------");

    let parse = DynFn::new("parse", |s: String| s.len() as i32);
    let double = DynFn::new("double", |a: i32| (2 * a) as f64);
    let render = DynFn::new("render", |b: f64| format!("{:?}", b));

    println!("{}", parse);
    println!("{}", double);
    println!("{}", render);
    println!();

    // -------------------------------------------------------------------------
    // Well-Shaped Pipelines Compose
    // -------------------------------------------------------------------------
    println!("2. Well-Shaped Pipelines Compose");
    println!("--------------------------------");

    let pipeline = parse
        .then(double)
        .and_then(|p| p.then(render))
        .expect("shapes line up");

    println!("{}", pipeline);

    let out: String = pipeline
        .call("four".to_string())
        .expect("argument type matches");
    println!("pipeline(\"four\") = {:?}", out);
    println!();

    // -------------------------------------------------------------------------
    // Mismatched Shapes Are Rejected Eagerly
    // -------------------------------------------------------------------------
    println!("3. Mismatched Shapes Are Rejected Eagerly");
    println!("-----------------------------------------");

    let double = DynFn::new("double", |a: i32| (2 * a) as f64);
    let shout = DynFn::new("shout", |s: String| s.to_uppercase());

    match double.then(shout) {
        Ok(_) => println!("unexpected: composed"),
        Err(e) => println!("Error: {}", e),
    }
    println!();

    // -------------------------------------------------------------------------
    // Call-Boundary Checking
    // -------------------------------------------------------------------------
    println!("4. Call-Boundary Checking");
    println!("-------------------------");

    let double = DynFn::new("double", |a: i32| (2 * a) as f64);
    match double.call::<String, f64>("oops".to_string()) {
        Ok(_) => println!("unexpected: ran"),
        Err(e) => println!("Error: {}", e),
    }

    println!("\n=== Session 3 Complete ===");
}
