//! Session 4: Cardinality - Counting a Type's Values
//!
//! Run with: cargo run --example session4_cardinality
//!
//! This example demonstrates:
//! - Base counts for the small standard types
//! - Sum types add, product types multiply
//! - `Option` as "+ 1", `Result` as a sum
//! - Function-space counts `|B|^|A|`

use fnshapes_types::cardinality::{Flag, Suit};
use fnshapes_types::{function_space, Cardinality, Count, Never};

fn main() {
    println!("=== Session 4: Cardinality ===\n");

    // -------------------------------------------------------------------------
    // Base Counts
    // -------------------------------------------------------------------------
    println!("1. Base Counts");
    println!("--------------");

    println!("|Never| = {}", Never::COUNT);
    println!("|()|    = {}", <()>::COUNT);
    println!("|bool|  = {}", bool::COUNT);
    println!("|u8|    = {}", u8::COUNT);
    println!("|u64|   = {}", u64::COUNT);
    println!();

    // -------------------------------------------------------------------------
    // Sums Add, Products Multiply
    // -------------------------------------------------------------------------
    println!("2. Sums Add, Products Multiply");
    println!("------------------------------");

    println!("|Suit|             = {}  (four variants)", Suit::COUNT);
    println!("|Result<bool, u8>| = {}  (2 + 256)", Result::<bool, u8>::COUNT);
    println!("|(bool, u8)|       = {}  (2 * 256)", <(bool, u8)>::COUNT);
    println!("|Flag|             = {}  (bool field * u8 field)", Flag::COUNT);
    println!();

    // -------------------------------------------------------------------------
    // Option Is "+ 1"
    // -------------------------------------------------------------------------
    println!("3. Option Is \"+ 1\"");
    println!("------------------");

    println!("|Option<bool>|         = {}", Option::<bool>::COUNT);
    println!("|Option<Option<bool>>| = {}", Option::<Option<bool>>::COUNT);
    println!("|Option<Never>|        = {}  (only None)", Option::<Never>::COUNT);
    println!();

    // -------------------------------------------------------------------------
    // Function Spaces
    // -------------------------------------------------------------------------
    println!("4. Function Spaces");
    println!("------------------");

    println!(
        "|bool -> bool|  = {}  (id, not, const true, const false)",
        function_space(bool::COUNT, bool::COUNT)
    );
    println!(
        "|u8 -> bool|    = {}  (one predicate per subset)",
        function_space(u8::COUNT, bool::COUNT)
    );
    println!(
        "|Never -> u8|   = {}  (the vacuous function)",
        function_space(Never::COUNT, u8::COUNT)
    );
    println!(
        "|bool -> Never| = {}  (no way to produce a value)",
        function_space(bool::COUNT, Never::COUNT)
    );

    // Saturation: past u128, the count is just "infinite"
    println!(
        "|u64 -> bool|   = {}",
        function_space(u64::COUNT, bool::COUNT)
    );

    println!("\n=== Session 4 Complete ===");
}
