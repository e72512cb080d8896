//! Branched query construction.
//!
//! A partially configured descriptor is reused as the ancestor of two
//! divergent queries; each renders independently.
//!
//! Run with: cargo run --example person

use quill_sql_core::{Query, Result};

fn main() -> Result<()> {
    let people = Query::new("Person")?
        .select(&["id", "age"])
        .filter("name", "Bill");

    let by_name = people.select(&["name"]).order_by(&["name"]);
    let by_age = people.order_by(&["age"]);

    println!("{by_name}");
    println!("{by_age}");

    // The shared ancestor is still usable after both derivations.
    println!("{people}");

    Ok(())
}
