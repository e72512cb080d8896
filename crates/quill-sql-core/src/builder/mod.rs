//! Lazy SELECT statement builder.
//!
//! Each configuration method returns a new [`Query`] descriptor and
//! leaves its receiver untouched, so a partially configured query can be
//! retained and extended in several directions at once. Nothing is
//! rendered until [`Query::build`] is called.
//!
//! # Example
//!
//! ```rust
//! use quill_sql_core::builder::Query;
//!
//! let q = Query::new("Person").unwrap();
//! let adults = q.select(&["id", "age"]).filter("age", 18);
//!
//! assert_eq!(adults.build(), "SELECT id, age FROM Person WHERE age = 18;");
//! ```

mod literal;
mod query;

pub use literal::{Literal, ToLiteral};
pub use query::{OrderDirection, OrderKey, Query};
