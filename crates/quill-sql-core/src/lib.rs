//! # quill-sql-core
//!
//! An immutable, lazily-evaluated SELECT query builder.
//!
//! A [`Query`] descriptor accumulates configuration through chained calls
//! and renders to SQL text only when [`Query::build`] is called. Because
//! every call returns a fresh descriptor, a partially configured query
//! can fan out into several independent variants:
//!
//! ```rust
//! use quill_sql_core::Query;
//!
//! let people = Query::new("Person")
//!     .unwrap()
//!     .select(&["id", "age"])
//!     .filter("name", "Bill");
//!
//! // Two divergent queries derived from the same ancestor.
//! let by_name = people.select(&["name"]).order_by(&["name"]);
//! let by_age = people.order_by(&["age"]);
//!
//! assert_eq!(
//!     by_name.build(),
//!     "SELECT id, age, name FROM Person WHERE name = 'Bill' ORDER BY name;"
//! );
//! assert_eq!(
//!     by_age.build(),
//!     "SELECT id, age FROM Person WHERE name = 'Bill' ORDER BY age;"
//! );
//! ```
//!
//! ## Literal formatting
//!
//! Filter values are restricted to a closed set of scalar kinds (string,
//! integer, float, boolean, NULL), each with a fixed textual form. Text
//! literals are single-quoted without escaping, so untrusted input must
//! not reach [`Query::filter`].

pub mod builder;
pub mod error;

pub use builder::{Literal, OrderDirection, OrderKey, Query, ToLiteral};
pub use error::{QueryError, Result};
