//! The immutable `Query` descriptor and its rendering.

use std::fmt;

use tracing::debug;

use super::literal::{Literal, ToLiteral};
use crate::error::{QueryError, Result};

/// Order direction for an ORDER BY key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderKey {
    column: String,
    direction: OrderDirection,
}

impl OrderKey {
    /// Creates an ascending key.
    #[must_use]
    pub fn asc(column: &str) -> Self {
        Self {
            column: String::from(column),
            direction: OrderDirection::Asc,
        }
    }

    /// Creates a descending key.
    #[must_use]
    pub fn desc(column: &str) -> Self {
        Self {
            column: String::from(column),
            direction: OrderDirection::Desc,
        }
    }

    /// Parses an order specification.
    ///
    /// Prefix with `-` for descending order: `"-age"` orders by `age`
    /// descending, `"age"` ascending.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        match spec.strip_prefix('-') {
            Some(column) => Self::desc(column),
            None => Self::asc(spec),
        }
    }

    /// Returns the SQL representation.
    ///
    /// Ascending keys render bare; `ASC` is implied.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self.direction {
            OrderDirection::Asc => self.column.clone(),
            OrderDirection::Desc => format!("{} DESC", self.column),
        }
    }
}

/// An immutable, lazily-evaluated SELECT query descriptor.
///
/// A descriptor accumulates a table name, projected columns, equality
/// filters, and ordering keys. Nothing is rendered until [`Query::build`]
/// is called.
///
/// Every configuration method borrows its receiver and returns a new
/// descriptor, so a partially configured query stays valid and can fan
/// out into several independent variants:
///
/// ```rust
/// use quill_sql_core::Query;
///
/// let people = Query::new("Person").unwrap().filter("name", "Bill");
///
/// // Two divergent descriptors derived from the same ancestor.
/// let by_age = people.order_by(&["age"]);
/// let names = people.select(&["name"]);
///
/// assert_eq!(
///     by_age.build(),
///     "SELECT * FROM Person WHERE name = 'Bill' ORDER BY age;"
/// );
/// assert_eq!(
///     names.build(),
///     "SELECT name FROM Person WHERE name = 'Bill';"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table: String,
    columns: Vec<String>,
    predicates: Vec<(String, Literal)>,
    order_keys: Vec<OrderKey>,
}

impl Query {
    /// Creates a descriptor for `table` with no projection, filters, or
    /// ordering.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] if the table name is
    /// empty, which would otherwise surface as malformed text at build
    /// time.
    pub fn new(table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        if table.is_empty() {
            return Err(QueryError::InvalidArgument(String::from(
                "table name must not be empty",
            )));
        }
        Ok(Self {
            table,
            columns: Vec::new(),
            predicates: Vec::new(),
            order_keys: Vec::new(),
        })
    }

    /// Returns a new descriptor with `columns` appended to the
    /// projection, in the order given.
    ///
    /// Columns are never de-duplicated: selecting a column twice projects
    /// it twice. An empty projection renders as `*`.
    #[must_use]
    pub fn select(&self, columns: &[&str]) -> Self {
        let mut next = self.clone();
        next.columns.extend(columns.iter().map(|c| String::from(*c)));
        next
    }

    /// Returns a new descriptor with an equality constraint on `column`.
    ///
    /// Filtering an already-constrained column overwrites its value; the
    /// clause keeps the position of the first filter on that column.
    #[must_use]
    pub fn filter<V: ToLiteral>(&self, column: &str, value: V) -> Self {
        let mut next = self.clone();
        next.set_predicate(column, value.to_literal());
        next
    }

    /// Returns a new descriptor with every `(column, value)` constraint
    /// applied in iteration order.
    ///
    /// Each pair follows the same overwrite semantics as
    /// [`Query::filter`].
    #[must_use]
    pub fn filter_all<'a, I>(&self, constraints: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Literal)>,
    {
        let mut next = self.clone();
        for (column, value) in constraints {
            next.set_predicate(column, value);
        }
        next
    }

    /// Returns a new descriptor with one ORDER BY key appended for each
    /// specifier, in the order given.
    ///
    /// Keys order ascending by default; prefix with `-` for descending
    /// (`"-age"` renders as `age DESC`). Keys are never de-duplicated.
    #[must_use]
    pub fn order_by(&self, specs: &[&str]) -> Self {
        let mut next = self.clone();
        next.order_keys.extend(specs.iter().map(|s| OrderKey::parse(s)));
        next
    }

    /// Renders the descriptor into its final statement text.
    ///
    /// Rendering reads only this descriptor's accumulated state; the same
    /// descriptor always renders the same string, and rendering never
    /// invalidates the descriptor or any of its derivations.
    #[must_use]
    pub fn build(&self) -> String {
        let mut sql = String::from("SELECT ");

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.columns.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            let conditions: Vec<String> = self
                .predicates
                .iter()
                .map(|(column, value)| format!("{column} = {}", value.to_sql()))
                .collect();
            sql.push_str(&conditions.join(" AND "));
        }

        if !self.order_keys.is_empty() {
            sql.push_str(" ORDER BY ");
            let keys: Vec<String> = self.order_keys.iter().map(OrderKey::to_sql).collect();
            sql.push_str(&keys.join(", "));
        }

        sql.push(';');
        debug!(sql = %sql, "Rendered SELECT statement");
        sql
    }

    fn set_predicate(&mut self, column: &str, value: Literal) {
        match self.predicates.iter_mut().find(|(name, _)| name == column) {
            Some(slot) => slot.1 = value,
            None => self.predicates.push((String::from(column), value)),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
