//! Cross-cutting builder properties: immutability, branching
//! independence, and rendering determinism.

use quill_sql_core::{Literal, Query, QueryError};

#[test]
fn configuration_returns_new_descriptor() {
    let base = Query::new("T").unwrap();
    let before = base.build();

    let selected = base.select(&["x"]);
    let filtered = base.filter("a", 1);
    let ordered = base.order_by(&["y"]);

    // The receiver renders exactly as it did before any derivation.
    assert_eq!(base.build(), before);
    assert_ne!(selected.build(), before);
    assert_ne!(filtered.build(), before);
    assert_ne!(ordered.build(), before);
}

#[test]
fn branching_descriptors_do_not_interfere() {
    let d1 = Query::new("T").unwrap().filter("a", 1);
    let d2 = d1.select(&["x"]);
    let d3 = d1.order_by(&["y"]);

    assert_eq!(d2.build(), "SELECT x FROM T WHERE a = 1;");
    assert_eq!(d3.build(), "SELECT * FROM T WHERE a = 1 ORDER BY y;");
    assert!(!d2.build().contains("ORDER BY"));
    assert!(!d3.build().contains('x'));
}

#[test]
fn rendering_is_idempotent() {
    let q = Query::new("T")
        .unwrap()
        .select(&["x", "y"])
        .filter("a", 1)
        .order_by(&["x"]);
    assert_eq!(q.build(), q.build());
}

#[test]
fn filter_overwrites_without_duplicating_clause() {
    let q = Query::new("T").unwrap().filter("a", 1).filter("a", 2);
    let sql = q.build();
    assert_eq!(sql, "SELECT * FROM T WHERE a = 2;");
    assert_eq!(sql.matches("a =").count(), 1);
}

#[test]
fn select_appends_in_call_order() {
    let q = Query::new("T").unwrap().select(&["id"]).select(&["age"]);
    assert_eq!(q.build(), "SELECT id, age FROM T;");
}

#[test]
fn filter_all_matches_chained_filters() {
    let chained = Query::new("T").unwrap().filter("a", 1).filter("b", "x");
    let mapped = Query::new("T").unwrap().filter_all([
        ("a", Literal::Int(1)),
        ("b", Literal::Text(String::from("x"))),
    ]);
    assert_eq!(chained.build(), mapped.build());
}

#[test]
fn person_end_to_end() {
    let q = Query::new("Person").unwrap();
    let f = q.select(&["id", "age"]);
    let g = f.filter("name", "Bill");

    assert_eq!(
        g.select(&["name"]).order_by(&["name"]).build(),
        "SELECT id, age, name FROM Person WHERE name = 'Bill' ORDER BY name;"
    );
    assert_eq!(
        g.order_by(&["age"]).build(),
        "SELECT id, age FROM Person WHERE name = 'Bill' ORDER BY age;"
    );
    // Both renders leave the shared ancestor intact.
    assert_eq!(g.build(), "SELECT id, age FROM Person WHERE name = 'Bill';");
}

#[test]
fn empty_table_name_fails_at_construction() {
    let err = Query::new(String::new()).unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "invalid argument: table name must not be empty");
}

#[test]
fn descriptors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Query>();
    assert_send_sync::<Literal>();
}

#[test]
fn shared_descriptor_renders_across_threads() {
    let q = Query::new("T").unwrap().select(&["x"]).filter("a", 1);
    let expected = q.build();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let derived = q.order_by(&["x"]);
                assert_eq!(q.build(), expected);
                assert_eq!(derived.build(), format!("{} ORDER BY x;", &expected[..expected.len() - 1]));
            });
        }
    });
}
