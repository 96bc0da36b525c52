//! Integration tests for name resolution: prefix fallback, case
//! insensitivity and leading-dot equivalence.

use std::sync::Arc;

use logtree::{LogManager, Logger, NopLogger};

fn nop() -> Arc<dyn Logger> {
    Arc::new(NopLogger)
}

/// Asserts that `found` is exactly the logger `expected`.
fn assert_resolves_to(found: Option<Arc<dyn Logger>>, expected: &Arc<dyn Logger>) {
    let found = found.expect("expected a logger, got none");
    assert!(Arc::ptr_eq(&found, expected), "resolved to a different logger");
}

#[test]
fn test_fallback_to_nearest_registered_ancestor() {
    let manager = LogManager::new();
    let root = nop();
    let a = nop();
    let c = nop();

    manager.set("", Arc::clone(&root));
    manager.set("a", Arc::clone(&a));
    manager.set("a.b.c", Arc::clone(&c));

    // No exact "a.b"; falls back to "a".
    assert_resolves_to(manager.find("a.b"), &a);
    // Deeper than the deepest entry; falls back to "a.b.c".
    assert_resolves_to(manager.find("a.b.c.d"), &c);
    // Nothing under "x"; falls back to the root.
    assert_resolves_to(manager.find("x"), &root);
}

#[test]
fn test_resolution_order_walks_prefixes_toward_root() {
    let manager = LogManager::new();
    let root = nop();
    let a = nop();
    let c = nop();
    let e = nop();

    manager.set("", Arc::clone(&root));
    manager.set("a", Arc::clone(&a));
    manager.set("a.b.c", Arc::clone(&c));
    manager.set("a.b.c.d.e", Arc::clone(&e));

    assert_resolves_to(manager.find(""), &root);
    assert_resolves_to(manager.find("A"), &a);
    assert_resolves_to(manager.find("a.B"), &a);
    assert_resolves_to(manager.find("A.b.C"), &c);
    assert_resolves_to(manager.find("a.b.c.d"), &c);
    assert_resolves_to(manager.find("a.b.c.d.e"), &e);
    assert_resolves_to(manager.find("x"), &root);
    assert_resolves_to(manager.find("x.y"), &root);
    assert_resolves_to(manager.find("a.x"), &a);
    assert_resolves_to(manager.find("a.x.y"), &a);
}

#[test]
fn test_case_insensitive_matching() {
    let manager = LogManager::new();
    let logger = nop();
    manager.set("A", Arc::clone(&logger));

    assert_resolves_to(manager.find("a"), &logger);
    assert_resolves_to(manager.find("A"), &logger);
    assert_resolves_to(manager.find(".a"), &logger);

    let manager = LogManager::new();
    let logger = nop();
    manager.set("Service.Database", Arc::clone(&logger));
    assert_resolves_to(manager.find("SERVICE.DATABASE"), &logger);
    assert_resolves_to(manager.find("service.database.pool"), &logger);
}

#[test]
fn test_leading_dot_equivalence() {
    let manager = LogManager::new();
    let logger = nop();
    manager.set(".a.b", Arc::clone(&logger));

    // ".a.b" and "a.b" name the same node.
    assert_resolves_to(manager.find("a.b"), &logger);
    assert_resolves_to(manager.find(".a.b"), &logger);
}

#[test]
fn test_no_registered_ancestor_means_absent() {
    let manager = LogManager::new();
    let c1 = nop();
    let c2 = nop();
    manager.set("a.b.c1", Arc::clone(&c1));
    manager.set("a.b.c2", Arc::clone(&c2));

    // "a.b" and "a" are pure routing nodes and the root has no logger.
    assert!(manager.find("a.b.x").is_none());
    assert!(manager.find("a").is_none());
    assert!(manager.find("").is_none());

    // Siblings resolve independently.
    assert_resolves_to(manager.find("a.b.c1.x"), &c1);
    assert_resolves_to(manager.find("a.b.c2"), &c2);
}

#[test]
fn test_set_find_round_trip() {
    let manager = LogManager::new();
    for name in ["", "a", "a.b", "deep.nested.logger.name", ".dotted", "UPPER.case"] {
        let logger = nop();
        manager.set(name, Arc::clone(&logger));
        assert_resolves_to(manager.find(name), &logger);
    }
}

#[test]
fn test_last_writer_wins() {
    let manager = LogManager::new();
    let first = nop();
    let second = nop();

    manager.set("app", first);
    // Different spelling, same node.
    manager.set(".APP", Arc::clone(&second));

    assert_resolves_to(manager.find("app"), &second);
}

#[test]
fn test_empty_segments_are_distinct_names() {
    let manager = LogManager::new();
    let dotted = nop();
    let plain = nop();

    // "a..b" has an empty middle segment; it is not the same name as "a.b".
    manager.set("a..b", Arc::clone(&dotted));
    manager.set("a.b", Arc::clone(&plain));

    assert_resolves_to(manager.find("a..b"), &dotted);
    assert_resolves_to(manager.find("a.b"), &plain);
}
