//! Dependency resolver tests
//!
//! Exercises the ordering invariants, implicit-node behavior and cycle
//! failure of the batch resolver.

use std::collections::{BTreeMap, BTreeSet};

use modkit::{ModuleDependencies, ModuleError};

fn mapping(entries: &[(&str, &[&str])]) -> BTreeMap<String, BTreeSet<String>> {
    entries
        .iter()
        .map(|(id, deps)| {
            (
                id.to_string(),
                deps.iter().map(|d| d.to_string()).collect(),
            )
        })
        .collect()
}

fn position(order: &[String], id: &str) -> usize {
    order
        .iter()
        .position(|x| x == id)
        .unwrap_or_else(|| panic!("{id} missing from order {order:?}"))
}

#[test]
fn empty_mapping_resolves_to_empty_order() {
    let resolution = ModuleDependencies::resolve(&BTreeMap::new()).unwrap();
    assert!(resolution.order.is_empty());
    assert!(resolution.layers.is_empty());
}

#[test]
fn dependencies_precede_their_dependents() {
    let resolution =
        ModuleDependencies::resolve(&mapping(&[("a", &[]), ("b", &["a"]), ("c", &["a", "b"])]))
            .unwrap();

    assert_eq!(resolution.order, vec!["a", "b", "c"]);
}

#[test]
fn every_identifier_appears_exactly_once() {
    // Diamond: d depends on b and c, both depend on a.
    let resolution = ModuleDependencies::resolve(&mapping(&[
        ("a", &[]),
        ("b", &["a"]),
        ("c", &["a"]),
        ("d", &["b", "c"]),
    ]))
    .unwrap();

    let mut seen = BTreeSet::new();
    for id in &resolution.order {
        assert!(seen.insert(id.clone()), "{id} appears twice");
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn cyclic_mapping_fails_instead_of_hanging() {
    let err = ModuleDependencies::resolve(&mapping(&[("a", &["b"]), ("b", &["a"])])).unwrap_err();

    match err {
        ModuleError::CyclicDependency(stuck) => {
            assert_eq!(stuck, vec!["a".to_string(), "b".to_string()]);
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
}

#[test]
fn unregistered_dependency_becomes_an_implicit_node() {
    let resolution = ModuleDependencies::resolve(&mapping(&[("a", &["z"])])).unwrap();

    assert_eq!(resolution.order.len(), 2);
    assert!(position(&resolution.order, "z") < position(&resolution.order, "a"));
}

#[test]
fn resolution_is_deterministic_across_runs() {
    let m = mapping(&[
        ("ui", &["theme", "icons"]),
        ("theme", &[]),
        ("icons", &["theme"]),
        ("export", &["ui"]),
    ]);

    let first = ModuleDependencies::resolve(&m).unwrap();
    let second = ModuleDependencies::resolve(&m).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unrelated_identifiers_are_ordered_lexicographically() {
    let resolution =
        ModuleDependencies::resolve(&mapping(&[("zeta", &[]), ("alpha", &[]), ("mid", &[])]))
            .unwrap();

    assert_eq!(resolution.order, vec!["alpha", "mid", "zeta"]);
    assert_eq!(resolution.layers.len(), 1);
}

#[test]
fn longer_chain_keeps_precedence_for_every_edge() {
    let m = mapping(&[
        ("a", &[]),
        ("b", &["a"]),
        ("c", &["b"]),
        ("d", &["c", "a"]),
        ("e", &["d", "b"]),
    ]);
    let resolution = ModuleDependencies::resolve(&m).unwrap();

    for (id, deps) in &m {
        for dep in deps {
            assert!(
                position(&resolution.order, dep) < position(&resolution.order, id),
                "{dep} must precede {id} in {:?}",
                resolution.order
            );
        }
    }
}
