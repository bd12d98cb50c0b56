use crate::node::Node;
use crate::trie::Trie;

use proptest::prelude::*;
use std::collections::BTreeMap;

/// No node below the root may be left without a value and without
/// children, and every child must be filed under its own symbol.
fn validate_node(node: &Node<char, u8>, is_root: bool) {
    if !is_root {
        assert!(!node.is_dead(), "dead node {:?} left in tree", node.symbol);
    }
    for (symbol, child) in &node.children {
        assert_eq!(*symbol, child.symbol, "child filed under wrong symbol");
        validate_node(child, false);
    }
}

fn validate_tree(trie: &Trie<char, u8>) {
    validate_node(&trie.root, true);
}

fn assert_matches_model(trie: &Trie<char, u8>, model: &BTreeMap<String, u8>, probe: &str) {
    assert_eq!(trie.get(probe.chars()), model.get(probe), "get({:?})", probe);
    let expected = !probe.is_empty() && model.keys().any(|k| k.starts_with(probe));
    assert_eq!(trie.exist(probe.chars()), expected, "exist({:?})", probe);
}

#[derive(Clone, Debug)]
enum Op {
    Set(String, u8),
    Del(String),
}

fn key() -> impl Strategy<Value = String> {
    "[abc]{0,6}".prop_map(String::from)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key(), any::<u8>()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => key().prop_map(Op::Del),
    ]
}

proptest! {
    #[test]
    fn prop_matches_btreemap_model(ops in prop::collection::vec(op(), 1..64), probes in prop::collection::vec(key(), 8)) {
        let mut trie: Trie<char, u8> = Trie::new();
        let mut model: BTreeMap<String, u8> = BTreeMap::new();

        for op in &ops {
            match op {
                Op::Set(k, v) => {
                    let accepted = trie.set(k.chars(), *v);
                    prop_assert_eq!(accepted, !k.is_empty());
                    if accepted {
                        model.insert(k.clone(), *v);
                    }
                }
                Op::Del(k) => {
                    let existed = !k.is_empty() && model.keys().any(|m| m.starts_with(k.as_str()));
                    prop_assert_eq!(trie.del(k.chars()), existed);
                    model.remove(k);
                }
            }
            validate_tree(&trie);
            let touched = match op {
                Op::Set(k, _) | Op::Del(k) => k.as_str(),
            };
            assert_matches_model(&trie, &model, touched);
        }

        for probe in &probes {
            assert_matches_model(&trie, &model, probe);
        }
        for k in model.keys() {
            assert_matches_model(&trie, &model, k);
        }
    }

    #[test]
    fn prop_set_then_del_restores_tree(seed in prop::collection::vec(key(), 0..16), k in "[abc]{0,5}d[abcd]{0,3}".prop_map(String::from), v in any::<u8>()) {
        let mut trie: Trie<char, u8> = Trie::new();
        for s in &seed {
            trie.set(s.chars(), 1);
        }
        // seeds never contain 'd', so k always grows a fresh branch
        prop_assert!(!trie.exist(k.chars()));
        let before = trie.clone();

        prop_assert!(trie.set(k.chars(), v));
        prop_assert_eq!(trie.get(k.chars()), Some(&v));
        prop_assert!(trie.exist(k.chars()));
        prop_assert!(trie.del(k.chars()));
        prop_assert!(!trie.exist(k.chars()));
        prop_assert_eq!(trie.get(k.chars()), None);
        prop_assert_eq!(trie, before);
    }

    #[test]
    fn prop_set_is_idempotent(k in "[a-z]{1,8}".prop_map(String::from), v in any::<u8>()) {
        let mut trie: Trie<char, u8> = Trie::new();
        trie.set(k.chars(), v);
        let once = trie.clone();
        trie.set(k.chars(), v);
        prop_assert_eq!(trie.get(k.chars()), Some(&v));
        prop_assert_eq!(trie, once);
    }
}
