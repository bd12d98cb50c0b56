//! A single trie vertex.
//!
//! Nodes only store things. Every invariant about values and pruning is
//! maintained by [`crate::trie::Trie`].

use std::collections::BTreeMap;

use crate::trie::TrieAtom;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A: TrieAtom, V> {
    /// Atom on the edge from the parent. Meaningless for the root.
    pub(crate) symbol: A,
    pub(crate) value: Option<V>,
    pub(crate) children: BTreeMap<A, Node<A, V>>,
}

impl<A: TrieAtom, V> Node<A, V> {
    pub(crate) fn new(symbol: A) -> Self {
        Self {
            symbol,
            value: None,
            children: BTreeMap::new(),
        }
    }

    /// The root has no incoming edge, so its symbol is just a placeholder.
    pub(crate) fn root() -> Self {
        Self::new(A::default())
    }

    /// Link `child` under its own symbol and return it.
    pub(crate) fn adopt(&mut self, child: Node<A, V>) -> &mut Node<A, V> {
        self.children.entry(child.symbol).or_insert(child)
    }

    /// Grow a fresh chain below this node, one node per atom, and return
    /// the last node created (or `self` if `suffix` is empty).
    pub(crate) fn extend<I: IntoIterator<Item = A>>(&mut self, suffix: I) -> &mut Self {
        suffix
            .into_iter()
            .fold(self, |node, atom| node.adopt(Node::new(atom)))
    }

    pub(crate) fn descend<I: IntoIterator<Item = A>>(&self, path: I) -> Option<&Self> {
        path.into_iter()
            .try_fold(self, |node, atom| node.children.get(&atom))
    }

    pub(crate) fn descend_mut<I: IntoIterator<Item = A>>(&mut self, path: I) -> Option<&mut Self> {
        path.into_iter()
            .try_fold(self, |node, atom| node.children.get_mut(&atom))
    }

    /// Carries no information: no value and nowhere further to go.
    #[cfg(test)]
    pub(crate) fn is_dead(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}
