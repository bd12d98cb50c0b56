//! Provides a prefix tree which maps keys composed of sequences of atoms
//! to values.
//!
//! Atoms must support the TrieAtom trait. Any `IntoIterator` over atoms
//! can be used as a key, so the caller decides the granularity of a key:
//!  - chars
//!  - grapheme clusters
//!  - &str ('words')
//!  - numbers
//!
//! Every node on a stored path "exists", whether or not it holds a value.
//! [`Trie::exist`] answers whether a path exists, [`Trie::get`] answers
//! whether a value is stored at the end of it.
//!
//! Example 1
//! ```
//! use keytrie::trie::Trie;
//!
//! let mut trie: Trie<char, usize> = Trie::new();
//! assert!(trie.set("abcdef".chars(), 6));
//! assert!(trie.set("abc".chars(), 3));
//!
//! assert_eq!(trie.get("abcdef".chars()), Some(&6));
//! assert_eq!(trie.get(['a', 'b', 'c']), Some(&3));
//!
//! // "abcd" is on the path to "abcdef" but holds no value
//! assert!(trie.exist("abcd".chars()));
//! assert_eq!(trie.get("abcd".chars()), None);
//!
//! assert!(trie.del("abcdef".chars()));
//! assert!(!trie.exist("abcd".chars()));
//! assert_eq!(trie.get("abc".chars()), Some(&3));
//! ```
//!
//! Example 2
//! ```
//! use keytrie::trie::Trie;
//!
//! let mut trie: Trie<&str, u32> = Trie::new();
//! let input = "the quick brown fox".split_whitespace();
//! trie.set(input.clone(), 4);
//!
//! assert!(trie.exist("the quick".split_whitespace()));
//! assert_eq!(trie.get(input.clone()), Some(&4));
//! assert!(trie.del(input.clone()));
//! assert!(!trie.exist(input));
//! ```
//!
//! The empty key is never valid, and `None` is reserved to mean "no
//! value", so it cannot be stored.
//!
//! Example 3
//! ```
//! use keytrie::trie::Trie;
//!
//! let mut trie: Trie<char, u32> = Trie::new();
//! assert!(!trie.set("".chars(), 1));
//! assert!(!trie.set("abc".chars(), None::<u32>));
//! assert!(!trie.exist("abc".chars()));
//! assert!(trie.set("abc".chars(), Some(1)));
//! ```

use std::collections::btree_map::Entry;

use tracing::{debug, trace};

use crate::error::TrieError;
use crate::node::Node;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A
where
    A: Copy + Default + Ord,
{
    // Nothing to implement, since A already supports the other traits.
}

/// Stores a key of atoms as individual nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie<A: TrieAtom, V> {
    pub(crate) root: Node<A, V>,
}

/// A Trie keyed by chars.
pub type TrieString<V> = Trie<char, V>;

impl<A: TrieAtom, V> Default for Trie<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: TrieAtom, V> Trie<A, V> {
    /// Create a new, empty Trie.
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Can the whole path of `key` be walked from the root? Valueless
    /// interior nodes count.
    pub fn exist<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.terminal(key).is_some()
    }

    /// Get a reference to the value stored at the end of `key`.
    ///
    /// `None` either means the path does not exist or that it holds no
    /// value. Use [`Trie::exist`] to tell them apart.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&V> {
        self.terminal(key).and_then(|node| node.value.as_ref())
    }

    /// Store `value` at the end of `key`, creating the path as needed. An
    /// existing value is overwritten.
    ///
    /// Returns false, leaving the Trie untouched, if the key is empty or
    /// `value` is `None`.
    pub fn set<K, T>(&mut self, key: K, value: T) -> bool
    where
        K: IntoIterator<Item = A>,
        T: Into<Option<V>>,
    {
        match self.set_internal(key, value.into()) {
            Ok(()) => true,
            Err(error) => {
                debug!(%error, "set rejected");
                false
            }
        }
    }

    /// Remove the value stored at the end of `key` and prune whatever part
    /// of its path no longer leads to a value.
    ///
    /// Returns true if the whole path of `key` existed.
    pub fn del<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let atoms: Vec<A> = key.into_iter().collect();
        let prune_at = match self.prune_point(&atoms) {
            Ok(prune_at) => prune_at,
            Err(error) => {
                debug!(%error, "del rejected");
                return false;
            }
        };

        match prune_at {
            Some(depth) => {
                if let Some(parent) = self.root.descend_mut(atoms[..depth].iter().copied()) {
                    parent.children.remove(&atoms[depth]);
                    trace!(depth, len = atoms.len(), "pruned dead branch");
                }
            }
            None => {
                if let Some(terminal) = self.root.descend_mut(atoms.iter().copied()) {
                    terminal.value = None;
                    trace!(len = atoms.len(), "cleared value in place");
                }
            }
        }
        true
    }

    fn terminal<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A, V>> {
        let mut atoms = key.into_iter().peekable();
        atoms.peek()?;
        self.root.descend(atoms)
    }

    fn set_internal<K: IntoIterator<Item = A>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) -> Result<(), TrieError> {
        let value = value.ok_or(TrieError::AbsentValue)?;
        let mut atoms = key.into_iter().peekable();
        atoms.peek().ok_or(TrieError::EmptyKey)?;

        let mut node = &mut self.root;
        while let Some(atom) = atoms.next() {
            match node.children.entry(atom) {
                Entry::Occupied(entry) => node = entry.into_mut(),
                Entry::Vacant(entry) => {
                    // Nothing below here matches, so the rest of the key is new.
                    node = entry.insert(Node::new(atom)).extend(atoms);
                    break;
                }
            }
        }
        node.value = Some(value);
        Ok(())
    }

    /// Work out where deleting `atoms` should cut the tree.
    ///
    /// `Ok(Some(depth))` means the child reached by `atoms[depth]` from the
    /// node at `atoms[..depth]` heads a dead branch and must be detached.
    /// `Ok(None)` means nothing can be pruned and the terminal value is
    /// cleared in place.
    fn prune_point(&self, atoms: &[A]) -> Result<Option<usize>, TrieError> {
        let (last, path) = atoms.split_last().ok_or(TrieError::EmptyKey)?;

        let mut node = &self.root;
        let mut candidate = None;
        for (depth, atom) in path.iter().enumerate() {
            node = node.children.get(atom).ok_or(TrieError::MissingPath)?;
            if node.value.is_some() || node.children.len() > 1 {
                // Anything above here is still needed.
                candidate = None;
            } else if candidate.is_none() {
                candidate = Some(depth);
            }
        }

        // The terminal's own value is going away; only a child keeps it.
        let terminal = node.children.get(last).ok_or(TrieError::MissingPath)?;
        if !terminal.children.is_empty() {
            candidate = None;
        } else if candidate.is_none() {
            candidate = Some(path.len());
        }
        Ok(candidate)
    }
}
