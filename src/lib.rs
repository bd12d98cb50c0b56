//! Provides a simple prefix tree (Trie) mapping keys composed of
//! sequences of atoms to values.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait. A key is anything
//! which implements `IntoIterator` over atoms, so it is up to the user to
//! decide what kind of atoms make most sense of the keys being stored:
//! chars, grapheme clusters, words, numbers...
//!
//! The interface is deliberately small:
//!  - [`crate::trie::Trie::exist`]: is there a path for this key?
//!  - [`crate::trie::Trie::get`]: what value is stored for this key?
//!  - [`crate::trie::Trie::set`]: store or overwrite a value
//!  - [`crate::trie::Trie::del`]: remove a value and prune any branch left
//!    leading nowhere
//!
//! Since the most common use of a trie is to store the chars of a String,
//! a convenience type, [`crate::trie::TrieString`] is provided.
//!
//! ```
//! use keytrie::trie::TrieString;
//!
//! let mut trie = TrieString::<u32>::new();
//! trie.set("abc".chars(), 100);
//! trie.set("abc123".chars(), 200);
//!
//! assert!(trie.del("abc123".chars()));
//! assert!(!trie.exist("abc1".chars()));
//! assert_eq!(trie.get("abc".chars()), Some(&100));
//! ```
//!
//! The trie is a plain single-owner structure. Wrap it in a lock if it must
//! be shared between threads.

#[cfg(feature = "serde")]
extern crate serde_crate;

mod error;
mod node;

pub mod trie;

#[cfg(test)]
mod proptests;
