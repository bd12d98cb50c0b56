//! Reasons a trie operation refuses its input.
//!
//! The public operations report failure through `bool` and `Option`
//! results. These errors exist so the refusal can be logged with a cause.

/// Why an operation did not touch the trie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum TrieError {
    /// The key contained no atoms.
    #[error("empty key not allowed")]
    EmptyKey,

    /// `set` was handed the absence sentinel instead of a value.
    #[error("absent value not allowed")]
    AbsentValue,

    /// Some atom of the key has no matching child on the path.
    #[error("key path does not exist")]
    MissingPath,
}
