//! Walk through how deletes prune the tree. Run with
//! `RUST_LOG=keytrie=trace cargo run --example pruning` to see each
//! pruning decision.

use keytrie::trie::TrieString;
use tracing_subscriber::EnvFilter;

fn show(trie: &TrieString<u32>, keys: &[&str]) {
    for key in keys {
        println!(
            "  {:<8} exist: {:<5} get: {:?}",
            key,
            trie.exist(key.chars()),
            trie.get(key.chars())
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keys = ["a", "ab", "abc", "abcd", "abc1", "abc12", "abc123"];
    let mut trie = TrieString::<u32>::new();
    for (key, value) in [("a", 100), ("ab", 200), ("abc", 300), ("abcd", 400), ("abc123", 500)] {
        trie.set(key.chars(), value);
    }
    println!("populated");
    show(&trie, &keys);

    trie.del("abc123".chars());
    println!("after del(\"abc123\")");
    show(&trie, &keys);

    trie.del("abc".chars());
    println!("after del(\"abc\")");
    show(&trie, &keys);

    // Rejected inputs leave the trie alone
    assert!(!trie.set("".chars(), 1));
    assert!(!trie.set("zzz".chars(), None::<u32>));
    assert!(!trie.del("nope".chars()));
}
