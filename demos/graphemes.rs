use keytrie::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::<&str, usize>::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    let count = input.clone().count();
    trie.set(input.clone(), count);
    assert!(trie.exist(input.clone()));
    assert_eq!(trie.get(input.clone()), Some(&count));

    // The first two clusters form a path, but hold no value
    let prefix = s.graphemes(true).take(2);
    assert!(trie.exist(prefix.clone()));
    assert!(trie.get(prefix).is_none());

    assert!(trie.del(input.clone()));
    assert!(!trie.exist(input));
    println!("{} grapheme clusters stored and removed", count);
}
