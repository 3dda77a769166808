#![no_main]

use libfuzzer_sys::fuzz_target;
use strand::tree::SuffixTree;

fuzz_target!(|docs: Vec<Vec<u8>>| {
    // Building, labeling and querying arbitrary documents must not panic,
    // and every reported occurrence must hold the reported bytes
    let Ok(tree) = SuffixTree::build_labeled(&docs) else {
        return;
    };
    assert_eq!(tree.stats().leaf_count, tree.text().len() as u64);

    let found = tree.longest_common_substring().unwrap();
    for occ in tree.occurrences(&found) {
        let doc = &docs[occ.doc_id as usize];
        assert_eq!(&doc[occ.local_offset..occ.local_offset + found.len()], &found.bytes[..]);
    }
});
