#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate sapling;

use sapling::{
    count_internal_nodes, count_leaves, count_nodes, find_all_root_to_leaf_paths,
    have_same_shape, TreeNode,
};

fuzz_target!(|data: &[u8]| {
    let mut bytes = data.iter().copied();
    let tree = decode_tree(&mut bytes, 0);
    let tree = tree.as_ref();
    assert_eq!(count_internal_nodes(tree) + count_leaves(tree), count_nodes(tree));
    assert_eq!(find_all_root_to_leaf_paths(tree).len(), count_leaves(tree));
    assert!(have_same_shape(tree, tree));
});

// Each byte is a node: the low bits are the value, bit 7 and bit 6 say whether a left and a
// right child follow in pre-order.
fn decode_tree<I: Iterator<Item = u8>>(bytes: &mut I, depth: usize) -> Option<TreeNode<u8>> {
    if depth > 64 {
        return None;
    }
    let byte = bytes.next()?;
    let left = if byte & 0x80 != 0 { decode_tree(bytes, depth + 1) } else { None };
    let right = if byte & 0x40 != 0 { decode_tree(bytes, depth + 1) } else { None };
    Some(TreeNode::new(byte & 0x3F, left, right))
}
