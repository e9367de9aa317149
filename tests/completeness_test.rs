//! Completeness evaluation over whole trees

use rstest::{fixture, rstest};

use mapnode::domain::{
    are_descendants_complete, collect_descendants, completeness_glyph, is_node_complete, Glyph,
    Node,
};
use mapnode::util::testing;

// root
// ├── a
// │   └── a1
// │       └── a1x
// └── b
#[fixture]
fn complete_tree() -> Node {
    testing::init_test_setup();
    Node::new(1, "root", "r")
        .with_child(
            Node::new(2, "a", "a")
                .with_child(Node::new(3, "a1", "x").with_child(Node::new(4, "a1x", "y"))),
        )
        .with_child(Node::new(5, "b", "b"))
}

#[rstest]
#[case("", "")]
#[case("", "content")]
#[case("title", "")]
#[case("title", "content")]
fn given_any_texts_when_choice_glyph_then_full(#[case] title: &str, #[case] content: &str) {
    let mut node = Node::choice(1).with_child(Node::new(2, "", ""));
    node.title = title.to_string();
    node.content = content.to_string();

    assert_eq!(completeness_glyph(&node), Glyph::FullCircle);
}

#[test]
fn given_default_node_with_empty_title_when_evaluating_then_half_circle() {
    let node = Node::new(1, "", "content");

    assert!(!is_node_complete(&node));
    assert_eq!(completeness_glyph(&node), Glyph::HalfCircle);
}

#[test]
fn given_complete_leaf_when_evaluating_then_full_circle() {
    let node = Node::new(1, "title", "content");

    assert!(node.children.is_none());
    assert_eq!(completeness_glyph(&node), Glyph::FullCircle);
}

#[rstest]
fn given_complete_tree_when_evaluating_root_then_full_circle(complete_tree: Node) {
    assert!(are_descendants_complete(&complete_tree));
    assert_eq!(completeness_glyph(&complete_tree), Glyph::FullCircle);
}

#[rstest]
fn given_one_incomplete_grandchild_when_evaluating_root_then_half_circle(mut complete_tree: Node) {
    // a1 is a grandchild of root
    let a = &mut complete_tree.children.as_mut().unwrap()[0];
    a.children.as_mut().unwrap()[0].content.clear();

    assert!(is_node_complete(&complete_tree));
    assert!(!are_descendants_complete(&complete_tree));
    assert_eq!(completeness_glyph(&complete_tree), Glyph::HalfCircle);
    // sibling subtree is unaffected
    assert_eq!(completeness_glyph(&complete_tree.children()[1]), Glyph::FullCircle);
}

#[test]
fn given_leaf_without_children_field_when_collecting_then_empty() {
    let leaf = Node::new(1, "t", "c");
    assert!(collect_descendants(&leaf).is_empty());
}

#[rstest]
fn given_multi_level_tree_when_collecting_then_preorder_excluding_root(complete_tree: Node) {
    let ids: Vec<u64> = collect_descendants(&complete_tree)
        .iter()
        .map(|n| n.id.0)
        .collect();

    assert_eq!(ids, vec![2, 3, 4, 5]);
}

#[test]
fn given_incomplete_root_with_complete_children_when_evaluating_then_half_circle() {
    let root = Node::new(1, "", "").with_child(Node::new(2, "t", "c"));

    assert!(are_descendants_complete(&root));
    assert_eq!(completeness_glyph(&root), Glyph::HalfCircle);
}

#[test]
fn given_incomplete_choice_child_when_evaluating_default_parent_then_half_circle() {
    // CHOICE only short-circuits its own glyph; as a descendant it is judged by its texts
    let root = Node::new(1, "t", "c").with_child(Node::choice(2));

    assert_eq!(completeness_glyph(&root), Glyph::HalfCircle);
}
