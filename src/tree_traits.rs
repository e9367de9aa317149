/*
Conversion of map trees into termtree::Tree for terminal display.
Each label is "<glyph> [<id>] <title>", with "No title" standing in for unset titles.
 */
use termtree::Tree;
use tracing::instrument;

use crate::cli::output;
use crate::domain::view::NO_TITLE;
use crate::domain::{completeness_glyph, MindMap, Node};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(node: &Node) -> String {
    let title = if node.title.is_empty() {
        NO_TITLE
    } else {
        node.title.as_str()
    };
    format!(
        "{} [{}] {}",
        output::glyph(completeness_glyph(node)),
        node.id,
        title
    )
}

impl TreeNodeConvert for Node {
    #[instrument(level = "trace", skip_all, fields(id = %self.id))]
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(label(self)).with_leaves(leaves)
    }
}

impl TreeNodeConvert for MindMap {
    fn to_tree_string(&self) -> Tree<String> {
        self.root().to_tree_string()
    }
}
