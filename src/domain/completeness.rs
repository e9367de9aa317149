//! Completeness evaluation over a node tree
//!
//! A node is complete when both title and content are filled in. The glyph
//! of a DEFAULT node is full only if the node and every descendant are
//! complete; CHOICE nodes always show the full glyph.

use tracing::instrument;

use crate::domain::entities::{Node, NodeType};
use crate::domain::glyph::Glyph;

/// True iff title and content are both non-empty.
pub fn is_node_complete(node: &Node) -> bool {
    !node.title.is_empty() && !node.content.is_empty()
}

/// Lazy depth-first pre-order iterator over the descendants of a node.
///
/// The start node itself is not yielded.
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Descendants<'a> {
    fn new(node: &'a Node) -> Self {
        // Push children in reverse order for left-to-right traversal
        let stack = node.children().iter().rev().collect();
        Self { stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(current.children().iter().rev());
        Some(current)
    }
}

pub fn descendants(node: &Node) -> Descendants<'_> {
    Descendants::new(node)
}

/// All descendants of `node` in pre-order, excluding `node`.
#[instrument(level = "trace", skip_all, fields(id = %node.id))]
pub fn collect_descendants(node: &Node) -> Vec<&Node> {
    descendants(node).collect()
}

/// First descendant in pre-order that is not complete.
pub fn first_incomplete_descendant(node: &Node) -> Option<&Node> {
    descendants(node).find(|d| !is_node_complete(d))
}

/// True if `children` is absent or every descendant is complete.
#[instrument(level = "trace", skip_all, fields(id = %node.id))]
pub fn are_descendants_complete(node: &Node) -> bool {
    match node.children {
        None => true,
        Some(_) => first_incomplete_descendant(node).is_none(),
    }
}

/// Glyph to present for `node`.
#[instrument(level = "trace", skip_all, fields(id = %node.id))]
pub fn completeness_glyph(node: &Node) -> Glyph {
    match node.node_type {
        NodeType::Choice => Glyph::FullCircle,
        NodeType::Default => {
            if is_node_complete(node) && are_descendants_complete(node) {
                Glyph::FullCircle
            } else {
                Glyph::HalfCircle
            }
        }
    }
}

/// Completeness of one node as computed by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<'a> {
    pub node: &'a Node,
    pub complete: bool,
    pub descendants_complete: bool,
    pub glyph: Glyph,
}

/// Evaluate every node of the tree in a single pass, root first in pre-order.
///
/// Gives the same answers as [`is_node_complete`], [`are_descendants_complete`]
/// and [`completeness_glyph`] per node, in time linear in the tree size.
#[instrument(level = "debug", skip_all, fields(root = %root.id))]
pub fn evaluate(root: &Node) -> Vec<Evaluation<'_>> {
    // Pre-order with parent index: every descendant of i sits after i
    let mut order: Vec<(&Node, Option<usize>)> = Vec::new();
    let mut stack = vec![(root, None)];
    while let Some((node, parent)) = stack.pop() {
        let index = order.len();
        order.push((node, parent));
        stack.extend(node.children().iter().rev().map(|child| (child, Some(index))));
    }

    let complete: Vec<bool> = order.iter().map(|(node, _)| is_node_complete(node)).collect();
    let mut descendants_complete = vec![true; order.len()];
    for (index, (_, parent)) in order.iter().enumerate().rev() {
        if let Some(parent) = *parent {
            if !(complete[index] && descendants_complete[index]) {
                descendants_complete[parent] = false;
            }
        }
    }

    order
        .iter()
        .enumerate()
        .map(|(index, (node, _))| {
            let glyph = match node.node_type {
                NodeType::Choice => Glyph::FullCircle,
                NodeType::Default if complete[index] && descendants_complete[index] => {
                    Glyph::FullCircle
                }
                NodeType::Default => Glyph::HalfCircle,
            };
            Evaluation {
                node,
                complete: complete[index],
                descendants_complete: descendants_complete[index],
                glyph,
            }
        })
        .collect()
}
