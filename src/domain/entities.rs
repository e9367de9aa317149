//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a map node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Variant tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    #[default]
    Default,
    Choice,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Default => write!(f, "DEFAULT"),
            NodeType::Choice => write!(f, "CHOICE"),
        }
    }
}

fn default_show() -> bool {
    true
}

/// One entry of a rooted, ordered map tree.
///
/// Children are owned, so a node can never contain itself or one of its
/// ancestors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Empty string means "unset"
    #[serde(default)]
    pub title: String,
    /// Empty string means "unset"
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    /// `None` marks a leaf; `Some(vec![])` is present but empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[serde(default, alias = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_show")]
    pub show: bool,
}

impl Node {
    pub fn new(id: u64, title: &str, content: &str) -> Self {
        Self {
            id: NodeId(id),
            title: title.to_string(),
            content: content.to_string(),
            node_type: NodeType::Default,
            children: None,
            background_color: None,
            x: 0.0,
            y: 0.0,
            show: true,
        }
    }

    pub fn choice(id: u64) -> Self {
        Self {
            node_type: NodeType::Choice,
            ..Self::new(id, "", "")
        }
    }

    /// Builder-style: append a child, creating the children list if absent.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Children as a slice; absent and empty both yield `&[]`.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Distance to the deepest descendant; 0 for leaves.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 0)]; // (node, depth)

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.children().iter().map(|child| (child, depth + 1)));
        }

        max_depth
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_leaf_when_height_then_zero() {
        let node = Node::new(1, "a", "b");
        assert_eq!(node.height(), 0);
        assert!(node.is_leaf());
    }

    #[test]
    fn given_empty_children_when_height_then_zero() {
        let node = Node::new(1, "a", "b").with_children(vec![]);
        assert_eq!(node.height(), 0);
        assert!(node.children.is_some());
    }

    #[test]
    fn given_three_levels_when_height_then_two() {
        let node = Node::new(1, "a", "b")
            .with_child(Node::new(2, "c", "d").with_child(Node::new(3, "e", "f")))
            .with_child(Node::new(4, "g", "h"));
        assert_eq!(node.height(), 2);
    }

    #[test]
    fn given_deep_chain_when_height_then_chain_length() {
        let node = test_support::deep_chain(200_000);
        assert_eq!(node.height(), 200_000);
        test_support::dismantle(node);
    }

    #[test]
    fn given_json_without_optional_fields_when_parsing_then_uses_defaults() {
        let node: Node = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(node.id, NodeId(7));
        assert_eq!(node.node_type, NodeType::Default);
        assert!(node.children.is_none());
        assert!(node.show);
        assert_eq!(node.title, "");
    }

    #[test]
    fn given_choice_type_when_parsing_then_maps_to_choice() {
        let node: Node = serde_json::from_str(r#"{"id": 1, "type": "CHOICE"}"#).unwrap();
        assert_eq!(node.node_type, NodeType::Choice);
    }

    #[test]
    fn given_camel_case_background_color_when_parsing_then_kept() {
        let node: Node =
            serde_json::from_str(r##"{"id": 1, "backgroundColor": "#ffcc00"}"##).unwrap();
        assert_eq!(node.background_color.as_deref(), Some("#ffcc00"));
    }
}
