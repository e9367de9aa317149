//! Renderer-independent view model of a single node box

use serde::{Deserialize, Serialize};

use crate::domain::completeness::completeness_glyph;
use crate::domain::dnd::DragState;
use crate::domain::entities::{Node, NodeId, NodeType};
use crate::domain::glyph::{Glyph, GlyphSpec};

pub const NO_TITLE: &str = "No title";
pub const NO_CONTENT: &str = "No content";
pub const CHOICE_LABEL: &str = "NodeType 2";

/// Node box geometry and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Opacity of a node while it is dragged
    pub drag_opacity: f64,
    /// CSS transition applied to centered nodes
    pub transition: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 200.0,
            node_height: 100.0,
            drag_opacity: 0.5,
            transition: "all 500ms ease 0s".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlWidth {
    Third,
    Half,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    AddChild,
    Edit { leaf: bool },
    ExpandCollapse,
}

/// Everything a renderer needs to draw one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub node_type: NodeType,
    pub width: f64,
    pub height: f64,
    pub translate: (f64, f64),
    pub visible: bool,
    pub opacity: f64,
    pub transition: Option<String>,
    pub background_color: Option<String>,
    pub glyph: Glyph,
    pub icon: GlyphSpec,
    /// Title text, placeholder when unset; choice label for CHOICE nodes
    pub title_text: String,
    /// `None` for CHOICE nodes
    pub content_text: Option<String>,
    pub controls: Vec<Control>,
    pub control_width: Option<ControlWidth>,
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}

impl NodeView {
    pub fn build(node: &Node, layout: &LayoutConfig, drag: &DragState, centered: bool) -> Self {
        let glyph = completeness_glyph(node);
        let opacity = if drag.is_dragging(node.id) {
            layout.drag_opacity
        } else {
            1.0
        };
        let transition = centered.then(|| layout.transition.clone());

        let (height, translate, title_text, content_text, controls, control_width) =
            match node.node_type {
                NodeType::Choice => (
                    layout.node_height / 2.0,
                    (node.x, node.y + layout.node_height / 4.0),
                    CHOICE_LABEL.to_string(),
                    None,
                    Vec::new(),
                    None,
                ),
                NodeType::Default => {
                    let has_children = !node.is_leaf();
                    let mut controls = vec![Control::AddChild, Control::Edit { leaf: !has_children }];
                    if has_children {
                        controls.push(Control::ExpandCollapse);
                    }
                    let width = if has_children {
                        ControlWidth::Third
                    } else {
                        ControlWidth::Half
                    };
                    (
                        layout.node_height,
                        (node.x, node.y),
                        or_placeholder(&node.title, NO_TITLE),
                        Some(or_placeholder(&node.content, NO_CONTENT)),
                        controls,
                        Some(width),
                    )
                }
            };

        Self {
            id: node.id,
            node_type: node.node_type,
            width: layout.node_width,
            height,
            translate,
            visible: node.show,
            opacity,
            transition,
            background_color: node.background_color.clone(),
            glyph,
            icon: glyph.spec(),
            title_text,
            content_text,
            controls,
            control_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::test_support::{deep_chain, dismantle};

    fn layout() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn given_unset_texts_when_building_then_placeholders() {
        let view = NodeView::build(&Node::new(1, "", ""), &layout(), &DragState::new(), false);
        assert_eq!(view.title_text, NO_TITLE);
        assert_eq!(view.content_text.as_deref(), Some(NO_CONTENT));
        assert_eq!(view.glyph, Glyph::HalfCircle);
    }

    #[test]
    fn given_leaf_when_building_then_two_half_width_controls() {
        let view = NodeView::build(&Node::new(1, "t", "c"), &layout(), &DragState::new(), false);
        assert_eq!(view.controls, vec![Control::AddChild, Control::Edit { leaf: true }]);
        assert_eq!(view.control_width, Some(ControlWidth::Half));
    }

    #[test]
    fn given_inner_node_when_building_then_expand_control_and_third_width() {
        let node = Node::new(1, "t", "c").with_child(Node::new(2, "t", "c"));
        let view = NodeView::build(&node, &layout(), &DragState::new(), false);
        assert_eq!(
            view.controls,
            vec![Control::AddChild, Control::Edit { leaf: false }, Control::ExpandCollapse]
        );
        assert_eq!(view.control_width, Some(ControlWidth::Third));
    }

    #[test]
    fn given_choice_node_when_building_then_half_height_and_shifted() {
        let node = Node::choice(1).at(10.0, 20.0);
        let view = NodeView::build(&node, &layout(), &DragState::new(), false);
        assert_eq!(view.height, 50.0);
        assert_eq!(view.translate, (10.0, 45.0));
        assert_eq!(view.title_text, CHOICE_LABEL);
        assert!(view.controls.is_empty());
        assert_eq!(view.glyph, Glyph::FullCircle);
    }

    #[test]
    fn given_dragged_and_centered_node_when_building_then_faded_with_transition() {
        let node = Node::new(1, "t", "c");
        let view = NodeView::build(&node, &layout(), &DragState::dragging(node.id), true);
        assert_eq!(view.opacity, 0.5);
        assert_eq!(view.transition.as_deref(), Some("all 500ms ease 0s"));
    }

    #[test]
    fn given_deep_chain_when_building_root_view_then_no_stack_overflow() {
        let node = deep_chain(200_000);
        let view = NodeView::build(&node, &layout(), &DragState::new(), false);
        assert_eq!(view.control_width, Some(ControlWidth::Third));
        assert_eq!(view.glyph, Glyph::FullCircle);
        dismantle(node);
    }

    #[test]
    fn given_hidden_node_when_building_then_not_visible() {
        let mut node = Node::new(1, "t", "c");
        node.show = false;
        let view = NodeView::build(&node, &layout(), &DragState::new(), false);
        assert!(!view.visible);
        assert_eq!(view.opacity, 1.0);
        assert_eq!(view.transition, None);
    }
}
