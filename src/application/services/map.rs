//! Map snapshot service
//!
//! Loads read-only map snapshots and evaluates completeness and views on them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{evaluate, DragState, Glyph, LayoutConfig, MindMap, Node, NodeId, NodeView};
use crate::infrastructure::traits::FileSystem;

/// Serialization format of a map snapshot, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> ApplicationResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(ApplicationError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse(self, content: &str) -> Result<Node, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Completeness of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStatus {
    pub id: NodeId,
    pub title: String,
    pub complete: bool,
    pub descendants_complete: bool,
    pub glyph: Glyph,
}

/// Completeness of every node in a map, in pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub nodes: Vec<NodeStatus>,
}

impl CompletenessReport {
    pub fn total(&self) -> usize {
        self.nodes.len()
    }

    pub fn complete_count(&self) -> usize {
        self.nodes.iter().filter(|s| s.complete).count()
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &NodeStatus> {
        self.nodes.iter().filter(|s| !s.complete)
    }

    pub fn root(&self) -> Option<&NodeStatus> {
        self.nodes.first()
    }

    pub fn status(&self, id: NodeId) -> Option<&NodeStatus> {
        self.nodes.iter().find(|s| s.id == id)
    }
}

/// Service for loading map snapshots and deriving completeness and views.
pub struct MapService {
    fs: Arc<dyn FileSystem>,
    layout: LayoutConfig,
}

impl MapService {
    pub fn new(fs: Arc<dyn FileSystem>, layout: LayoutConfig) -> Self {
        Self { fs, layout }
    }

    /// Load a snapshot from `path` and validate its ids.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<MindMap> {
        let format = SnapshotFormat::from_path(path)?;
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("map snapshot not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read map snapshot", path)?;
        let map = Self::parse(&content, format, path)?;
        debug!("load: {} nodes from {}", map.len(), path.display());
        Ok(map)
    }

    /// Parse snapshot `content`; `origin` is only used in error messages.
    pub fn parse(content: &str, format: SnapshotFormat, origin: &Path) -> ApplicationResult<MindMap> {
        let root = format.parse(content).map_err(|message| ApplicationError::Parse {
            path: PathBuf::from(origin),
            message,
        })?;
        Ok(MindMap::new(root)?)
    }

    #[instrument(level = "debug", skip_all)]
    pub fn report(&self, map: &MindMap) -> CompletenessReport {
        let nodes = evaluate(map.root())
            .into_iter()
            .map(|e| NodeStatus {
                id: e.node.id,
                title: e.node.title.clone(),
                complete: e.complete,
                descendants_complete: e.descendants_complete,
                glyph: e.glyph,
            })
            .collect();
        CompletenessReport { nodes }
    }

    /// View model of node `id`.
    pub fn view(
        &self,
        map: &MindMap,
        id: NodeId,
        drag: &DragState,
        centered: bool,
    ) -> ApplicationResult<NodeView> {
        let node = map.get(id)?;
        Ok(NodeView::build(node, &self.layout, drag, centered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::completeness_glyph;

    #[test]
    fn given_json_extension_when_detecting_then_json() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("map.JSON")).unwrap(),
            SnapshotFormat::Json
        );
    }

    #[test]
    fn given_unknown_extension_when_detecting_then_error() {
        assert!(matches!(
            SnapshotFormat::from_path(Path::new("map.yaml")),
            Err(ApplicationError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn given_toml_snapshot_when_parsing_then_tree() {
        let content = r#"
id = 1
title = "root"
content = "body"

[[children]]
id = 2
title = "child"
content = ""
"#;
        let map = MapService::parse(content, SnapshotFormat::Toml, Path::new("map.toml")).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(completeness_glyph(map.root()), Glyph::HalfCircle);
    }

    #[test]
    fn given_invalid_json_when_parsing_then_parse_error() {
        let result = MapService::parse("{", SnapshotFormat::Json, Path::new("map.json"));
        assert!(matches!(result, Err(ApplicationError::Parse { .. })));
    }
}
