use serde::{Deserialize, Serialize};

use crate::domain::encode::EncodedSample;
use crate::domain::error::TreeError;
use crate::domain::kind::AstKind;
use crate::domain::tree::{AstNode, NodeId, SyntaxTree};

/// Wire form of a syntax tree: a flat node list, node 0 being the root,
/// with children referenced by list position. This is how external parser
/// adapters hand trees over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeDto {
    pub nodes: Vec<NodeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: String,
    #[serde(default)]
    pub data: String,
    /// Normalized kind tag, e.g. "VAR_DECL".
    pub kind: String,
    #[serde(default)]
    pub children: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_definition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TreeDto {
    /// Build the domain tree, mapping kind tags once at ingestion.
    pub fn into_tree(self) -> Result<SyntaxTree, TreeError> {
        let mut tree = SyntaxTree::new();
        let mut ids = Vec::with_capacity(self.nodes.len());

        for dto in &self.nodes {
            let mut node = AstNode::new(dto.id.clone(), dto.data.clone(), AstKind::from_tag(&dto.kind));
            node.is_definition = dto.is_definition;
            node.source = dto.source.clone();
            node.label = dto.label.clone();
            ids.push(tree.add_node(node));
        }

        for (index, dto) in self.nodes.iter().enumerate() {
            for &child in &dto.children {
                let child_id = *ids.get(child).ok_or(TreeError::InvalidChild(NodeId(child)))?;
                tree.attach(ids[index], child_id)?;
            }
        }

        Ok(tree)
    }

    /// Flatten a domain tree back to the wire form, arena order preserved.
    pub fn from_tree(tree: &SyntaxTree) -> TreeDto {
        let nodes = (0..tree.len())
            .map(|index| {
                let node = tree.node(NodeId(index));
                NodeDto {
                    id: node.id.clone(),
                    data: node.data.clone(),
                    kind: node.kind.as_str().to_string(),
                    children: node.children().iter().map(|c| c.0).collect(),
                    is_definition: node.is_definition,
                    source: node.source.clone(),
                    label: node.label.clone(),
                }
            })
            .collect();
        TreeDto { nodes }
    }
}

/// Wire form of an encoded sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDto {
    pub vectors: Vec<Vec<f32>>,
    pub real_length: usize,
}

impl From<EncodedSample> for SampleDto {
    fn from(sample: EncodedSample) -> Self {
        let vectors = sample
            .vectors
            .outer_iter()
            .map(|row| row.to_vec())
            .collect();
        Self {
            vectors,
            real_length: sample.real_length,
        }
    }
}
