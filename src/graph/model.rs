use crate::error::{GraphError, Result};

#[derive(Clone, Debug)]
pub struct Node {
    pub id: String,
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub scaled_x: f32,
    pub scaled_y: f32,
    pub fixed: bool,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            x: 0.0,
            y: 0.0,
            scaled_x: 0.0,
            scaled_y: 0.0,
            fixed: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RawEdge {
    pub from: String,
    pub to: String,
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub kind: String,
}

#[derive(Clone, Debug)]
pub struct GraphModel {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl GraphModel {
    /// Node order defines the index space the links refer into. Endpoints
    /// resolve by first matching id, so duplicate ids always pick the lower
    /// index.
    pub fn build(nodes: Vec<Node>, edges: &[RawEdge]) -> Result<Self> {
        let mut links = Vec::with_capacity(edges.len());

        for (edge_index, edge) in edges.iter().enumerate() {
            let source = resolve_endpoint(&nodes, &edge.from, edge_index)?;
            let target = resolve_endpoint(&nodes, &edge.to, edge_index)?;
            links.push(Link {
                source,
                target,
                kind: edge.kind.clone(),
            });
        }

        Ok(Self { nodes, links })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

fn resolve_endpoint(nodes: &[Node], id: &str, edge_index: usize) -> Result<usize> {
    nodes
        .iter()
        .position(|node| node.id == id)
        .ok_or_else(|| GraphError::UnresolvedEndpoint {
            edge: edge_index,
            id: id.to_string(),
        })
}
