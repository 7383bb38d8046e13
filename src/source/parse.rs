use anyhow::{Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::error::GraphError;
use crate::graph::{Node, RawEdge};

#[derive(Debug, Deserialize)]
struct WireDocument {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    nodes: Option<Vec<WireNode>>,
    #[serde(default)]
    edges: Option<Vec<WireEdge>>,
}

#[derive(Debug, Deserialize)]
struct WireNode {
    id: String,
    #[serde(rename = "type", default)]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct WireEdge {
    from: String,
    to: String,
    #[serde(rename = "type", default)]
    kind: String,
}

pub(super) fn parse_graph_document(raw: &str) -> Result<(Vec<Node>, Vec<RawEdge>)> {
    let document: WireDocument =
        serde_json::from_str(raw).map_err(|error| anyhow!("invalid graph JSON: {error}"))?;
    if let Some(status) = &document.status
        && let Some(messages) = status.as_array()
        && !messages.is_empty()
    {
        let joined = messages
            .iter()
            .map(|message| message.as_str().unwrap_or("unknown error").to_string())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("graph endpoint reported failure: {joined}");
    }

    let nodes = document
        .nodes
        .ok_or(GraphError::MissingSection { section: "nodes" })?;
    let edges = document
        .edges
        .ok_or(GraphError::MissingSection { section: "edges" })?;

    let nodes = nodes
        .into_iter()
        .map(|node| Node::new(node.id, node.kind))
        .collect::<Vec<_>>();
    let edges = edges
        .into_iter()
        .map(|edge| RawEdge {
            from: edge.from,
            to: edge.to,
            kind: edge.kind,
        })
        .collect::<Vec<_>>();

    Ok((nodes, edges))
}
