mod fetch;
mod parse;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

use crate::graph::GraphModel;

pub use fetch::fetch_document;

/// Issues one ticket per graph-load request. Issuing a new ticket
/// invalidates every earlier one, so a response that raced a newer request
/// can be recognized and dropped instead of overwriting the fresh snapshot.
#[derive(Clone, Default)]
pub struct LoadCounter {
    current: Arc<AtomicU64>,
}

impl LoadCounter {
    pub fn issue(&self) -> LoadTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            generation,
            current: Arc::clone(&self.current),
        }
    }
}

#[derive(Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// Fetches, validates, and normalizes one graph snapshot.
pub fn load_graph(source: &str) -> Result<GraphModel> {
    let raw = fetch_document(source)?;
    let (nodes, edges) = parse::parse_graph_document(&raw)
        .with_context(|| format!("failed to parse graph document from {source}"))?;
    let model = GraphModel::build(nodes, &edges)?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuing_a_new_ticket_invalidates_the_old_one() {
        let counter = LoadCounter::default();
        let first = counter.issue();
        assert!(first.is_current());

        let second = counter.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn ticket_clones_share_the_generation() {
        let counter = LoadCounter::default();
        let ticket = counter.issue();
        let carried_into_worker = ticket.clone();
        assert!(carried_into_worker.is_current());

        counter.issue();
        assert!(!carried_into_worker.is_current());
    }
}
