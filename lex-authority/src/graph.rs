use std::collections::BTreeMap;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use lex_core::errors::LexResult;
use lex_core::traits::GraphStore;

/// Consistent in-memory view of the citation network at pass start.
///
/// Nodes are inserted in sorted case-id order and edges in sorted
/// (citing, cited, created_on) order, so node/edge indices are stable
/// for the same stored graph.
pub struct CitationGraph {
    graph: DiGraph<String, f64>,
    index: BTreeMap<String, NodeIndex>,
}

impl CitationGraph {
    /// Load every case and edge from the store. The store is read once,
    /// up front; later mutations do not affect this view.
    pub fn load(store: &dyn GraphStore) -> LexResult<Self> {
        let case_ids = store.all_case_ids()?;

        let mut graph = DiGraph::with_capacity(case_ids.len(), 0);
        let mut index = BTreeMap::new();
        for id in &case_ids {
            let node = graph.add_node(id.clone());
            index.insert(id.clone(), node);
        }

        let mut edges = 0usize;
        for id in &case_ids {
            let citing = index[id];
            for edge in store.get_outgoing_edges(id)? {
                // The store enforces endpoint integrity, but an edge to a
                // case deleted mid-load would otherwise panic here.
                if let Some(&cited) = index.get(&edge.cited_id) {
                    graph.add_edge(citing, cited, edge.weight);
                    edges += 1;
                }
            }
        }

        debug!(nodes = case_ids.len(), edges, "citation graph loaded");
        Ok(Self { graph, index })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Case ids in node-index order (sorted ascending).
    pub fn case_ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, f64> {
        &self.graph
    }
}
