//! Builds a deduplicated display graph from (subject, relation, object) triples.

use std::collections::HashMap;

use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// One (subject, relation, object) record defining a labeled edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }
}

/// Visual attributes of a node as handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Hex `#rrggbb` fill.
    pub fill_color: String,
    /// Hex `#rrggbb` border.
    pub border_color: String,
    pub border_width: u32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fill_color: crate::color::FALLBACK_FILL.to_hex(),
            border_color: crate::color::FALLBACK_BORDER.to_hex(),
            border_width: 1,
        }
    }
}

/// Per node payload stored in the petgraph backing store.
#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub(crate) id: String,
    pub(crate) style: NodeStyle,
}

/// An undirected display graph with unique string node ids and labeled edges.
///
/// Node identity is the trimmed endpoint string. Re-encountering an id never
/// creates a duplicate node, while repeated endpoint pairs with different
/// relation labels stay distinct parallel edges.
pub struct TripleGraph {
    graph: UnGraph<NodeData, String>,
    indices: HashMap<String, NodeIndex>,
    skipped: usize,
}

impl TripleGraph {
    /// Builds a graph from an ordered triple sequence.
    ///
    /// All three fields are trimmed first. Rows where any field trims to the
    /// empty string are dropped and counted, never fatal. An empty input
    /// yields an empty graph.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut builder = Self {
            graph: UnGraph::new_undirected(),
            indices: HashMap::new(),
            skipped: 0,
        };
        for triple in triples {
            let subject = triple.subject.trim();
            let relation = triple.relation.trim();
            let object = triple.object.trim();
            if subject.is_empty() || relation.is_empty() || object.is_empty() {
                builder.skipped += 1;
                debug!("dropping triple with unresolvable field: {:?}", triple);
                continue;
            }
            let a = builder.intern(subject);
            let b = builder.intern(object);
            builder.graph.add_edge(a, b, relation.to_string());
        }
        builder
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(&index) = self.indices.get(id) {
            return index;
        }
        let index = self.graph.add_node(NodeData {
            id: id.to_string(),
            style: NodeStyle::default(),
        });
        self.indices.insert(id.to_string(), index);
        index
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of input rows dropped for having an unresolvable field.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|data| data.id.as_str())
    }

    /// Edges as (source id, label, target id), drawn in declared order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id.as_str(),
                edge.weight().as_str(),
                self.graph[edge.target()].id.as_str(),
            )
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.indices.contains_key(id)
    }

    pub fn style(&self, id: &str) -> Option<&NodeStyle> {
        self.indices.get(id).map(|&index| &self.graph[index].style)
    }

    pub(crate) fn set_style(&mut self, index: NodeIndex, style: NodeStyle) {
        self.graph[index].style = style;
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.indices.get(id).copied()
    }

    pub(crate) fn id_of(&self, index: NodeIndex) -> &str {
        &self.graph[index].id
    }

    pub(crate) fn inner(&self) -> &UnGraph<NodeData, String> {
        &self.graph
    }

    /// The full id to style table, in insertion order.
    pub fn style_table(&self) -> Vec<(String, NodeStyle)> {
        self.graph
            .node_weights()
            .map(|data| (data.id.clone(), data.style.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(rows: &[(&str, &str, &str)]) -> Vec<Triple> {
        rows.iter().map(|&(s, r, o)| Triple::new(s, r, o)).collect()
    }

    #[test]
    fn endpoints_are_deduplicated() {
        let graph = TripleGraph::from_triples(triples(&[
            ("A", "likes", "B"),
            ("B", "likes", "C"),
            ("  A ", "knows", "C"),
        ]));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.skipped(), 0);
    }

    #[test]
    fn resupplying_a_pair_never_adds_nodes() {
        let mut rows = triples(&[("A", "likes", "B")]);
        rows.push(Triple::new("A", "dislikes", "B"));
        let graph = TripleGraph::from_triples(rows);
        assert_eq!(graph.node_count(), 2);
        // different labels stay distinct parallel edges
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn unresolvable_rows_are_skipped_and_counted() {
        let graph = TripleGraph::from_triples(triples(&[
            ("A", "likes", "B"),
            ("", "likes", "B"),
            ("A", "   ", "B"),
            ("A", "likes", ""),
        ]));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.skipped(), 3);
    }

    #[test]
    fn empty_input_is_an_empty_graph() {
        let graph = TripleGraph::from_triples(Vec::new());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.skipped(), 0);
    }

    #[test]
    fn node_ids_keep_insertion_order() {
        let graph = TripleGraph::from_triples(triples(&[
            ("B", "likes", "A"),
            ("A", "likes", "C"),
        ]));
        let ids: Vec<_> = graph.node_ids().collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }
}
