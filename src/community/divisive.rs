//! Girvan-Newman style divisive partitioning.
//!
//! Removes the highest edge-betweenness edge until the graph splits into more
//! connected components than it started with. The partition at that first
//! split is final; no further refinement happens.

use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

/// Partitions node indices into communities via the first divisive split.
///
/// Ties on betweenness break towards the lowest current edge index, which
/// keeps repeated runs on the same graph identical. When no edge can be
/// removed (edgeless graph, or removal exhausts the graph before a split)
/// the current connected components are returned as the partition.
pub fn partition<N, E>(graph: &UnGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    if graph.node_count() == 0 {
        return Vec::new();
    }

    let mut work: UnGraph<(), ()> = graph.map(|_, _| (), |_, _| ());
    let base = component_count(&work);

    while work.edge_count() > 0 {
        let betweenness = edge_betweenness(&work);
        let busiest = (0..work.edge_count())
            .map(EdgeIndex::new)
            .max_by(|&a, &b| {
                betweenness[a.index()]
                    .partial_cmp(&betweenness[b.index()])
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // prefer the lower index on ties
                    .then(b.index().cmp(&a.index()))
            })
            .expect("non-empty edge set");
        let _ = work.remove_edge(busiest);
        if component_count(&work) > base {
            break;
        }
    }

    components(&work)
}

fn union_find<N, E>(graph: &UnGraph<N, E>) -> UnionFind<usize> {
    let mut sets = UnionFind::new(graph.node_count());
    for edge in graph.edge_references() {
        sets.union(edge.source().index(), edge.target().index());
    }
    sets
}

fn component_count<N, E>(graph: &UnGraph<N, E>) -> usize {
    let sets = union_find(graph);
    let mut roots: Vec<usize> = (0..graph.node_count()).map(|i| sets.find(i)).collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Groups nodes by connected component, ordered by lowest member index.
fn components<N, E>(graph: &UnGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    let sets = union_find(graph);
    let mut groups: Vec<(usize, Vec<NodeIndex>)> = Vec::new();
    for index in graph.node_indices() {
        let root = sets.find(index.index());
        match groups.iter_mut().find(|(r, _)| *r == root) {
            Some((_, members)) => members.push(index),
            None => groups.push((root, vec![index])),
        }
    }
    groups.into_iter().map(|(_, members)| members).collect()
}

/// Unweighted edge betweenness via Brandes' BFS accumulation.
///
/// Returns one score per edge index. Parallel edges between a pair share the
/// credit of the first edge found, which is enough for ranking: removing one
/// of them cannot split the graph anyway.
fn edge_betweenness(graph: &UnGraph<(), ()>) -> Vec<f64> {
    let n = graph.node_count();
    let mut scores = vec![0.0; graph.edge_count()];

    for source in graph.node_indices() {
        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![usize::MAX; n];
        let mut preds: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
        let mut order: Vec<NodeIndex> = Vec::with_capacity(n);
        let mut queue = VecDeque::new();

        sigma[source.index()] = 1.0;
        dist[source.index()] = 0;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for w in graph.neighbors(v) {
                if dist[w.index()] == usize::MAX {
                    dist[w.index()] = dist[v.index()] + 1;
                    queue.push_back(w);
                }
                if dist[w.index()] == dist[v.index()] + 1 {
                    sigma[w.index()] += sigma[v.index()];
                    preds[w.index()].push(v);
                }
            }
        }

        let mut delta = vec![0.0_f64; n];
        for &w in order.iter().rev() {
            for &v in &preds[w.index()] {
                let credit = sigma[v.index()] / sigma[w.index()] * (1.0 + delta[w.index()]);
                if let Some(edge) = graph.find_edge(v, w) {
                    scores[edge.index()] += credit;
                }
                delta[v.index()] += credit;
            }
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from_edges(nodes: usize, edges: &[(usize, usize)]) -> UnGraph<(), ()> {
        let mut graph = UnGraph::new_undirected();
        let indices: Vec<NodeIndex> = (0..nodes).map(|_| graph.add_node(())).collect();
        for &(a, b) in edges {
            graph.add_edge(indices[a], indices[b], ());
        }
        graph
    }

    fn as_sorted_sets(mut partition: Vec<Vec<NodeIndex>>) -> Vec<Vec<usize>> {
        let mut sets: Vec<Vec<usize>> = partition
            .drain(..)
            .map(|members| {
                let mut ids: Vec<usize> = members.iter().map(|i| i.index()).collect();
                ids.sort_unstable();
                ids
            })
            .collect();
        sets.sort();
        sets
    }

    #[test]
    fn empty_graph_has_no_communities() {
        let graph: UnGraph<(), ()> = UnGraph::new_undirected();
        assert!(partition(&graph).is_empty());
    }

    #[test]
    fn edgeless_graph_is_all_singletons() {
        let graph = graph_from_edges(3, &[]);
        assert_eq!(
            as_sorted_sets(partition(&graph)),
            vec![vec![0], vec![1], vec![2]]
        );
    }

    #[test]
    fn barbell_splits_at_the_bridge() {
        // two triangles joined by one bridge; the bridge has the highest
        // betweenness and is removed first
        let graph = graph_from_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
        );
        assert_eq!(
            as_sorted_sets(partition(&graph)),
            vec![vec![0, 1, 2], vec![3, 4, 5]]
        );
    }

    #[test]
    fn first_split_only() {
        // a path of four nodes splits into exactly two halves, never four
        let graph = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let sets = as_sorted_sets(partition(&graph));
        assert_eq!(sets.len(), 2);
        assert_eq!(sets, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let graph = graph_from_edges(
            5,
            &[(0, 1), (1, 2), (2, 0), (3, 4)],
        );
        let first = as_sorted_sets(partition(&graph));
        let second = as_sorted_sets(partition(&graph));
        assert_eq!(first, second);
    }
}
