//! Greedy local modularity partitioning.
//!
//! Every node starts in its own community; nodes then move to whichever
//! neighboring community gives the best positive modularity gain until a full
//! pass changes nothing. This is the classic one level agglomerative
//! heuristic, not a guaranteed optimum.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

/// Passes over the node set are capped so a pathological oscillation cannot
/// spin forever.
const MAX_PASSES: usize = 64;

/// Partitions node indices by greedy modularity maximization.
///
/// Communities are returned grouped by shared community id, ordered by the
/// first node (in index order) carrying that id. Isolated nodes keep their
/// own singleton community.
pub fn partition<N, E>(graph: &UnGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let m = graph.edge_count() as f64;
    let degree: Vec<f64> = graph
        .node_indices()
        .map(|v| graph.edges(v).count() as f64)
        .collect();

    // community id per node, seeded with the node's own index
    let mut community: Vec<usize> = (0..n).collect();

    if m > 0.0 {
        let mut community_degree = degree.clone();

        for _ in 0..MAX_PASSES {
            let mut changed = false;

            for v in graph.node_indices() {
                let vi = v.index();
                let k_v = degree[vi];
                if k_v == 0.0 {
                    continue;
                }

                // edge counts from v into each adjacent community
                let mut links: HashMap<usize, f64> = HashMap::new();
                for w in graph.neighbors(v) {
                    if w != v {
                        *links.entry(community[w.index()]).or_insert(0.0) += 1.0;
                    }
                }

                let current = community[vi];
                community_degree[current] -= k_v;

                let gain = |target: usize| {
                    let k_in = links.get(&target).copied().unwrap_or(0.0);
                    k_in / m - community_degree[target] * k_v / (2.0 * m * m)
                };

                // candidates sorted by id so equal gains resolve the same way
                // on every run
                let mut candidates: Vec<usize> = links.keys().copied().collect();
                candidates.sort_unstable();

                let mut best = current;
                let mut best_gain = gain(current);
                for target in candidates {
                    let g = gain(target);
                    if g > best_gain {
                        best = target;
                        best_gain = g;
                    }
                }

                community_degree[best] += k_v;
                if best != current {
                    community[vi] = best;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }
    }

    group_by_community(graph, &community)
}

/// Groups by community id, ordered by first encounter over node index order.
fn group_by_community<N, E>(
    graph: &UnGraph<N, E>,
    community: &[usize],
) -> Vec<Vec<NodeIndex>> {
    let mut order: Vec<usize> = Vec::new();
    let mut groups: HashMap<usize, Vec<NodeIndex>> = HashMap::new();
    for v in graph.node_indices() {
        let id = community[v.index()];
        let members = groups.entry(id).or_insert_with(|| {
            order.push(id);
            Vec::new()
        });
        members.push(v);
    }
    order
        .into_iter()
        .filter_map(|id| groups.remove(&id))
        .collect()
}
