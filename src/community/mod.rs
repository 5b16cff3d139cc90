//! Community partitioning and stable color assignment.
//!
//! Two mutually exclusive strategies produce a partition of the node set;
//! the partition itself is transient and only its effect, the per community
//! fill color written onto every member node, is retained.

mod agglomerative;
mod divisive;
mod palette;

use log::{debug, info};

use crate::color::Rgb;
use crate::graph::{NodeStyle, TripleGraph};

/// Which partitioning heuristic to run. Strategies are interchangeable but
/// mutually exclusive per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Edge betweenness removal, stopping at the first split level.
    /// Deterministic: identical graphs always get identical colors.
    #[default]
    Divisive,
    /// Greedy local modularity maximization. The palette order is shuffled
    /// on this path.
    Agglomerative,
}

/// Partitions the graph and writes one fill color per community onto every
/// member node, with the border derived by darkening the fill.
///
/// Returns the partition as lists of node ids. Isolated nodes form singleton
/// communities and receive their own color. An empty graph yields zero
/// communities and no error.
pub fn color_communities(
    graph: &mut TripleGraph,
    strategy: Strategy,
    darken_amount: f32,
) -> Vec<Vec<String>> {
    let communities = match strategy {
        Strategy::Divisive => {
            let mut groups: Vec<Vec<String>> = divisive::partition(graph.inner())
                .into_iter()
                .map(|members| {
                    let mut ids: Vec<String> = members
                        .into_iter()
                        .map(|index| graph.id_of(index).to_string())
                        .collect();
                    ids.sort();
                    ids
                })
                .collect();
            // deterministic community order: sorted member lists
            groups.sort();
            groups
        }
        Strategy::Agglomerative => agglomerative::partition(graph.inner())
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .map(|index| graph.id_of(index).to_string())
                    .collect()
            })
            .collect(),
    };

    let mut colors = palette::evenly_spaced(communities.len());
    if strategy == Strategy::Agglomerative {
        palette::shuffle(&mut colors);
    }

    for (community, fill) in communities.iter().zip(&colors) {
        let border = match Rgb::parse(fill) {
            Ok(rgb) => rgb.darken(darken_amount).to_hex(),
            Err(_) => crate::color::FALLBACK_BORDER.to_hex(),
        };
        for id in community {
            if let Some(index) = graph.index_of(id) {
                graph.set_style(
                    index,
                    NodeStyle {
                        fill_color: fill.clone(),
                        border_color: border.clone(),
                        border_width: 1,
                    },
                );
            }
        }
        debug!("community of {} nodes colored {}", community.len(), fill);
    }

    info!(
        "{:?} partitioning produced {} communities",
        strategy,
        communities.len()
    );
    communities
}
