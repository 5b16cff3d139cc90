use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lassograph::prelude::*;
use petgraph::Directed;

/// Turns a generated graph into a triple list the builder accepts.
fn generated_triples(nodes: usize) -> Vec<Triple> {
    let mut rng = rand::thread_rng();
    let graph: petgraph::Graph<(), (), Directed> =
        petgraph_gen::barabasi_albert_graph(&mut rng, nodes, 2, None);
    graph
        .edge_indices()
        .filter_map(|e| graph.edge_endpoints(e))
        .map(|(a, b)| {
            Triple::new(
                format!("n{}", a.index()),
                "links",
                format!("n{}", b.index()),
            )
        })
        .collect()
}

fn bench_partitioning(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitioning");
    for nodes in [50, 100] {
        let triples = generated_triples(nodes);
        group.bench_with_input(
            BenchmarkId::new("divisive", nodes),
            &triples,
            |b, triples| {
                b.iter(|| {
                    let mut graph = TripleGraph::from_triples(triples.clone());
                    color_communities(&mut graph, Strategy::Divisive, 0.3)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("agglomerative", nodes),
            &triples,
            |b, triples| {
                b.iter(|| {
                    let mut graph = TripleGraph::from_triples(triples.clone());
                    color_communities(&mut graph, Strategy::Agglomerative, 0.3)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_partitioning);
criterion_main!(benches);
