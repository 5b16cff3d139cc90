//! Ties the pipeline together: triples in, interactive view out.

use log::info;

use crate::community::{color_communities, Strategy};
use crate::console::QueryConsole;
use crate::graph::{NodeStyle, Triple, TripleGraph};
use crate::overlay::{PointerEvent, QueryOutcome, SelectionConfig, SelectionController};
use crate::render::{register_graph, RenderAdapter};

/// Configures and builds a [`GraphView`].
///
/// ```
/// use lassograph::prelude::*;
///
/// let renderer = HeadlessRenderer::new();
/// let view = GraphViewBuilder::new()
///     .community_strategy(Strategy::Divisive)
///     .darken_amount(0.25)
///     .build(vec![Triple::new("A", "likes", "B")], renderer);
/// assert_eq!(view.graph().node_count(), 2);
/// ```
pub struct GraphViewBuilder {
    strategy: Strategy,
    selection: SelectionConfig,
}

impl GraphViewBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            selection: SelectionConfig::default(),
        }
    }

    pub fn community_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn emphasis_border_color(mut self, color: impl Into<String>) -> Self {
        self.selection.emphasis_border_color = color.into();
        self
    }

    pub fn highlight_color(mut self, color: impl Into<String>) -> Self {
        self.selection.highlight_color = color.into();
        self
    }

    pub fn darken_amount(mut self, amount: f32) -> Self {
        self.selection.darken_amount = amount;
        self
    }

    /// Builds the graph, partitions and colors it, registers everything with
    /// the renderer and wires the selection overlay and query console.
    pub fn build<I, R>(self, triples: I, mut renderer: R) -> GraphView<R>
    where
        I: IntoIterator<Item = Triple>,
        R: RenderAdapter,
    {
        let mut graph = TripleGraph::from_triples(triples);
        if graph.skipped() > 0 {
            info!("{} malformed triples skipped", graph.skipped());
        }
        let communities = color_communities(&mut graph, self.strategy, self.selection.darken_amount);
        info!(
            "built graph with {} nodes, {} edges, {} communities",
            graph.node_count(),
            graph.edge_count(),
            communities.len()
        );

        register_graph(&graph, &mut renderer);
        renderer.on_layout_stable(Box::new(|| info!("force layout stabilized")));

        let controller = SelectionController::new(renderer, &graph, self.selection);
        GraphView {
            graph,
            controller,
            console: QueryConsole::new(),
        }
    }
}

/// The assembled interactive view.
///
/// Owns the graph, the selection controller (which owns the renderer) and
/// the query console. Everything runs on the caller's thread inside event
/// handler calls.
pub struct GraphView<R: RenderAdapter> {
    graph: TripleGraph,
    controller: SelectionController<R>,
    console: QueryConsole,
}

impl<R: RenderAdapter> GraphView<R> {
    pub fn graph(&self) -> &TripleGraph {
        &self.graph
    }

    pub fn controller(&self) -> &SelectionController<R> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController<R> {
        &mut self.controller
    }

    pub fn renderer(&self) -> &R {
        self.controller.renderer()
    }

    /// Enters or leaves lasso mode.
    pub fn set_lasso_enabled(&mut self, enabled: bool) {
        self.controller.set_lasso_enabled(enabled);
    }

    /// Forwards one pointer event to the selection overlay.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.controller.handle_pointer(event);
    }

    /// Submits query text through the console.
    pub fn submit_query(&mut self, query: &str) -> QueryOutcome {
        self.console.submit(&mut self.controller, query)
    }

    /// Latest console status line.
    pub fn status(&self) -> Option<&str> {
        self.console.status()
    }

    /// Ids selected by the last finalized lasso, in selection order.
    pub fn selection(&self) -> &[String] {
        self.controller.selected()
    }

    /// Ids highlighted by the last query submission.
    pub fn highlighted(&self) -> &[String] {
        self.controller.highlighted()
    }

    /// The id to style table as assigned at build time, in insertion order.
    /// Serializable by the caller.
    pub fn node_styles(&self) -> Vec<(String, NodeStyle)> {
        self.graph.style_table()
    }
}
