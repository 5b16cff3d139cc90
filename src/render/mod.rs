//! Contract to the external force directed renderer.
//!
//! The renderer owns node positions, layout, pan and zoom. The core only
//! registers nodes and edges, reads live screen positions back, and pushes
//! partial style updates. An auxiliary lasso layer is mounted as a sibling of
//! the render surface, so polyline drawing also goes through this trait.

pub mod headless;

pub use headless::HeadlessRenderer;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::graph::{NodeStyle, TripleGraph};

/// Which user interactions the renderer currently accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionFlags {
    pub pan: bool,
    pub zoom: bool,
    pub drag_nodes: bool,
}

impl InteractionFlags {
    /// Everything off, the lasso mode configuration.
    pub fn none() -> Self {
        Self {
            pan: false,
            zoom: false,
            drag_nodes: false,
        }
    }
}

impl Default for InteractionFlags {
    fn default() -> Self {
        Self {
            pan: true,
            zoom: true,
            drag_nodes: true,
        }
    }
}

/// A partial style update. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylePatch {
    pub fill_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
}

impl StylePatch {
    pub fn apply_to(&self, style: &mut NodeStyle) {
        if let Some(fill) = &self.fill_color {
            style.fill_color = fill.clone();
        }
        if let Some(border) = &self.border_color {
            style.border_color = border.clone();
        }
        if let Some(width) = self.border_width {
            style.border_width = width;
        }
    }
}

/// Bounding rectangle of the render surface in client coordinates.
///
/// Overlay-local coordinates are client coordinates with `origin` subtracted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl SurfaceRect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Translates a client coordinate into overlay-local space.
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.origin
    }
}

/// The renderer surface the selection overlay drives.
///
/// Implementations are expected to be duck-simple: every method either
/// records state or answers from live layout. The core never computes node
/// positions itself.
pub trait RenderAdapter {
    /// Registers a node with its initial style.
    fn add_node(&mut self, id: &str, style: &NodeStyle);

    /// Registers a display edge. Direction only affects draw order.
    fn add_edge(&mut self, source: &str, target: &str, label: &str);

    /// Live screen position of a node, reflecting current layout, pan and
    /// zoom. `None` when the id is unknown.
    fn screen_position(&self, id: &str) -> Option<Vec2>;

    /// Applies a partial style update. Returns `false` when the id is
    /// unknown; callers treat that as a logged no-op.
    fn update_node_style(&mut self, id: &str, patch: &StylePatch) -> bool;

    /// Subscribes to the layout convergence event.
    fn on_layout_stable(&mut self, callback: Box<dyn FnMut()>);

    /// Toggles pan/zoom/drag handling and returns the previous flags so a
    /// caller can restore them exactly.
    fn set_interaction(&mut self, flags: InteractionFlags) -> InteractionFlags;

    /// Bounding rectangle of the render surface in client coordinates.
    fn surface_rect(&self) -> SurfaceRect;

    /// Redraws the lasso polyline on the sibling overlay layer. While
    /// drawing the polyline is open; on finalize it is drawn closed.
    fn draw_lasso(&mut self, points: &[Vec2], closed: bool);

    /// Clears the overlay layer.
    fn clear_lasso(&mut self);
}

/// Registers every node and edge of the graph with the renderer, nodes in
/// insertion order.
pub fn register_graph<R: RenderAdapter>(graph: &TripleGraph, renderer: &mut R) {
    for id in graph.node_ids() {
        // style() is always present for ids the graph itself yields
        if let Some(style) = graph.style(id) {
            renderer.add_node(id, style);
        }
    }
    for (source, label, target) in graph.edges() {
        renderer.add_edge(source, target, label);
    }
}
