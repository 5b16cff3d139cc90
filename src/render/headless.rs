//! An in-memory render adapter for tests and headless runs.

use std::collections::HashMap;

use glam::Vec2;

use super::{InteractionFlags, RenderAdapter, StylePatch, SurfaceRect};
use crate::graph::NodeStyle;

/// A renderer double that records registrations and style updates and
/// answers position queries from synthetic coordinates set by the caller.
///
/// Layout convergence is fired manually with [`HeadlessRenderer::settle`].
pub struct HeadlessRenderer {
    order: Vec<String>,
    styles: HashMap<String, NodeStyle>,
    positions: HashMap<String, Vec2>,
    edges: Vec<(String, String, String)>,
    rect: SurfaceRect,
    interaction: InteractionFlags,
    callbacks: Vec<Box<dyn FnMut()>>,
    lasso: Option<(Vec<Vec2>, bool)>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            styles: HashMap::new(),
            positions: HashMap::new(),
            edges: Vec::new(),
            rect: SurfaceRect::new(Vec2::ZERO, Vec2::new(800.0, 600.0)),
            interaction: InteractionFlags::default(),
            callbacks: Vec::new(),
            lasso: None,
        }
    }

    /// Overrides the surface bounding rectangle.
    pub fn with_rect(mut self, rect: SurfaceRect) -> Self {
        self.rect = rect;
        self
    }

    /// Places a node at a synthetic screen position.
    pub fn place(&mut self, id: &str, position: Vec2) {
        self.positions.insert(id.to_string(), position);
    }

    /// Fires the layout stable event once for every subscriber.
    pub fn settle(&mut self) {
        for callback in &mut self.callbacks {
            callback();
        }
    }

    /// Current style of a node as last pushed through the adapter.
    pub fn style(&self, id: &str) -> Option<&NodeStyle> {
        self.styles.get(id)
    }

    /// The id to style table in registration order.
    pub fn style_table(&self) -> Vec<(String, NodeStyle)> {
        self.order
            .iter()
            .filter_map(|id| self.styles.get(id).map(|s| (id.clone(), s.clone())))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn interaction(&self) -> InteractionFlags {
        self.interaction
    }

    /// The last lasso polyline handed to the overlay layer, if any.
    pub fn lasso(&self) -> Option<(&[Vec2], bool)> {
        self.lasso.as_ref().map(|(points, closed)| (points.as_slice(), *closed))
    }
}

impl RenderAdapter for HeadlessRenderer {
    fn add_node(&mut self, id: &str, style: &NodeStyle) {
        if !self.styles.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.styles.insert(id.to_string(), style.clone());
    }

    fn add_edge(&mut self, source: &str, target: &str, label: &str) {
        self.edges
            .push((source.to_string(), target.to_string(), label.to_string()));
    }

    fn screen_position(&self, id: &str) -> Option<Vec2> {
        self.positions.get(id).copied()
    }

    fn update_node_style(&mut self, id: &str, patch: &StylePatch) -> bool {
        match self.styles.get_mut(id) {
            Some(style) => {
                patch.apply_to(style);
                true
            }
            None => false,
        }
    }

    fn on_layout_stable(&mut self, callback: Box<dyn FnMut()>) {
        self.callbacks.push(callback);
    }

    fn set_interaction(&mut self, flags: InteractionFlags) -> InteractionFlags {
        std::mem::replace(&mut self.interaction, flags)
    }

    fn surface_rect(&self) -> SurfaceRect {
        self.rect
    }

    fn draw_lasso(&mut self, points: &[Vec2], closed: bool) {
        self.lasso = Some((points.to_vec(), closed));
    }

    fn clear_lasso(&mut self) {
        self.lasso = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_registrations_in_order() {
        let mut renderer = HeadlessRenderer::new();
        renderer.add_node("B", &NodeStyle::default());
        renderer.add_node("A", &NodeStyle::default());
        renderer.add_edge("B", "A", "knows");
        let ids: Vec<_> = renderer.style_table().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(renderer.edge_count(), 1);
    }

    #[test]
    fn unknown_id_update_reports_false() {
        let mut renderer = HeadlessRenderer::new();
        assert!(!renderer.update_node_style("ghost", &StylePatch::default()));
    }

    #[test]
    fn set_interaction_returns_previous_flags() {
        let mut renderer = HeadlessRenderer::new();
        let previous = renderer.set_interaction(InteractionFlags::none());
        assert_eq!(previous, InteractionFlags::default());
        assert_eq!(renderer.interaction(), InteractionFlags::none());
    }

    #[test]
    fn settle_fires_subscribers() {
        let mut renderer = HeadlessRenderer::new();
        let fired = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = fired.clone();
        renderer.on_layout_stable(Box::new(move || counter.set(counter.get() + 1)));
        renderer.settle();
        renderer.settle();
        assert_eq!(fired.get(), 2);
    }
}
