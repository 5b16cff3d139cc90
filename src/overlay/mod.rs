//! Free-form lasso selection over the rendered node canvas.
//!
//! The controller owns the selection and highlight state, the captured
//! original node styles, and the lasso drawing lifecycle. All mutation
//! happens inside pointer and submit handlers; nothing here runs on a
//! background thread.

pub mod events;
pub mod geometry;

pub use events::PointerEvent;

use std::collections::HashMap;

use glam::Vec2;
use log::{debug, info, warn};

use crate::color::{Color, Rgb, FALLBACK_BORDER, FALLBACK_FILL};
use crate::graph::TripleGraph;
use crate::render::{InteractionFlags, RenderAdapter, StylePatch};

/// Border width applied to selected nodes.
const SELECTION_BORDER_WIDTH: u32 = 5;

/// Knobs for selection and highlight styling.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionConfig {
    /// Border color of lasso-selected nodes.
    pub emphasis_border_color: String,
    /// Border color applied by a query submission.
    pub highlight_color: String,
    /// How far reverted borders are darkened from the restored fill, 0..=1.
    pub darken_amount: f32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            emphasis_border_color: "#ffa500".to_string(),
            highlight_color: "#ff0000".to_string(),
            darken_amount: 0.3,
        }
    }
}

/// Result of a query submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The query text was empty after trimming; nothing changed.
    Ignored,
    /// A new subset was highlighted.
    Highlighted { highlighted: usize, selected: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LassoMode {
    Disabled,
    /// Lasso mode is on; the renderer's pre-lasso interaction flags are kept
    /// so leaving the mode restores them exactly.
    Enabled { prior: InteractionFlags },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Drawing,
}

/// Owns lasso drawing, node containment testing and the highlight/revert
/// state machine.
///
/// Selection order is the node registration order of the graph, which makes
/// the "first half" query highlight deterministic.
pub struct SelectionController<R: RenderAdapter> {
    renderer: R,
    node_ids: Vec<String>,
    base_styles: HashMap<String, crate::graph::NodeStyle>,
    config: SelectionConfig,
    mode: LassoMode,
    phase: Phase,
    polyline: Vec<Vec2>,
    selected: Vec<String>,
    highlighted: Vec<String>,
    /// Original colors captured before the first styling mutation of a node.
    originals: HashMap<String, Color>,
}

impl<R: RenderAdapter> SelectionController<R> {
    pub fn new(renderer: R, graph: &TripleGraph, config: SelectionConfig) -> Self {
        Self {
            renderer,
            node_ids: graph.node_ids().map(str::to_string).collect(),
            base_styles: graph.style_table().into_iter().collect(),
            config,
            mode: LassoMode::Disabled,
            phase: Phase::Idle,
            polyline: Vec::new(),
            selected: Vec::new(),
            highlighted: Vec::new(),
            originals: HashMap::new(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn lasso_enabled(&self) -> bool {
        matches!(self.mode, LassoMode::Enabled { .. })
    }

    /// Ids selected by the last finalized lasso, in finalize order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Ids highlighted by the last query submission.
    pub fn highlighted(&self) -> &[String] {
        &self.highlighted
    }

    /// Enters or leaves lasso mode.
    ///
    /// Entering disables renderer pan, zoom and node dragging. Leaving
    /// restores the exact pre-lasso flags; leaving mid-draw discards the in
    /// progress polygon without touching any node style.
    pub fn set_lasso_enabled(&mut self, enabled: bool) {
        match (self.mode, enabled) {
            (LassoMode::Disabled, true) => {
                let prior = self.renderer.set_interaction(InteractionFlags::none());
                self.mode = LassoMode::Enabled { prior };
                debug!("lasso mode on, renderer interaction suspended");
            }
            (LassoMode::Enabled { prior }, false) => {
                if self.phase == Phase::Drawing {
                    self.phase = Phase::Idle;
                    self.polyline.clear();
                    self.renderer.clear_lasso();
                    debug!("in-progress lasso discarded");
                }
                self.renderer.set_interaction(prior);
                self.mode = LassoMode::Disabled;
                debug!("lasso mode off, renderer interaction restored");
            }
            _ => {}
        }
    }

    /// Feeds one pointer event through the state machine. Events arriving
    /// outside lasso mode are ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if !self.lasso_enabled() {
            debug!("pointer event outside lasso mode ignored: {:?}", event);
            return;
        }
        match event {
            PointerEvent::Pressed(client) => self.begin_lasso(client),
            PointerEvent::Moved(client) => self.extend_lasso(client),
            PointerEvent::Released(client) => {
                self.finalize_lasso(client);
            }
        }
    }

    /// Starts a fresh polygon at the pressed position.
    pub fn begin_lasso(&mut self, client: Vec2) {
        let local = self.renderer.surface_rect().to_local(client);
        self.phase = Phase::Drawing;
        self.polyline.clear();
        self.polyline.push(local);
        self.renderer.draw_lasso(&self.polyline, false);
    }

    /// Appends a point to the live polygon and redraws the open polyline.
    pub fn extend_lasso(&mut self, client: Vec2) {
        if self.phase != Phase::Drawing {
            return;
        }
        let local = self.renderer.surface_rect().to_local(client);
        self.polyline.push(local);
        self.renderer.draw_lasso(&self.polyline, false);
    }

    /// Closes the polygon, replaces the selection with the contained nodes
    /// and applies the emphasis border.
    ///
    /// The previous selection is fully reverted before the new one is
    /// styled, so no node is ever in two visual states at once. A pointer
    /// release always leaves the drawing phase, and a degenerate polygon
    /// yields an empty selection rather than an error. Returns the new
    /// selection size.
    pub fn finalize_lasso(&mut self, client: Vec2) -> usize {
        if self.phase != Phase::Drawing {
            return self.selected.len();
        }
        self.phase = Phase::Idle;

        let local = self.renderer.surface_rect().to_local(client);
        self.polyline.push(local);
        let polygon = std::mem::take(&mut self.polyline);
        self.renderer.draw_lasso(&polygon, true);

        let new_selection = self.contained_nodes(&polygon);
        self.renderer.clear_lasso();

        // revert strictly before applying the new emphasis
        let previous = std::mem::take(&mut self.selected);
        for id in &previous {
            self.revert(id);
        }
        self.highlighted.clear();

        for id in &new_selection {
            self.capture_original(id);
            self.patch_style(
                id,
                StylePatch {
                    border_color: Some(self.config.emphasis_border_color.clone()),
                    border_width: Some(SELECTION_BORDER_WIDTH),
                    ..Default::default()
                },
            );
        }

        info!("lasso selected {} nodes", new_selection.len());
        self.selected = new_selection;
        self.selected.len()
    }

    /// Tests every node position against the closed polygon, in node
    /// registration order.
    fn contained_nodes(&self, polygon: &[Vec2]) -> Vec<String> {
        if geometry::is_degenerate(polygon) {
            debug!("degenerate lasso polygon, empty selection");
            return Vec::new();
        }
        let rect = self.renderer.surface_rect();
        let mut contained = Vec::new();
        for id in &self.node_ids {
            let Some(screen) = self.renderer.screen_position(id) else {
                warn!("no screen position for node {:?}, skipping", id);
                continue;
            };
            if geometry::point_in_polygon(rect.to_local(screen), polygon) {
                contained.push(id.clone());
            }
        }
        contained
    }

    /// Binds a free-text question to the current selection.
    ///
    /// The "response" is a placeholder: the first `floor(n / 2)` ids of the
    /// selection, in selection order, get the highlight border color. The
    /// previous highlight is reverted first. Empty or whitespace-only text
    /// is a no-op; an empty selection highlights an empty subset.
    pub fn submit_query(&mut self, query: &str) -> QueryOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            debug!("empty query ignored");
            return QueryOutcome::Ignored;
        }

        let previous = std::mem::take(&mut self.highlighted);
        for id in &previous {
            self.revert(id);
        }

        if self.selected.is_empty() {
            info!("query {:?} submitted with no selection", trimmed);
            return QueryOutcome::Highlighted {
                highlighted: 0,
                selected: 0,
            };
        }

        let subset: Vec<String> = self.selected[..self.selected.len() / 2].to_vec();
        for id in &subset {
            self.capture_original(id);
            self.patch_style(
                id,
                StylePatch {
                    border_color: Some(self.config.highlight_color.clone()),
                    ..Default::default()
                },
            );
        }

        info!(
            "query {:?} highlighted {} of {} selected nodes",
            trimmed,
            subset.len(),
            self.selected.len()
        );
        let outcome = QueryOutcome::Highlighted {
            highlighted: subset.len(),
            selected: self.selected.len(),
        };
        self.highlighted = subset;
        outcome
    }

    /// Restores a node to its captured original: the recorded fill, a border
    /// darkened from that fill and width 1.
    ///
    /// A node without a captured original was never styled by the overlay
    /// and is left untouched, which makes reverting idempotent.
    pub fn revert(&mut self, id: &str) {
        let Some(original) = self.originals.get(id) else {
            return;
        };
        let fill = original.fill();
        self.patch_style(
            id,
            StylePatch {
                fill_color: Some(fill.to_hex()),
                border_color: Some(fill.darken(self.config.darken_amount).to_hex()),
                border_width: Some(1),
            },
        );
    }

    /// Records a node's original coloring once, before its first styling
    /// mutation. Unparsable colors resolve to the documented fallback pair.
    fn capture_original(&mut self, id: &str) {
        if self.originals.contains_key(id) {
            return;
        }
        let captured = match self.base_styles.get(id) {
            Some(style) => {
                let fill = Rgb::parse(&style.fill_color);
                let border = Rgb::parse(&style.border_color);
                match (border, fill) {
                    (Ok(border), Ok(fill)) => Color::BorderFill { border, fill },
                    (Err(_), Ok(fill)) => Color::Solid(fill),
                    (_, Err(_)) => {
                        warn!(
                            "unparsable original fill for {:?}, using fallback pair",
                            id
                        );
                        Color::BorderFill {
                            border: FALLBACK_BORDER,
                            fill: FALLBACK_FILL,
                        }
                    }
                }
            }
            None => {
                warn!("no recorded style for {:?}, using fallback pair", id);
                Color::BorderFill {
                    border: FALLBACK_BORDER,
                    fill: FALLBACK_FILL,
                }
            }
        };
        self.originals.insert(id.to_string(), captured);
    }

    fn patch_style(&mut self, id: &str, patch: StylePatch) {
        if !self.renderer.update_node_style(id, &patch) {
            warn!("style update for unknown node {:?} skipped", id);
        }
    }
}
