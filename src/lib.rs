//! Community coloring and lasso selection for force directed knowledge
//! graphs.
//!
//! Triples go in, a community-colored graph is registered with an external
//! force directed renderer, and a selection overlay lets the user lasso
//! nodes and bind free-text questions to the selection.
//!
//! # Example
//! ```
//! use glam::Vec2;
//! use lassograph::prelude::*;
//!
//! let triples = vec![
//!     Triple::new("A", "likes", "B"),
//!     Triple::new("B", "likes", "C"),
//!     Triple::new("C", "likes", "A"),
//!     Triple::new("D", "knows", "E"),
//! ];
//!
//! let mut view = GraphViewBuilder::new()
//!     .community_strategy(Strategy::Divisive)
//!     .build(triples, HeadlessRenderer::new());
//!
//! view.controller_mut().renderer_mut().place("A", Vec2::new(10.0, 10.0));
//! view.controller_mut().renderer_mut().place("B", Vec2::new(20.0, 20.0));
//!
//! view.set_lasso_enabled(true);
//! view.handle_pointer(PointerEvent::Pressed(Vec2::new(0.0, 0.0)));
//! view.handle_pointer(PointerEvent::Moved(Vec2::new(0.0, 50.0)));
//! view.handle_pointer(PointerEvent::Moved(Vec2::new(50.0, 50.0)));
//! view.handle_pointer(PointerEvent::Released(Vec2::new(50.0, 0.0)));
//!
//! assert_eq!(view.selection(), ["A".to_string(), "B".to_string()]);
//! view.submit_query("who started this?");
//! assert_eq!(view.highlighted(), ["A".to_string()]);
//! ```

pub mod color;
pub mod community;
pub mod console;
pub mod error;
pub mod graph;
pub mod overlay;
pub mod render;
pub mod view;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::color::{Color, Rgb};
    pub use crate::community::{color_communities, Strategy};
    pub use crate::console::QueryConsole;
    pub use crate::error::Error;
    pub use crate::graph::{NodeStyle, Triple, TripleGraph};
    pub use crate::overlay::{
        PointerEvent, QueryOutcome, SelectionConfig, SelectionController,
    };
    pub use crate::render::{
        register_graph, HeadlessRenderer, InteractionFlags, RenderAdapter, StylePatch,
        SurfaceRect,
    };
    pub use crate::view::{GraphView, GraphViewBuilder};
}
