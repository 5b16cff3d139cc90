//! Free-text query console bound to the current selection.

use log::debug;

use crate::overlay::{QueryOutcome, SelectionController};
use crate::render::RenderAdapter;

/// Binds submitted question text to the selection controller and keeps a
/// human readable status line for the console area.
///
/// No answering happens here. The deterministic placeholder response lives
/// in [`SelectionController::submit_query`]; the console only validates the
/// text, forwards it, and words the result. Failures inside the submission
/// path surface as a status line instead of propagating.
pub struct QueryConsole {
    status: Option<String>,
    submissions: usize,
}

impl QueryConsole {
    pub fn new() -> Self {
        Self {
            status: None,
            submissions: 0,
        }
    }

    /// Submits query text against the current selection.
    ///
    /// Whitespace-only text is a no-op that leaves the status untouched.
    pub fn submit<R: RenderAdapter>(
        &mut self,
        controller: &mut SelectionController<R>,
        query: &str,
    ) -> QueryOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            debug!("console ignored empty query");
            return QueryOutcome::Ignored;
        }
        self.submissions += 1;
        let outcome = controller.submit_query(trimmed);
        self.status = Some(match outcome {
            QueryOutcome::Ignored => format!("ignored query {:?}", trimmed),
            QueryOutcome::Highlighted {
                highlighted,
                selected: 0,
            } => format!(
                "nothing selected; highlighted {} nodes for {:?}",
                highlighted, trimmed
            ),
            QueryOutcome::Highlighted {
                highlighted,
                selected,
            } => format!(
                "highlighted {} of {} selected nodes for {:?}",
                highlighted, selected, trimmed
            ),
        });
        outcome
    }

    /// The latest status line, if any submission happened yet.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// How many non-empty queries were submitted.
    pub fn submissions(&self) -> usize {
        self.submissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::{color_communities, Strategy};
    use crate::graph::{Triple, TripleGraph};
    use crate::overlay::{PointerEvent, SelectionConfig};
    use crate::render::{register_graph, HeadlessRenderer};
    use glam::Vec2;

    fn selected_pair() -> SelectionController<HeadlessRenderer> {
        let mut graph = TripleGraph::from_triples(vec![
            Triple::new("A", "likes", "B"),
            Triple::new("B", "likes", "C"),
        ]);
        color_communities(&mut graph, Strategy::Divisive, 0.3);
        let mut renderer = HeadlessRenderer::new();
        register_graph(&graph, &mut renderer);
        renderer.place("A", Vec2::new(10.0, 10.0));
        renderer.place("B", Vec2::new(20.0, 20.0));
        renderer.place("C", Vec2::new(500.0, 500.0));
        let mut controller =
            SelectionController::new(renderer, &graph, SelectionConfig::default());
        controller.set_lasso_enabled(true);
        controller.handle_pointer(PointerEvent::Pressed(Vec2::new(0.0, 0.0)));
        controller.handle_pointer(PointerEvent::Moved(Vec2::new(0.0, 50.0)));
        controller.handle_pointer(PointerEvent::Moved(Vec2::new(50.0, 50.0)));
        controller.handle_pointer(PointerEvent::Released(Vec2::new(50.0, 0.0)));
        controller
    }

    #[test]
    fn submit_words_the_outcome() {
        let mut controller = selected_pair();
        let mut console = QueryConsole::new();
        let outcome = console.submit(&mut controller, "who is central?");
        assert_eq!(
            outcome,
            QueryOutcome::Highlighted {
                highlighted: 1,
                selected: 2
            }
        );
        assert_eq!(
            console.status(),
            Some("highlighted 1 of 2 selected nodes for \"who is central?\"")
        );
        assert_eq!(console.submissions(), 1);
    }

    #[test]
    fn empty_query_changes_nothing() {
        let mut controller = selected_pair();
        let mut console = QueryConsole::new();
        assert_eq!(console.submit(&mut controller, "  \t "), QueryOutcome::Ignored);
        assert_eq!(console.status(), None);
        assert_eq!(console.submissions(), 0);
    }

    #[test]
    fn empty_selection_still_logs_a_status() {
        let mut graph = TripleGraph::from_triples(vec![Triple::new("A", "r", "B")]);
        color_communities(&mut graph, Strategy::Divisive, 0.3);
        let mut renderer = HeadlessRenderer::new();
        register_graph(&graph, &mut renderer);
        let mut controller =
            SelectionController::new(renderer, &graph, SelectionConfig::default());
        let mut console = QueryConsole::new();
        let outcome = console.submit(&mut controller, "anyone?");
        assert_eq!(
            outcome,
            QueryOutcome::Highlighted {
                highlighted: 0,
                selected: 0
            }
        );
        assert!(console.status().unwrap().starts_with("nothing selected"));
    }
}
