//! Full pipeline scenario: triples to communities to lasso to query.

use glam::Vec2;
use lassograph::prelude::*;

fn triples() -> Vec<Triple> {
    vec![
        Triple::new("A", "likes", "B"),
        Triple::new("B", "likes", "C"),
        Triple::new("C", "likes", "A"),
        Triple::new("D", "knows", "E"),
    ]
}

fn place_all(view: &mut GraphView<HeadlessRenderer>) {
    let renderer = view.controller_mut().renderer_mut();
    renderer.place("A", Vec2::new(10.0, 10.0));
    renderer.place("B", Vec2::new(25.0, 20.0));
    renderer.place("C", Vec2::new(200.0, 40.0));
    renderer.place("D", Vec2::new(300.0, 300.0));
    renderer.place("E", Vec2::new(320.0, 310.0));
}

fn lasso(view: &mut GraphView<HeadlessRenderer>, min: Vec2, max: Vec2) {
    view.handle_pointer(PointerEvent::Pressed(min));
    view.handle_pointer(PointerEvent::Moved(Vec2::new(min.x, max.y)));
    view.handle_pointer(PointerEvent::Moved(max));
    view.handle_pointer(PointerEvent::Released(Vec2::new(max.x, min.y)));
}

#[test]
fn triangle_and_pair_scenario() {
    let mut view = GraphViewBuilder::new()
        .community_strategy(Strategy::Divisive)
        .build(triples(), HeadlessRenderer::new());

    assert_eq!(view.graph().node_count(), 5);
    assert_eq!(view.graph().edge_count(), 4);

    // the triangle {A, B, C} and the pair {D, E} must not share a community
    let styles = view.node_styles();
    let fill = |id: &str| {
        styles
            .iter()
            .find(|(node, _)| node == id)
            .map(|(_, style)| style.fill_color.clone())
            .unwrap()
    };
    assert_eq!(fill("D"), fill("E"));
    assert_ne!(fill("A"), fill("D"));

    place_all(&mut view);
    view.controller_mut().renderer_mut().settle();
    view.set_lasso_enabled(true);

    // lasso a region containing only A and B
    lasso(&mut view, Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0));
    assert_eq!(view.selection(), ["A".to_string(), "B".to_string()]);

    view.submit_query("which one leads?");

    // exactly one node highlighted: A, first in selection order
    assert_eq!(view.highlighted(), ["A".to_string()]);
    let a = view.renderer().style("A").unwrap().clone();
    let b = view.renderer().style("B").unwrap().clone();
    assert_eq!(a.border_color, "#ff0000");
    // B keeps only its selection border
    assert_eq!(b.border_color, "#ffa500");
    assert_eq!(b.border_width, 5);
    // fills were never touched by selection or highlight
    assert_eq!(a.fill_color, fill("A"));
    assert_eq!(b.fill_color, fill("B"));

    assert_eq!(
        view.status(),
        Some("highlighted 1 of 2 selected nodes for \"which one leads?\"")
    );
}

#[test]
fn repeated_divisive_runs_color_identically() {
    let first = GraphViewBuilder::new()
        .community_strategy(Strategy::Divisive)
        .build(triples(), HeadlessRenderer::new());
    let second = GraphViewBuilder::new()
        .community_strategy(Strategy::Divisive)
        .build(triples(), HeadlessRenderer::new());
    assert_eq!(first.node_styles(), second.node_styles());
}

#[test]
fn style_table_serializes() {
    let view = GraphViewBuilder::new().build(triples(), HeadlessRenderer::new());
    let json = serde_json::to_string(&view.node_styles()).unwrap();
    assert!(json.contains("\"fill_color\""));
    let parsed: Vec<(String, NodeStyle)> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, view.node_styles());
}

#[test]
fn leaving_lasso_mode_restores_interaction_flags() {
    let mut view = GraphViewBuilder::new().build(triples(), HeadlessRenderer::new());
    place_all(&mut view);
    view.set_lasso_enabled(true);
    assert_eq!(view.renderer().interaction(), InteractionFlags::none());
    lasso(&mut view, Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0));
    view.set_lasso_enabled(false);
    assert_eq!(view.renderer().interaction(), InteractionFlags::default());
    // the selection styling survives leaving lasso mode
    assert_eq!(view.renderer().style("A").unwrap().border_width, 5);
}
