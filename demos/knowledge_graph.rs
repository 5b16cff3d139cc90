//! Drives the whole pipeline headlessly and prints the resulting style
//! table. With a real renderer the same calls would run against live layout
//! positions; here synthetic ones stand in.

use glam::Vec2;
use lassograph::prelude::*;

fn main() {
    let triples = vec![
        Triple::new("Alice", "manages", "Bob"),
        Triple::new("Bob", "mentors", "Carol"),
        Triple::new("Carol", "reports to", "Alice"),
        Triple::new("Dave", "pairs with", "Erin"),
        Triple::new("Erin", "reviews", "Dave"),
    ];

    let mut view = GraphViewBuilder::new()
        .community_strategy(Strategy::Divisive)
        .emphasis_border_color("#ffa500")
        .highlight_color("#ff0000")
        .darken_amount(0.3)
        .build(triples, HeadlessRenderer::new());

    // synthetic layout in place of the force simulation
    let positions = [
        ("Alice", Vec2::new(100.0, 100.0)),
        ("Bob", Vec2::new(140.0, 120.0)),
        ("Carol", Vec2::new(120.0, 160.0)),
        ("Dave", Vec2::new(400.0, 400.0)),
        ("Erin", Vec2::new(430.0, 420.0)),
    ];
    for (id, position) in positions {
        view.controller_mut().renderer_mut().place(id, position);
    }
    view.controller_mut().renderer_mut().settle();

    // lasso the management triangle
    view.set_lasso_enabled(true);
    view.handle_pointer(PointerEvent::Pressed(Vec2::new(80.0, 80.0)));
    view.handle_pointer(PointerEvent::Moved(Vec2::new(80.0, 200.0)));
    view.handle_pointer(PointerEvent::Moved(Vec2::new(200.0, 200.0)));
    view.handle_pointer(PointerEvent::Released(Vec2::new(200.0, 80.0)));
    view.set_lasso_enabled(false);

    println!("selected: {:?}", view.selection());

    view.submit_query("who is in charge here?");
    println!("highlighted: {:?}", view.highlighted());
    if let Some(status) = view.status() {
        println!("console: {status}");
    }

    println!("\nfinal node styles:");
    for (id, style) in view.renderer().style_table() {
        println!(
            "  {:8} fill {} border {} width {}",
            id, style.fill_color, style.border_color, style.border_width
        );
    }
}
