//! Polygon containment and area in overlay-local pixel space.

use glam::Vec2;

/// Even-odd ray casting containment test.
///
/// A horizontal ray from `point` towards +x is crossed against every polygon
/// edge; an odd crossing count means inside. Edges are tested with a strict
/// vertical-span condition (`>` on both endpoints) so a vertex shared by two
/// edges is never counted twice. Boundary policy that falls out of the
/// strict test: a point exactly on the left or bottom boundary is inside,
/// one on the right or top boundary is outside.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Absolute polygon area by the shoelace formula.
pub fn polygon_area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut doubled = 0.0;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        doubled += (polygon[j].x - polygon[i].x) * (polygon[j].y + polygon[i].y);
        j = i;
    }
    (doubled / 2.0).abs()
}

/// True for polygons that cannot enclose anything: fewer than three distinct
/// vertices or zero enclosed area.
pub fn is_degenerate(polygon: &[Vec2]) -> bool {
    let mut distinct: Vec<Vec2> = Vec::new();
    for &p in polygon {
        if !distinct.contains(&p) {
            distinct.push(p);
        }
    }
    distinct.len() < 3 || polygon_area(polygon) == 0.0
}
