//! Text rendering of a route drawn over its map.

use hillwalk_core::Point;
use hillwalk_map::{HeightMap, Route};

/// Render `map` with `route` drawn over it.
///
/// Each cell the walk leaves shows the direction of the next step
/// (`^ > v <`), the end of the walk shows `E`, and every other cell `.`.
pub fn render_route(map: &HeightMap, route: &Route) -> String {
    let w = map.width();
    let mut canvas = vec!['.'; w * map.height()];
    let bounds = map.bounds();

    let mut at = route.from;
    for &next in &route.steps {
        let arrow = match next - at {
            Point { x: 0, y: -1 } => '^',
            Point { x: 1, y: 0 } => '>',
            Point { x: 0, y: 1 } => 'v',
            Point { x: -1, y: 0 } => '<',
            _ => '?',
        };
        if let Some(i) = bounds.index_of(at) {
            canvas[i] = arrow;
        }
        at = next;
    }
    if let Some(i) = bounds.index_of(route.to) {
        canvas[i] = 'E';
    }

    canvas
        .chunks(w)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
