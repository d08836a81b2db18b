//! Loop closing and degenerate-loop filtering

use super::{DiagramPoint, Loop};

/// Minimum point count for a usable closed outline: a triangle plus the
/// repeated closing point
const MIN_FACE_POINTS: usize = 4;

/// Close a loop by repeating its first point at the end
///
/// Already-closed and empty loops pass through unchanged, so the operation
/// is idempotent.
pub fn close_loop(points: &[DiagramPoint]) -> Loop {
    let mut closed = points.to_vec();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            closed.push(first);
        }
    }
    closed
}

/// Normalize raw loops into face-safe outlines
///
/// Every loop is closed, consecutive duplicate points are collapsed, and any
/// loop left with fewer than 3 distinct vertices is dropped. Surviving loops
/// keep their original order and can be handed to a polygon or face
/// constructor without further validation.
pub fn compose_face_loops(loops: &[Loop]) -> Vec<Loop> {
    loops
        .iter()
        .filter_map(|points| {
            let closed = close_loop(points);
            let mut deduped = Loop::with_capacity(closed.len());
            for point in closed {
                if deduped.last() != Some(&point) {
                    deduped.push(point);
                }
            }
            (deduped.len() >= MIN_FACE_POINTS).then_some(deduped)
        })
        .collect()
}
