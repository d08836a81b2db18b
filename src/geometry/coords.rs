//! Coordinate loop generation from ordinate groups

use super::{DiagramPoint, Loop};

/// Convert ordinate groups into one coordinate loop per group
///
/// A single station counter runs across all groups, so `x` advances by
/// `dist` for every sample consumed regardless of group boundaries. The
/// first loop is anchored to the baseline with a synthetic `(0, 0)` point
/// (any duplicate this creates for a series that starts at zero collapses
/// during normalization). Between consecutive groups the earlier loop gets a
/// linearly interpolated zero-crossing point on the baseline, and the final
/// loop is closed back to the baseline when its last ordinate is
/// non-negligible.
///
/// Loops are returned as-is, including single-point ones; filtering of
/// unusable loops is the normalizer's job.
///
/// # Arguments
/// * `ordinates` - Groups produced by [`separate_ordinates`](super::separate_ordinates)
/// * `dist` - Uniform spacing between consecutive sample stations
/// * `zero_tol` - Magnitude below which an ordinate counts as zero
pub fn generate_coordinates(ordinates: &[Vec<f64>], dist: f64, zero_tol: f64) -> Vec<Loop> {
    let mut loops = Vec::with_capacity(ordinates.len());
    // Running sample counter, shared by all groups
    let mut station = 0usize;

    for (g, group) in ordinates.iter().enumerate() {
        let mut points = Loop::with_capacity(group.len() + 2);

        if g == 0 {
            points.push(DiagramPoint::baseline(0.0));
        }

        for &value in group {
            points.push(DiagramPoint::new(station as f64 * dist, value));
            station += 1;
        }

        let next_first = ordinates.get(g + 1).and_then(|next| next.first());
        match (group.last(), next_first) {
            (Some(&last), Some(&next)) => {
                // Interpolated zero crossing between this group and the next
                let x_last = (station - 1) as f64 * dist;
                let denom = last.abs() + next.abs();
                let x_cross = if denom == 0.0 {
                    x_last
                } else {
                    x_last + last.abs() * dist / denom
                };
                points.push(DiagramPoint::baseline(x_cross));
            }
            (Some(&last), None) if last.abs() > zero_tol => {
                // Close the final lobe back onto the baseline
                points.push(DiagramPoint::baseline((station - 1) as f64 * dist));
            }
            _ => {}
        }

        loops.push(points);
    }

    loops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DEFAULT_ZERO_TOL;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_group_anchored_and_closed() {
        let loops = generate_coordinates(&[vec![1.0, -1.0]], 1.0, DEFAULT_ZERO_TOL);
        assert_eq!(
            loops,
            vec![vec![
                DiagramPoint::new(0.0, 0.0),
                DiagramPoint::new(0.0, 1.0),
                DiagramPoint::new(1.0, -1.0),
                DiagramPoint::new(1.0, 0.0),
            ]]
        );
    }

    #[test]
    fn test_all_zero_group_keeps_baseline_anchor() {
        let loops = generate_coordinates(&[vec![0.0, 0.0, 0.0]], 1.0, DEFAULT_ZERO_TOL);
        assert_eq!(
            loops,
            vec![vec![
                DiagramPoint::new(0.0, 0.0),
                DiagramPoint::new(0.0, 0.0),
                DiagramPoint::new(1.0, 0.0),
                DiagramPoint::new(2.0, 0.0),
            ]]
        );
    }

    #[test]
    fn test_crossing_interpolation() {
        let loops = generate_coordinates(&[vec![2.0], vec![-2.0]], 1.0, DEFAULT_ZERO_TOL);
        assert_eq!(loops.len(), 2);

        // Equal magnitudes cross midway between stations
        let crossing = loops[0][2];
        assert_relative_eq!(crossing.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(crossing.y, 0.0, epsilon = 1e-12);

        // Second lobe: its sample, then the baseline close
        assert_eq!(
            loops[1],
            vec![DiagramPoint::new(1.0, -2.0), DiagramPoint::new(1.0, 0.0)]
        );
    }

    #[test]
    fn test_crossing_biased_toward_smaller_magnitude() {
        // |last| = 3, |next| = 1: crossing lands 3/4 of the way to the next station
        let loops = generate_coordinates(&[vec![3.0], vec![-1.0]], 2.0, DEFAULT_ZERO_TOL);
        let crossing = loops[0][2];
        assert_relative_eq!(crossing.x, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_crossing_with_zero_magnitudes_stays_at_last_station() {
        let loops = generate_coordinates(&[vec![1.0, 0.0], vec![-0.0]], 1.0, DEFAULT_ZERO_TOL);
        let crossing = loops[0][3];
        assert_relative_eq!(crossing.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(crossing.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negligible_tail_left_open() {
        // Final ordinate already on the baseline: no extra closing point
        let loops = generate_coordinates(&[vec![1.0, 0.5, 0.0]], 1.0, DEFAULT_ZERO_TOL);
        assert_eq!(loops[0].len(), 4);
        assert_eq!(loops[0].last(), Some(&DiagramPoint::new(2.0, 0.0)));
    }

    #[test]
    fn test_station_counter_runs_across_groups() {
        let loops = generate_coordinates(&[vec![1.0, 2.0], vec![-1.0, -2.0]], 0.5, DEFAULT_ZERO_TOL);
        // Samples of the second group continue at stations 2 and 3
        assert_relative_eq!(loops[1][0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(loops[1][1].x, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_coordinates(&[], 1.0, DEFAULT_ZERO_TOL).is_empty());
    }
}
