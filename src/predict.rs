use itertools::Itertools;
use nalgebra::Vector2;

use crate::geometry::Point;

/// Extrapolates the next center position from a centroid history.
///
/// Considers at most the `window` most recent positions and averages their
/// consecutive deltas with linearly increasing weights, so the newest motion
/// dominates while single-frame jitter is damped. With fewer than two usable
/// positions the last known position is returned unchanged (no motion
/// assumed).
pub fn extrapolate(history: &[Point], window: usize) -> Point {
    let Some(&last) = history.last() else {
        return Point::origin();
    };
    if history.len() < 2 || window < 2 {
        return last;
    }

    let recent = &history[history.len().saturating_sub(window)..];
    let (weighted_sum, weight_total) = recent
        .iter()
        .copied()
        .tuple_windows()
        .zip(1..)
        .fold(
            (Vector2::zeros(), 0.0),
            |(sum, total), ((from, to), weight)| {
                (sum + (to - from) * weight as f64, total + weight as f64)
            },
        );

    last + weighted_sum / weight_total
}
