//! Polyline simplification: dense stroke → sparse stroke.
//!
//! Douglas-Peucker style:
//! 1. Keep both endpoints
//! 2. Find the interior point furthest from the chord, if it exceeds the threshold
//! 3. Keep it and recurse on both halves
//! 4. Compact to the kept points and drop consecutive duplicates
//!
//! The recursion works on an immutable slice and returns the retained
//! indices in ascending order, so there is no shared keep-buffer.

use kurbo::Point;

use crate::geom::Segment;

/// Simplify `points` so that every dropped point lies within `threshold`
/// of the chord between its nearest retained neighbours.
///
/// The first point always survives. The last point survives too, unless it
/// equals the point retained right before it, in which case the duplicate
/// is collapsed.
pub fn simplify(points: &[Point], threshold: f64) -> Vec<Point> {
    let mut result: Vec<Point> = retained_indices(points, threshold)
        .into_iter()
        .map(|i| points[i])
        .collect();
    let compacted = result.len();
    result.dedup();
    log::debug!(
        "simplify {} {}pts to {}pts ({} duplicates)",
        threshold,
        points.len(),
        result.len(),
        compacted - result.len(),
    );
    result
}

/// Indices of the points kept by the recursive pass, in ascending order.
///
/// Does not include the duplicate removal done by [`simplify`].
pub fn retained_indices(points: &[Point], threshold: f64) -> Vec<usize> {
    match points.len() {
        0 => Vec::new(),
        1 => vec![0],
        n => {
            let mut kept = vec![0];
            kept.extend(simplify_sub(points, 0, n - 1, threshold));
            kept.push(n - 1);
            kept
        }
    }
}

/// Interior indices of `first..=last` to keep.
fn simplify_sub(points: &[Point], first: usize, last: usize, threshold: f64) -> Vec<usize> {
    if last - first <= 1 {
        return Vec::new();
    }

    let chord = Segment::new(points[first], points[last]);
    let mut furthest_dist = threshold;
    let mut furthest = None;
    for (i, &p) in points.iter().enumerate().take(last).skip(first + 1) {
        let d = chord.distance_to(p);
        // Strict: ties keep the earliest index.
        if d > furthest_dist {
            furthest_dist = d;
            furthest = Some(i);
        }
    }

    let Some(pivot) = furthest else {
        return Vec::new();
    };
    log::trace!("keep {} ({:.3} from chord {}..{})", pivot, furthest_dist, first, last);

    let mut kept = simplify_sub(points, first, pivot, threshold);
    kept.push(pivot);
    kept.extend(simplify_sub(points, pivot, last, threshold));
    kept
}
