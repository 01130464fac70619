//! Dashed-line subdivision over solid-segment primitives.
//!
//! The rendering backend has no native dashed-line primitive, so each
//! wireframe edge is drawn as a run of short solid cylinders with gaps.
//! The subdivision is parametric along the edge: segment `i` of `n` covers
//! the fractional span `[i/n, i/n + dash/n]`, drawn only when the end
//! fraction stays within the edge. The final partial span, if any, is
//! omitted rather than clipped.

use glam::DVec3;

/// Default number of subdivisions per edge.
pub const DEFAULT_SEGMENTS: u32 = 10;

/// Default visible fraction of each subdivision (60% dash, 40% gap).
pub const DEFAULT_DASH_FRACTION: f64 = 0.6;

/// Visible sub-spans of the edge from `start` to `end`.
///
/// With the defaults (10 segments, 0.6 dash fraction) every edge yields
/// exactly 10 spans, since `i/10 + 0.06 <= 1` for all `i` in `0..10`.
#[must_use]
pub fn dash_segments(
    start: DVec3,
    end: DVec3,
    segments: u32,
    dash_fraction: f64,
) -> Vec<(DVec3, DVec3)> {
    let n = f64::from(segments);
    (0..segments)
        .filter_map(|i| {
            let t1 = f64::from(i) / n;
            let t2 = t1 + dash_fraction / n;
            (t2 <= 1.0).then(|| (start.lerp(end, t1), start.lerp(end, t2)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_emit_ten_spans_per_edge() {
        let spans = dash_segments(
            DVec3::ZERO,
            DVec3::new(10.0, 0.0, 0.0),
            DEFAULT_SEGMENTS,
            DEFAULT_DASH_FRACTION,
        );
        assert_eq!(spans.len(), 10);
    }

    #[test]
    fn each_span_covers_its_fraction() {
        let end = DVec3::new(10.0, 0.0, 0.0);
        let spans =
            dash_segments(DVec3::ZERO, end, DEFAULT_SEGMENTS, DEFAULT_DASH_FRACTION);
        for (i, (p1, p2)) in spans.iter().enumerate() {
            let t1 = i as f64 / 10.0;
            assert!((p1.x - t1 * 10.0).abs() < 1e-12);
            // 60% of each tenth is visible.
            assert!(((p2.x - p1.x) - 0.6).abs() < 1e-12);
        }
    }

    #[test]
    fn overlong_dash_omits_the_final_span() {
        // dash/n = 0.5 per third: spans end at 0.5, 0.833.., 1.166..; the
        // last exceeds 1.0 and is dropped, not clipped.
        let spans =
            dash_segments(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), 3, 1.5);
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn full_fraction_keeps_every_span() {
        // dash fraction 1.0 makes contiguous spans; i/n + 1/n == 1 exactly
        // for the last one, which is kept (t2 <= 1 is inclusive).
        let spans =
            dash_segments(DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0), 4, 1.0);
        assert_eq!(spans.len(), 4);
    }

    #[test]
    fn spans_follow_an_oblique_edge() {
        let start = DVec3::new(1.0, 2.0, 3.0);
        let end = DVec3::new(2.0, 4.0, 6.0);
        let spans = dash_segments(start, end, DEFAULT_SEGMENTS, DEFAULT_DASH_FRACTION);
        for (p1, p2) in &spans {
            // Both endpoints lie on the edge's line.
            let d = (end - start).normalize();
            for p in [p1, p2] {
                let offset = *p - start;
                let along = offset.dot(d);
                assert!((offset - along * d).length() < 1e-12);
            }
        }
    }

    #[test]
    fn zero_segments_emit_nothing() {
        let spans = dash_segments(DVec3::ZERO, DVec3::X, 0, DEFAULT_DASH_FRACTION);
        assert!(spans.is_empty());
    }
}
