//! Rectangle helpers shared by the bear, the camera and collision checks.

use macroquad::math::Rect;

/// Translate `rect` the minimum distance needed to fit inside `bounds`,
/// one axis at a time. A rectangle already inside comes back unchanged.
/// A rectangle wider or taller than `bounds` is anchored to the bounds'
/// min edge on that axis.
pub fn clamp_into(rect: Rect, bounds: Rect) -> Rect {
    Rect::new(
        clamp_axis(rect.x, rect.w, bounds.x, bounds.w),
        clamp_axis(rect.y, rect.h, bounds.y, bounds.h),
        rect.w,
        rect.h,
    )
}

fn clamp_axis(min: f32, len: f32, bound_min: f32, bound_len: f32) -> f32 {
    if len >= bound_len {
        return bound_min;
    }
    min.clamp(bound_min, bound_min + bound_len - len)
}

/// Axis-aligned overlap with half-open interval semantics: far edges are
/// exclusive, so rectangles that merely touch do not overlap. Both the
/// berry collision test and camera culling use this one rule.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_noop() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let rect = Rect::new(100.0, 200.0, 50.0, 50.0);
        assert_eq!(clamp_into(rect, bounds), rect);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let rect = Rect::new(-30.0, 990.0, 50.0, 50.0);
        let once = clamp_into(rect, bounds);
        let twice = clamp_into(once, bounds);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clamp_translates_minimally() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);

        let past_min = clamp_into(Rect::new(-30.0, -5.0, 50.0, 50.0), bounds);
        assert_eq!(past_min, Rect::new(0.0, 0.0, 50.0, 50.0));

        let past_max = clamp_into(Rect::new(980.0, 990.0, 50.0, 50.0), bounds);
        assert_eq!(past_max, Rect::new(950.0, 950.0, 50.0, 50.0));
    }

    #[test]
    fn test_clamp_oversized_anchors_to_min_edge() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let huge = clamp_into(Rect::new(40.0, -70.0, 500.0, 500.0), bounds);
        assert_eq!(huge.point(), bounds.point());
    }

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(overlaps(a, Rect::new(25.0, 25.0, 50.0, 50.0)));
        assert!(overlaps(a, a));
        assert!(!overlaps(a, Rect::new(100.0, 0.0, 50.0, 50.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(!overlaps(a, Rect::new(50.0, 0.0, 50.0, 50.0)));
        assert!(!overlaps(a, Rect::new(0.0, 50.0, 50.0, 50.0)));
        // one pixel of penetration does
        assert!(overlaps(a, Rect::new(49.0, 0.0, 50.0, 50.0)));
    }
}
