use macroquad::math::{vec2, Rect, Vec2};
use rand::Rng;

/// Berry sprite size in world pixels.
pub const BERRY_SIZE: f32 = 50.0;

/// A collectible item. Lives in the session's active set until the bear
/// overlaps it, then it is gone for good.
#[derive(Debug, Clone)]
pub struct Berry {
    position: Vec2,
}

impl Berry {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.position.x - BERRY_SIZE / 2.0,
            self.position.y - BERRY_SIZE / 2.0,
            BERRY_SIZE,
            BERRY_SIZE,
        )
    }
}

/// Scatter `count` berries uniformly across `bounds`. All randomness comes
/// through `rng` so callers control determinism.
pub fn scatter(bounds: Rect, count: usize, rng: &mut impl Rng) -> Vec<Berry> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(bounds.left()..=bounds.right());
            let y = rng.gen_range(bounds.top()..=bounds.bottom());
            Berry::new(vec2(x, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_count_and_bounds() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut rng = StdRng::seed_from_u64(42);
        let berries = scatter(bounds, 100, &mut rng);
        assert_eq!(berries.len(), 100);
        for berry in &berries {
            let p = berry.position();
            assert!(p.x >= 0.0 && p.x <= 1000.0);
            assert!(p.y >= 0.0 && p.y <= 1000.0);
        }
    }

    #[test]
    fn test_scatter_is_deterministic_for_a_seed() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let a = scatter(bounds, 10, &mut StdRng::seed_from_u64(7));
        let b = scatter(bounds, 10, &mut StdRng::seed_from_u64(7));
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.position(), y.position());
        }
    }

    #[test]
    fn test_bounding_rect_is_centered() {
        let berry = Berry::new(vec2(100.0, 200.0));
        assert_eq!(berry.bounding_rect(), Rect::new(75.0, 175.0, 50.0, 50.0));
    }
}
