use glam::Vec2;

/// Compares a vector against component values with exact equality.
///
/// Intentionally not epsilon-based: the callers compare against values that
/// were stored from the same computation, so any drift is a bug worth seeing.
pub fn vec2_equals(v: Vec2, x: f32, y: f32) -> bool {
    v.x == x && v.y == y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(vec2_equals(Vec2::new(1.0, 2.0), 1.0, 2.0));
        assert!(vec2_equals(Vec2::ZERO, 0.0, 0.0));
    }

    #[test]
    fn test_epsilon_drift_does_not_match() {
        assert!(!vec2_equals(Vec2::new(1.0 + f32::EPSILON, 2.0), 1.0, 2.0));
        assert!(!vec2_equals(Vec2::new(1.0, 2.0), 1.0, 2.1));
    }

    #[test]
    fn test_integer_valued_components() {
        // Whole numbers convert to f32 exactly in this range
        assert!(vec2_equals(Vec2::new(3.0, 4.0), 3i16 as f32, 4i16 as f32));
    }
}
