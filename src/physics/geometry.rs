// geometry.rs - Small 2D helpers for the actor

/// Rotate an offset (x, y) by `angle` radians around the origin
#[inline]
pub fn rotate(x: f32, y: f32, angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (c * x - s * y, s * x + c * y)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = bx - ax;
    let dy = by - ay;
    (dx * dx + dy * dy).sqrt()
}

/// Move `value` toward `target` by at most `step`, never past it
#[inline]
pub fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else {
        (value - step).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_quarter_turn() {
        let (x, y) = rotate(32.0, -12.0, FRAC_PI_2);
        assert_relative_eq!(x, 12.0, epsilon = 1e-4);
        assert_relative_eq!(y, 32.0, epsilon = 1e-4);
    }

    #[test]
    fn test_distance() {
        assert_relative_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn test_approach_clamps_at_target() {
        assert_eq!(approach(0.75, 0.8, 0.15), 0.8);
        assert_eq!(approach(-0.18, -0.2, 0.05), -0.2);
        assert_relative_eq!(approach(0.0, 0.8, 0.15), 0.15, epsilon = 1e-6);
        assert_relative_eq!(approach(0.8, -0.2, 0.05), 0.75, epsilon = 1e-6);
    }
}
