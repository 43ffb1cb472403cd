// motion.rs - Position, gravity, bounce and life decay
//
// One call per entity per frame. Velocities are in units/frame,
// gravity in units/frame^2.

/// Advance a position by one frame of velocity
#[inline(always)]
pub fn integrate(x: &mut f32, y: &mut f32, vx: f32, vy: f32) {
    *x += vx;
    *y += vy;
}

/// Accelerate downward (+y is down on the canvas)
#[inline(always)]
pub fn fall(vy: &mut f32, gravity: f32) {
    *vy += gravity;
}

/// Velocity after hitting the ground: reversed and scaled
#[inline]
pub fn bounce(vy: f32, restitution: f32) -> f32 {
    -vy * restitution
}

/// Burn one frame of life. Returns false once the entity is spent.
#[inline(always)]
pub fn decay(life: &mut f32, rate: f32) -> bool {
    *life -= rate;
    *life > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_then_fall() {
        let (mut x, mut y, mut vy) = (10.0, 20.0, -2.0);
        integrate(&mut x, &mut y, 1.5, vy);
        fall(&mut vy, 0.25);

        assert_relative_eq!(x, 11.5);
        assert_relative_eq!(y, 18.0);
        assert_relative_eq!(vy, -1.75);
    }

    #[test]
    fn test_bounce_reverses_and_damps() {
        assert_relative_eq!(bounce(6.0, 0.4), -2.4, epsilon = 1e-6);
        assert_relative_eq!(bounce(-1.0, 0.4), 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_decay_reports_spent_at_zero() {
        let mut life = 0.1;
        assert!(decay(&mut life, 0.05));
        assert!(!decay(&mut life, 0.05 + 1e-4));
        assert!(life <= 0.0);
    }
}
