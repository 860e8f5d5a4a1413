use cgmath::{vec3, Vector3};
use std::f32::consts::TAU;


pub const RING_COUNT: usize = 4;
pub const RING_RADIUS: f32 = 100.0;

/// Radians per second each ring object spins about its own vertical axis.
pub const OBJECT_SPIN_RATE: f32 = 0.5;
/// Radians per second the particle cloud rotates as a single unit.
pub const CLOUD_SPIN_RATE: f32 = 0.01;


/// Angle of ring slot `i`, in asset-index order starting at zero.
pub fn ring_angle(i: usize) -> f32 {
    i as f32 * (TAU / RING_COUNT as f32)
}

/// Position of ring slot `i` on the circle in the horizontal plane.
pub fn ring_position(i: usize) -> Vector3<f32> {
    let a = ring_angle(i);
    vec3(RING_RADIUS * a.cos(), 0.0, RING_RADIUS * a.sin())
}


/// Per-frame animation state. Everything else in the scene is immutable
/// after assembly; the render loop mutates only these angles.
pub struct Motion {
    pub object_angles: [f32; RING_COUNT],
    pub ring_spin: f32,
    pub cloud_angle: f32,
}

impl Motion {
    pub fn new() -> Self {
        Self {
            object_angles: [0.0; RING_COUNT],
            ring_spin: 0.0,
            cloud_angle: 0.0,
        }
    }

    /// Advances all rotations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for angle in self.object_angles.iter_mut() {
            *angle += OBJECT_SPIN_RATE * dt;
        }
        self.cloud_angle += CLOUD_SPIN_RATE * dt;
    }

    /// Applies a user drag to the ring as a whole.
    pub fn spin(&mut self, delta: f32) {
        self.ring_spin += delta;
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn ring_slots_sit_at_quarter_turns() {
        assert_eq!(ring_angle(0), 0.0);
        assert!(close(ring_angle(1), PI / 2.0));
        assert!(close(ring_angle(2), PI));
        assert!(close(ring_angle(3), 3.0 * PI / 2.0));
    }

    #[test]
    fn ring_positions_lie_on_the_circle() {
        let expected = [
            vec3(100.0, 0.0, 0.0),
            vec3(0.0, 0.0, 100.0),
            vec3(-100.0, 0.0, 0.0),
            vec3(0.0, 0.0, -100.0),
        ];
        for (i, e) in expected.iter().enumerate() {
            let p = ring_position(i);
            assert!(close(p.x, e.x) && close(p.y, e.y) && close(p.z, e.z), "slot {}: {:?}", i, p);
        }
    }

    #[test]
    fn advance_rotates_objects_and_cloud_proportionally() {
        let mut m = Motion::new();
        m.advance(2.0);
        for angle in m.object_angles {
            assert!(close(angle, 1.0));
        }
        assert!(close(m.cloud_angle, 0.02));
        assert_eq!(m.ring_spin, 0.0);
    }

    #[test]
    fn advance_accumulates() {
        let mut m = Motion::new();
        m.advance(0.5);
        m.advance(0.5);
        for angle in m.object_angles {
            assert!(close(angle, 0.5));
        }
        assert!(close(m.cloud_angle, 0.01));
    }

    #[test]
    fn spin_only_moves_the_ring() {
        let mut m = Motion::new();
        m.spin(0.3);
        m.spin(-0.1);
        assert!(close(m.ring_spin, 0.2));
        assert_eq!(m.object_angles, [0.0; RING_COUNT]);
        assert_eq!(m.cloud_angle, 0.0);
    }
}
