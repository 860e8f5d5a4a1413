use cgmath::{vec3, Matrix4, Rad, Vector3};
use std::f32::consts::{PI, TAU};


pub const CLOUD_COUNT: usize = 2000;

pub const INNER_RADIUS: f32 = 120.0;
pub const OUTER_RADIUS: f32 = 140.0;
pub const MIN_HEIGHT: f32 = -60.0;
pub const MAX_HEIGHT: f32 = 100.0;


/// One cube of the cloud: where it sits and how it is tilted.
pub struct Particle {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
}


/// Scatters `n` particles in the annulus around the origin.
///
/// `random` must return a uniform value in `[min, max)`. Azimuth is
/// uniform over the full turn, radial distance over the annulus width,
/// height over the band, and each rotation axis over a half turn.
pub fn scatter(n: usize, random: &mut impl FnMut(f32, f32) -> f32) -> Vec<Particle> {
    (0..n)
        .map(|_| {
            let azimuth = random(0.0, TAU);
            let radius = random(INNER_RADIUS, OUTER_RADIUS);
            let height = random(MIN_HEIGHT, MAX_HEIGHT);
            Particle {
                position: vec3(radius * azimuth.cos(), height, radius * azimuth.sin()),
                rotation: vec3(random(0.0, PI), random(0.0, PI), random(0.0, PI)),
            }
        })
        .collect()
}


/// Model transform of one particle.
pub fn transform(p: &Particle) -> Matrix4<f32> {
    Matrix4::from_translation(p.position)
        * Matrix4::from_angle_x(Rad(p.rotation.x))
        * Matrix4::from_angle_y(Rad(p.rotation.y))
        * Matrix4::from_angle_z(Rad(p.rotation.z))
}


#[cfg(test)]
mod tests {
    use super::*;

    // small deterministic generator so the properties below are stable
    fn lcg(seed: u32) -> impl FnMut(f32, f32) -> f32 {
        let mut state = seed;
        move |min: f32, max: f32| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            let unit = (state >> 8) as f32 / (1u32 << 24) as f32;
            min + unit * (max - min)
        }
    }

    #[test]
    fn empty_cloud_is_valid() {
        let mut rng = lcg(7);
        assert!(scatter(0, &mut rng).is_empty());
    }

    #[test]
    fn returns_exactly_n_particles() {
        let mut rng = lcg(1);
        assert_eq!(scatter(CLOUD_COUNT, &mut rng).len(), CLOUD_COUNT);
    }

    #[test]
    fn particles_stay_inside_the_annulus() {
        let mut rng = lcg(42);
        for p in scatter(CLOUD_COUNT, &mut rng) {
            let radial = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
            assert!(
                (INNER_RADIUS - 1e-3..OUTER_RADIUS).contains(&radial),
                "radial distance {} out of range",
                radial
            );
            assert!(
                (MIN_HEIGHT..MAX_HEIGHT).contains(&p.position.y),
                "height {} out of range",
                p.position.y
            );
        }
    }

    #[test]
    fn rotations_are_half_turn_bounded() {
        let mut rng = lcg(1234);
        for p in scatter(500, &mut rng) {
            for angle in [p.rotation.x, p.rotation.y, p.rotation.z] {
                assert!((0.0..PI).contains(&angle), "angle {} out of range", angle);
            }
        }
    }

    #[test]
    fn transform_places_the_particle() {
        let p = Particle {
            position: vec3(130.0, 20.0, -5.0),
            rotation: vec3(0.0, 0.0, 0.0),
        };
        let m = transform(&p);
        assert_eq!(m.w.x, 130.0);
        assert_eq!(m.w.y, 20.0);
        assert_eq!(m.w.z, -5.0);
    }
}
