use std::f64::consts::PI;

use super::HashRng;

/// Radius of the sampling volume.
pub const PARTICLE_FIELD_RADIUS: f32 = 2.0;

/// Seed used by [`create_particles`].
pub const DEFAULT_PARTICLE_SEED: u64 = 98765;

/// Immutable per-particle start state.
///
/// Uploaded once; the vertex stage replays motion from these values and the
/// elapsed time, so nothing here is ever integrated on the CPU.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    /// xyz start position per particle.
    pub positions: Vec<f32>,
    /// xyz start velocity per particle.
    pub velocities: Vec<f32>,
    /// (life-phase offset, size scale) per particle.
    pub params: Vec<f32>,
    pub count: usize,
}

impl ParticleField {
    pub fn is_valid(&self) -> bool {
        self.positions.len() == self.count * 3
            && self.velocities.len() == self.count * 3
            && self.params.len() == self.count * 2
    }
}

/// Particle field with the default seed.
pub fn create_particles(count: usize) -> ParticleField {
    create_particles_seeded(count, DEFAULT_PARTICLE_SEED)
}

/// Samples `count` particles uniformly inside a ball of
/// [`PARTICLE_FIELD_RADIUS`].
///
/// Direction comes from `theta = 2πU`, `phi = acos(2U - 1)`; radius is
/// `U^(1/3) · R` so density is constant through the volume instead of
/// clustering at the centre. Velocities rise: x/z in `[-0.25, 0.25)`, y in
/// `[0.3, 0.8)`. Params hold a phase in `[0, 1)` and a size in `[0.5, 1.0)`.
pub fn create_particles_seeded(count: usize, seed: u64) -> ParticleField {
    let mut rng = HashRng::new(seed);
    let max_radius = PARTICLE_FIELD_RADIUS as f64;

    let mut positions = Vec::with_capacity(count * 3);
    let mut velocities = Vec::with_capacity(count * 3);
    let mut params = Vec::with_capacity(count * 2);

    for _ in 0..count {
        let theta = rng.next_f64() * PI * 2.0;
        let phi = (2.0 * rng.next_f64() - 1.0).acos();
        let r = rng.next_f64().cbrt() * max_radius;

        positions.extend_from_slice(&[
            (r * phi.sin() * theta.cos()) as f32,
            (r * phi.sin() * theta.sin()) as f32,
            (r * phi.cos()) as f32,
        ]);

        velocities.extend_from_slice(&[
            rng.range(-0.25, 0.25) as f32,
            rng.range(0.3, 0.8) as f32,
            rng.range(-0.25, 0.25) as f32,
        ]);

        params.extend_from_slice(&[rng.next_f64() as f32, rng.range(0.5, 1.0) as f32]);
    }

    ParticleField {
        positions,
        velocities,
        params,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radii(field: &ParticleField) -> Vec<f32> {
        field
            .positions
            .chunks_exact(3)
            .map(|p| (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt() / PARTICLE_FIELD_RADIUS)
            .collect()
    }

    #[test]
    fn array_lengths_match_count() {
        let field = create_particles(500);
        assert_eq!(field.count, 500);
        assert_eq!(field.positions.len(), 1500);
        assert_eq!(field.velocities.len(), 1500);
        assert_eq!(field.params.len(), 1000);
        assert!(field.is_valid());
    }

    #[test]
    fn empty_field() {
        let field = create_particles(0);
        assert!(field.is_valid());
        assert!(field.positions.is_empty());
    }

    #[test]
    fn all_positions_inside_ball() {
        let field = create_particles(2000);
        assert!(radii(&field).iter().all(|&r| r <= 1.0 + 1e-6));
    }

    #[test]
    fn radius_cdf_is_cubic() {
        // Volumetric uniformity: P(|p|/R < x) = x³. A naive linear radius
        // would put half the samples inside x = 0.5 instead of an eighth.
        let n = 10_000;
        let r = radii(&create_particles_seeded(n, 2024));
        for x in [0.25f32, 0.5, 0.75, 0.9] {
            let frac = r.iter().filter(|&&v| v < x).count() as f32 / n as f32;
            let expected = x * x * x;
            assert!(
                (frac - expected).abs() < 0.02,
                "CDF({x}) = {frac}, expected ≈ {expected}"
            );
        }
    }

    #[test]
    fn velocities_rise() {
        let field = create_particles(1000);
        let mut mean_y = 0.0;
        for v in field.velocities.chunks_exact(3) {
            assert!((-0.25..=0.25).contains(&v[0]));
            assert!((0.3..=0.8).contains(&v[1]));
            assert!((-0.25..=0.25).contains(&v[2]));
            mean_y += v[1];
        }
        mean_y /= field.count as f32;
        assert!((0.5..0.6).contains(&mean_y), "mean y velocity {mean_y}");
    }

    #[test]
    fn params_in_range() {
        let field = create_particles(1000);
        for p in field.params.chunks_exact(2) {
            assert!((0.0..=1.0).contains(&p[0]));
            assert!((0.5..=1.0).contains(&p[1]));
        }
    }

    #[test]
    fn seed_reproduces_field() {
        assert_eq!(create_particles_seeded(64, 5), create_particles_seeded(64, 5));
        assert_ne!(create_particles_seeded(64, 5), create_particles_seeded(64, 6));
    }
}
