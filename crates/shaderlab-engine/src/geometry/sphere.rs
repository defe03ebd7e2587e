use std::f32::consts::PI;

use super::Geometry;

/// Latitude/longitude sphere centred on the origin.
///
/// Emits `(rings + 1) × (segments + 1)` vertices (the seam column is
/// duplicated so UVs stay continuous) and `rings × segments × 6` indices.
/// Normals are the analytic radial direction `position / radius`.
///
/// `segments < 3` or `rings < 2` produce zero-area geometry rather than an
/// error. A grid too dense for `u16` indices is scaled down until it fits.
pub fn create_sphere(radius: f32, segments: u32, rings: u32) -> Geometry {
    let (segments, rings) = fit_index_range(segments, rings);
    let cols = segments as usize + 1;
    let rows = rings as usize + 1;

    let mut positions = Vec::with_capacity(cols * rows * 3);
    let mut normals = Vec::with_capacity(cols * rows * 3);
    let mut uvs = Vec::with_capacity(cols * rows * 2);

    for y in 0..rows {
        let v = if rings == 0 { 0.0 } else { y as f32 / rings as f32 };
        let phi = v * PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for x in 0..cols {
            let u = if segments == 0 { 0.0 } else { x as f32 / segments as f32 };
            let theta = u * PI * 2.0;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let nx = -cos_theta * sin_phi;
            let ny = cos_phi;
            let nz = sin_theta * sin_phi;

            positions.extend_from_slice(&[radius * nx, radius * ny, radius * nz]);
            normals.extend_from_slice(&[nx, ny, nz]);
            uvs.extend_from_slice(&[u, v]);
        }
    }

    let mut indices = Vec::with_capacity(rings as usize * segments as usize * 6);
    for y in 0..rings as usize {
        for x in 0..segments as usize {
            let a = (y * cols + x) as u16;
            let b = a + cols as u16;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    let vertex_count = indices.len();
    Geometry {
        positions,
        normals,
        uvs,
        indices,
        vertex_count,
    }
}

/// Largest vertex grid addressable by `u16` indices.
const MAX_GRID_VERTICES: u64 = u16::MAX as u64 + 1;

/// Shrinks `segments` and `rings` proportionally so that
/// `(segments + 1) * (rings + 1)` fits [`MAX_GRID_VERTICES`].
///
/// Neither count drops below the smallest non-degenerate sphere unless it
/// was already there.
fn fit_index_range(segments: u32, rings: u32) -> (u32, u32) {
    let cols = u64::from(segments) + 1;
    let rows = u64::from(rings) + 1;
    let total = cols.saturating_mul(rows);
    if total <= MAX_GRID_VERTICES {
        return (segments, rings);
    }

    let scale = (MAX_GRID_VERTICES as f64 / total as f64).sqrt();
    let scaled = |n: u64, floor: u64| ((n as f64 * scale) as u64).max(floor.min(n));
    let mut cols = scaled(cols, 4);
    let mut rows = scaled(rows, 3);
    // At most the smaller side was raised to its floor; trim the larger one.
    if cols >= rows {
        cols = cols.min(MAX_GRID_VERTICES / rows);
    } else {
        rows = rows.min(MAX_GRID_VERTICES / cols);
    }

    log::warn!(
        "sphere {segments}x{rings} exceeds u16 indices; using {}x{}",
        cols - 1,
        rows - 1
    );
    ((cols - 1) as u32, (rows - 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn index_count_and_bound() {
        for (segs, rings) in [(3, 2), (8, 6), (64, 48)] {
            let s = create_sphere(1.2, segs, rings);
            assert_eq!(s.indices.len(), (rings * segs * 6) as usize);
            assert_eq!(s.vertex_len(), ((rings + 1) * (segs + 1)) as usize);
            let n = s.positions.len() / 3;
            assert!(s.indices.iter().all(|&i| (i as usize) < n));
            assert!(s.is_valid());
        }
    }

    #[test]
    fn normals_are_unit_and_radial() {
        let radius = 1.7;
        let s = create_sphere(radius, 24, 16);
        for v in 0..s.vertex_len() {
            let p = &s.positions[v * 3..v * 3 + 3];
            let n = &s.normals[v * 3..v * 3 + 3];
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert_relative_eq!(len, 1.0, epsilon = 1e-5);
            for k in 0..3 {
                assert_relative_eq!(n[k], p[k] / radius, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn poles_and_uv_range() {
        let s = create_sphere(2.0, 8, 4);
        // First row is the north pole, last row the south pole.
        assert_relative_eq!(s.positions[1], 2.0, epsilon = 1e-6);
        let last = s.vertex_len() - 1;
        assert_relative_eq!(s.positions[last * 3 + 1], -2.0, epsilon = 1e-5);
        assert!(s.uvs.iter().all(|c| (0.0..=1.0).contains(c)));
        assert_eq!(&s.uvs[s.uvs.len() - 2..], &[1.0, 1.0]);
    }

    #[test]
    fn densest_u16_grid_is_kept() {
        let s = create_sphere(1.0, 255, 255);
        assert_eq!(s.vertex_len(), 65_536);
        assert_eq!(s.indices.len(), 255 * 255 * 6);
        assert_eq!(s.indices.iter().copied().max(), Some(u16::MAX));
        assert!(s.is_valid());
    }

    #[test]
    fn oversized_grid_is_scaled_to_fit() {
        for (segs, rings) in [(300, 300), (100_000, 4), (4, 100_000), (u32::MAX, u32::MAX)] {
            let s = create_sphere(1.0, segs, rings);
            assert!(s.vertex_len() <= 65_536, "{segs}x{rings}");
            assert!(!s.indices.is_empty(), "{segs}x{rings}");
            assert!(s.is_valid(), "{segs}x{rings}");
            // The last row is still the south pole.
            let last = s.vertex_len() - 1;
            assert_relative_eq!(s.positions[last * 3 + 1], -1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn long_thin_grid_within_range_is_untouched() {
        let s = create_sphere(1.0, 1000, 10);
        assert_eq!(s.vertex_len(), 1001 * 11);
        assert_eq!(s.indices.len(), 1000 * 10 * 6);
    }

    #[test]
    fn degenerate_parameters_do_not_panic() {
        let s = create_sphere(1.0, 0, 0);
        assert!(s.indices.is_empty());
        assert_eq!(s.vertex_count, 0);
        assert_eq!(s.vertex_len(), 1);
    }
}
