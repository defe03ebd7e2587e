use super::Geometry;

/// Outward normal of each face, in emission order.
const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],  // front
    [0.0, 0.0, -1.0], // back
    [0.0, 1.0, 0.0],  // top
    [0.0, -1.0, 0.0], // bottom
    [1.0, 0.0, 0.0],  // right
    [-1.0, 0.0, 0.0], // left
];

/// Corners of each face in unit-sign form, counter-clockwise seen from outside.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
    [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
];

const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Axis-aligned cube spanning `[-size/2, size/2]` on every axis.
///
/// Vertices are not shared between faces so each face keeps a flat normal:
/// 24 vertices, 36 indices.
pub fn create_cube(size: f32) -> Geometry {
    let h = size / 2.0;

    let mut positions = Vec::with_capacity(24 * 3);
    let mut normals = Vec::with_capacity(24 * 3);
    let mut uvs = Vec::with_capacity(24 * 2);
    let mut indices = Vec::with_capacity(36);

    for (face, (corners, normal)) in FACE_CORNERS.iter().zip(FACE_NORMALS).enumerate() {
        for (corner, uv) in corners.iter().zip(FACE_UVS) {
            positions.extend(corner.iter().map(|c| c * h));
            normals.extend_from_slice(&normal);
            uvs.extend_from_slice(&uv);
        }

        let base = (face * 4) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_is_fixed() {
        for size in [0.1, 1.0, 1.5, 40.0] {
            let cube = create_cube(size);
            assert_eq!(cube.indices.len(), 36);
            assert_eq!(cube.positions.len(), 72);
            assert_eq!(cube.normals.len(), 72);
            assert_eq!(cube.uvs.len(), 48);
            assert_eq!(cube.vertex_count, 36);
            assert!(cube.is_valid());
        }
    }

    #[test]
    fn extent_is_half_size() {
        let cube = create_cube(1.5);
        assert!(cube.positions.iter().all(|p| p.abs() == 0.75));
    }

    #[test]
    fn face_vertices_lie_on_their_normal_plane() {
        let cube = create_cube(2.0);
        for v in 0..24 {
            let p = &cube.positions[v * 3..v * 3 + 3];
            let n = &cube.normals[v * 3..v * 3 + 3];
            let d: f32 = p.iter().zip(n).map(|(a, b)| a * b).sum();
            assert_eq!(d, 1.0, "vertex {v} is off its face plane");
        }
    }

    #[test]
    fn front_face_winds_counter_clockwise() {
        let cube = create_cube(2.0);
        let p = |i: usize| {
            let i = cube.indices[i] as usize;
            [cube.positions[i * 3], cube.positions[i * 3 + 1], cube.positions[i * 3 + 2]]
        };
        let (a, b, c) = (p(0), p(1), p(2));
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let z = e1[0] * e2[1] - e1[1] * e2[0];
        assert!(z > 0.0);
    }
}
