/// Immutable, GPU-agnostic indexed triangle mesh.
///
/// Attribute arrays are flat so they upload directly as `Float32Array`-style
/// buffers. Indices are `u16` (WebGL 1 `UNSIGNED_SHORT`), which caps a mesh at
/// 65 536 unique vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// xyz per vertex.
    pub positions: Vec<f32>,
    /// xyz per vertex, same cardinality as `positions`.
    pub normals: Vec<f32>,
    /// uv per vertex.
    pub uvs: Vec<f32>,
    /// Triangle list.
    pub indices: Vec<u16>,
    /// Number of indices to draw (not the number of unique vertices).
    pub vertex_count: usize,
}

impl Geometry {
    /// Number of unique vertices.
    #[inline]
    pub fn vertex_len(&self) -> usize {
        self.positions.len() / 3
    }

    /// Checks the structural invariants: matching attribute cardinalities,
    /// a whole number of triangles and every index in range.
    pub fn is_valid(&self) -> bool {
        let n = self.vertex_len();
        self.positions.len() % 3 == 0
            && self.normals.len() == self.positions.len()
            && self.uvs.len() == n * 2
            && self.indices.len() % 3 == 0
            && self.vertex_count == self.indices.len()
            && self.indices.iter().all(|&i| (i as usize) < n)
    }
}
