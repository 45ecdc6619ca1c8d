use bytemuck::{Pod, Zeroable};

use super::Topology;

/// Interleaved position + color vertex (24 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex3 {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex3 {
    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// 3D vertex data with optional `u16` indices.
///
/// An empty index list means the vertices are drawn in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex3>,
    pub indices: Vec<u16>,
    pub topology: Topology,
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const GRAY: [f32; 3] = [0.3, 0.3, 0.3];

impl Mesh {
    /// Number of vertices (or indices) submitted per draw.
    #[inline]
    pub fn element_count(&self) -> usize {
        if self.indices.is_empty() { self.vertices.len() } else { self.indices.len() }
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Unit cube centered at the origin, one flat color per face
    /// (front red, back green, top blue, bottom yellow, right magenta, left cyan).
    pub fn cube() -> Self {
        let v = |x: f32, y: f32, z: f32, c: [f32; 3]| Vertex3::new([x, y, z], c);
        let vertices = vec![
            // front
            v(-0.5, -0.5, 0.5, RED),
            v(0.5, -0.5, 0.5, RED),
            v(0.5, 0.5, 0.5, RED),
            v(-0.5, 0.5, 0.5, RED),
            // back
            v(-0.5, -0.5, -0.5, GREEN),
            v(0.5, -0.5, -0.5, GREEN),
            v(0.5, 0.5, -0.5, GREEN),
            v(-0.5, 0.5, -0.5, GREEN),
            // top
            v(-0.5, 0.5, -0.5, BLUE),
            v(0.5, 0.5, -0.5, BLUE),
            v(0.5, 0.5, 0.5, BLUE),
            v(-0.5, 0.5, 0.5, BLUE),
            // bottom
            v(-0.5, -0.5, -0.5, YELLOW),
            v(0.5, -0.5, -0.5, YELLOW),
            v(0.5, -0.5, 0.5, YELLOW),
            v(-0.5, -0.5, 0.5, YELLOW),
            // right
            v(0.5, -0.5, -0.5, MAGENTA),
            v(0.5, 0.5, -0.5, MAGENTA),
            v(0.5, 0.5, 0.5, MAGENTA),
            v(0.5, -0.5, 0.5, MAGENTA),
            // left
            v(-0.5, -0.5, -0.5, CYAN),
            v(-0.5, 0.5, -0.5, CYAN),
            v(-0.5, 0.5, 0.5, CYAN),
            v(-0.5, -0.5, 0.5, CYAN),
        ];
        let indices = vec![
            0, 1, 2, 0, 2, 3, // front
            4, 6, 5, 4, 7, 6, // back
            8, 9, 10, 8, 10, 11, // top
            12, 14, 13, 12, 15, 14, // bottom
            16, 17, 18, 16, 18, 19, // right
            20, 22, 21, 20, 23, 22, // left
        ];
        Self { vertices, indices, topology: Topology::Triangles }
    }

    /// Gray 6×6 floor quad just below the cube (`y = -0.51`).
    pub fn ground_plane() -> Self {
        let y = -0.51;
        let vertices = vec![
            Vertex3::new([-3.0, y, -3.0], GRAY),
            Vertex3::new([3.0, y, -3.0], GRAY),
            Vertex3::new([3.0, y, 3.0], GRAY),
            Vertex3::new([-3.0, y, 3.0], GRAY),
        ];
        Self { vertices, indices: vec![0, 1, 2, 0, 2, 3], topology: Topology::Triangles }
    }

    /// World axes of length 2 as a line list: X red, Y green, Z blue.
    pub fn axes() -> Self {
        let o = [0.0, 0.0, 0.0];
        let vertices = vec![
            Vertex3::new(o, RED),
            Vertex3::new([2.0, 0.0, 0.0], RED),
            Vertex3::new(o, GREEN),
            Vertex3::new([0.0, 2.0, 0.0], GREEN),
            Vertex3::new(o, BLUE),
            Vertex3::new([0.0, 0.0, 2.0], BLUE),
        ];
        Self { vertices, indices: Vec::new(), topology: Topology::Lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex3>(), 24);
    }

    #[test]
    fn cube_counts_and_index_range() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.element_count(), 36);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
    }

    #[test]
    fn cube_faces_are_flat_colored() {
        let cube = Mesh::cube();
        for face in cube.vertices.chunks_exact(4) {
            assert!(face.iter().all(|v| v.color == face[0].color));
        }
    }

    #[test]
    fn cube_bounds_are_unit() {
        for v in Mesh::cube().vertices {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn plane_sits_below_cube() {
        let plane = Mesh::ground_plane();
        assert!(plane.vertices.iter().all(|v| v.position[1] < -0.5));
        assert_eq!(plane.element_count(), 6);
    }

    #[test]
    fn axes_are_unindexed_lines() {
        let axes = Mesh::axes();
        assert!(!axes.is_indexed());
        assert_eq!(axes.topology, Topology::Lines);
        assert_eq!(axes.element_count(), 6);
    }
}
