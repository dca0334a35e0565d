//! Vertex normal computation from deformed cloth positions.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use loom_math::Vec3;

/// Area-weighted smooth normals for `positions` over an indexed triangle list.
///
/// Vertices with no usable adjacent area (isolated or fully degenerate)
/// fall back to `+Y`.
pub fn smooth_normals(positions: &[Vec3], triangles: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        // Magnitude is twice the triangle area.
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for normal in &mut normals {
        *normal = normal.try_normalize().unwrap_or(Vec3::Y);
    }

    normals
}
