//! Mesh geometry helpers.
//!
//! Used to generate vertex normals for meshes loaded without them.

use glam::{UVec3, Vec3};
use crate::error::{Error, Result};

/// Cotangent of the angle at `pivot` in the triangle (`pivot`, `a`, `b`).
pub fn cotangent(pivot: Vec3, a: Vec3, b: Vec3) -> f32 {
    let pa = (a - pivot).normalize();
    let pb = (b - pivot).normalize();

    let sin = pa.cross(pb).length();
    let cos = pa.dot(pb);

    cos / sin
}

/// Mixed Voronoi area of each vertex of the triangle (`a`, `b`, `c`).
///
/// For a non-obtuse triangle the three areas are the Voronoi regions and sum
/// to the triangle area. For an obtuse triangle the obtuse vertex gets half
/// of the area and the two others a quarter each.
pub fn voronoi_triangle_areas(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let area = (b - a).cross(c - a).length() * 0.5;

    if (b - a).dot(c - a) < 0.0 {
        return Vec3::new(0.5 * area, 0.25 * area, 0.25 * area);
    }
    if (a - b).dot(c - b) < 0.0 {
        return Vec3::new(0.25 * area, 0.5 * area, 0.25 * area);
    }
    if (a - c).dot(b - c) < 0.0 {
        return Vec3::new(0.25 * area, 0.25 * area, 0.5 * area);
    }

    let ab = (b - a).length_squared();
    let ac = (c - a).length_squared();
    let bc = (c - b).length_squared();

    let cot_a = cotangent(a, b, c);
    let cot_b = cotangent(b, a, c);
    let cot_c = cotangent(c, a, b);

    Vec3::new(
        0.125 * (ab * cot_c + ac * cot_b),
        0.125 * (ab * cot_c + bc * cot_a),
        0.125 * (ac * cot_b + bc * cot_a),
    )
}

/// Area-weighted smooth normals, one per vertex.
///
/// Each face normal contributes to its three vertices weighted by the
/// vertex's Voronoi area in that face. Faces with zero area contribute
/// nothing; vertices no face references get `Vec3::ZERO`.
///
/// # Errors
///
/// [`Error::IndexOutOfBounds`] if a face references a vertex past the end
/// of `vertices`.
pub fn compute_smooth_normals(indices: &[UVec3], vertices: &[Vec3]) -> Result<Vec<Vec3>> {
    let mut accumulated = vec![Vec3::ZERO; vertices.len()];

    for face in indices {
        let corners = [face.x as usize, face.y as usize, face.z as usize];
        if let Some(&index) = corners.iter().find(|&&i| i >= vertices.len()) {
            crate::rc_error!(
                "rendercore::geometry",
                "Face {} references vertex {} but only {} vertices exist",
                face, index, vertices.len()
            );
            return Err(Error::IndexOutOfBounds { index, len: vertices.len() });
        }

        let [ia, ib, ic] = corners;
        let (a, b, c) = (vertices[ia], vertices[ib], vertices[ic]);

        let face_normal = (b - a).cross(c - a).normalize_or_zero();
        if face_normal == Vec3::ZERO {
            continue;
        }

        let weights = voronoi_triangle_areas(a, b, c);
        accumulated[ia] += face_normal * weights.x;
        accumulated[ib] += face_normal * weights.y;
        accumulated[ic] += face_normal * weights.z;
    }

    Ok(accumulated.into_iter().map(Vec3::normalize_or_zero).collect())
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
