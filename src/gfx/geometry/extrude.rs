//! # Polygon Extrusion
//!
//! Extrudes a closed outline (with optional holes) from the XZ plane downward
//! along -Y. The top cap sits at `y = 0` and the bottom cap at `y = -depth`,
//! so callers lift the resulting mesh by `depth` to stand it on the ground.

use cgmath::{InnerSpace, Vector3};

use super::{GeometryData, GeometryError, Outline};

/// Extrudes `shape` by `depth`, cutting every outline in `holes` out of it.
///
/// Caps are triangulated with earcut; side walls get flat per-face normals
/// pointing away from the solid, on both the outer boundary and the holes.
pub fn extrude_polygon(
    shape: &Outline,
    holes: &[Outline],
    depth: f32,
) -> Result<GeometryData, GeometryError> {
    for ring in std::iter::once(shape).chain(holes) {
        if ring.len() < 3 {
            return Err(GeometryError::TooFewPoints(ring.len()));
        }
    }

    let rings: Vec<&Outline> = std::iter::once(shape).chain(holes).collect();
    let points: Vec<Vector3<f32>> = rings
        .iter()
        .flat_map(|ring| ring.points().iter().copied())
        .collect();

    let mut flat: Vec<f64> = Vec::with_capacity(points.len() * 2);
    for point in &points {
        flat.push(point.x as f64);
        flat.push(point.z as f64);
    }

    let mut hole_indices = Vec::with_capacity(holes.len());
    let mut offset = shape.len();
    for hole in holes {
        hole_indices.push(offset);
        offset += hole.len();
    }

    let triangles = earcutr::earcut(&flat, &hole_indices, 2)
        .map_err(|e| GeometryError::Triangulation(format!("{:?}", e)))?;

    let mut data = GeometryData::new();

    // Top cap
    let up = Vector3::new(0.0, 1.0, 0.0);
    let top_base = data.vertex_count() as u32;
    for point in &points {
        data.push_vertex([point.x, 0.0, point.z], up.into(), [point.x, point.z]);
    }
    for triangle in triangles.chunks_exact(3) {
        push_oriented_triangle(
            &mut data,
            [
                top_base + triangle[0] as u32,
                top_base + triangle[1] as u32,
                top_base + triangle[2] as u32,
            ],
            up,
        );
    }

    // Bottom cap
    let down = -up;
    let bottom_base = data.vertex_count() as u32;
    for point in &points {
        data.push_vertex([point.x, -depth, point.z], down.into(), [point.x, point.z]);
    }
    for triangle in triangles.chunks_exact(3) {
        push_oriented_triangle(
            &mut data,
            [
                bottom_base + triangle[0] as u32,
                bottom_base + triangle[1] as u32,
                bottom_base + triangle[2] as u32,
            ],
            down,
        );
    }

    // Side walls
    for (ring_index, ring) in rings.iter().enumerate() {
        let is_hole = ring_index > 0;
        let counter_clockwise = ring.signed_area() > 0.0;
        // Outward is right of travel for a CCW outer ring, left for a CCW hole.
        let sign = if counter_clockwise != is_hole { 1.0 } else { -1.0 };

        let ring_points = ring.points();
        let n = ring_points.len();
        for i in 0..n {
            let a = ring_points[i];
            let b = ring_points[(i + 1) % n];
            let edge = b - a;
            if edge.magnitude2() == 0.0 {
                continue;
            }

            let normal = (Vector3::new(edge.z, 0.0, -edge.x) * sign).normalize();
            let n_arr: [f32; 3] = normal.into();
            let u0 = i as f32 / n as f32;
            let u1 = (i + 1) as f32 / n as f32;

            let top_a = data.push_vertex([a.x, 0.0, a.z], n_arr, [u0, 0.0]);
            let top_b = data.push_vertex([b.x, 0.0, b.z], n_arr, [u1, 0.0]);
            let bottom_b = data.push_vertex([b.x, -depth, b.z], n_arr, [u1, 1.0]);
            let bottom_a = data.push_vertex([a.x, -depth, a.z], n_arr, [u0, 1.0]);

            push_oriented_triangle(&mut data, [top_a, bottom_a, bottom_b], normal);
            push_oriented_triangle(&mut data, [top_a, bottom_b, top_b], normal);
        }
    }

    Ok(data)
}

/// Pushes a triangle, swapping winding if needed so it faces `facing`
fn push_oriented_triangle(data: &mut GeometryData, triangle: [u32; 3], facing: Vector3<f32>) {
    let [a, b, c] = triangle;
    let pa = Vector3::from(data.vertices[a as usize]);
    let pb = Vector3::from(data.vertices[b as usize]);
    let pc = Vector3::from(data.vertices[c as usize]);

    let face_normal = (pb - pa).cross(pc - pa);
    if face_normal.dot(facing) < 0.0 {
        data.indices.extend_from_slice(&[a, c, b]);
    } else {
        data.indices.extend_from_slice(&[a, b, c]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::make_bevelled_rectangle;

    fn square(x: f32, z: f32, size: f32) -> Outline {
        // counter-clockwise in (x, z)
        Outline::new(vec![
            Vector3::new(x, 0.0, z),
            Vector3::new(x + size, 0.0, z),
            Vector3::new(x + size, 0.0, z + size),
            Vector3::new(x, 0.0, z + size),
        ])
    }

    fn facing_area(data: &GeometryData, facing: Vector3<f32>) -> f32 {
        data.indices
            .chunks_exact(3)
            .map(|t| {
                let a = Vector3::from(data.vertices[t[0] as usize]);
                let b = Vector3::from(data.vertices[t[1] as usize]);
                let c = Vector3::from(data.vertices[t[2] as usize]);
                (b - a).cross(c - a)
            })
            .filter(|n| n.normalize().dot(facing) > 0.99)
            .map(|n| n.magnitude() * 0.5)
            .sum()
    }

    #[test]
    fn test_square_with_hole_cap_area() {
        let outer = square(0.0, 0.0, 10.0);
        let hole = square(3.0, 3.0, 4.0);
        let data = extrude_polygon(&outer, &[hole], 3.0).unwrap();

        let top = facing_area(&data, Vector3::new(0.0, 1.0, 0.0));
        let bottom = facing_area(&data, Vector3::new(0.0, -1.0, 0.0));
        assert!((top - 84.0).abs() < 1e-3, "top area {}", top);
        assert!((bottom - 84.0).abs() < 1e-3, "bottom area {}", bottom);
    }

    #[test]
    fn test_side_walls_face_away_from_solid() {
        let outer = square(0.0, 0.0, 10.0);
        let hole = square(3.0, 3.0, 4.0);
        let data = extrude_polygon(&outer, &[hole], 2.0).unwrap();

        // 4 outer + 4 hole edges, 4 vertices each, after the two caps
        let side_start = 16;
        assert_eq!(data.vertex_count(), side_start + 8 * 4);

        let center = Vector3::new(5.0, -1.0, 5.0);
        for (i, normal) in data.normals[side_start..].iter().enumerate() {
            let position = Vector3::from(data.vertices[side_start + i]);
            let normal = Vector3::from(*normal);
            let to_center = center - position;
            let inner = position.x > 2.9 && position.x < 7.1 && position.z > 2.9 && position.z < 7.1;
            if inner {
                // hole walls look into the hole
                assert!(normal.dot(to_center) > 0.0);
            } else {
                assert!(normal.dot(to_center) < 0.0);
            }
        }
    }

    #[test]
    fn test_depth_span() {
        let shape = make_bevelled_rectangle(30.0, 20.0, 2.0, 6);
        let data = extrude_polygon(&shape, &[], 3.0).unwrap();
        let min_y = data.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        let max_y = data.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_y, -3.0);
        assert_eq!(max_y, 0.0);
        assert_eq!(data.vertices.len(), data.normals.len());
        assert_eq!(data.vertices.len(), data.tex_coords.len());
    }

    #[test]
    fn test_rejects_degenerate_rings() {
        let line = Outline::new(vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)]);
        assert!(matches!(
            extrude_polygon(&line, &[], 1.0),
            Err(GeometryError::TooFewPoints(2))
        ));
    }
}
