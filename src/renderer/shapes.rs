//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle (two triangles)
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    let tl = Vertex::new(min.x, min.y, color);
    let tr = Vertex::new(max.x, min.y, color);
    let bl = Vertex::new(min.x, max.y, color);
    let br = Vertex::new(max.x, max.y, color);
    vec![tl, bl, tr, tr, bl, br]
}

/// Rectangle outline made of four filled strips of the given thickness
pub fn rect_outline(min: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
    let inner_h = size.y - 2.0 * t;
    let mut vertices = Vec::with_capacity(24);
    // Top, bottom, left, right
    vertices.extend(rect(min, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        Vec2::new(min.x, min.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x, min.y + t),
        Vec2::new(t, inner_h),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x + size.x - t, min.y + t),
        Vec2::new(t, inner_h),
        color,
    ));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(
            center + radius * Vec2::new(theta1.cos(), theta1.sin()),
            color,
        ));
        vertices.push(Vertex::at(
            center + radius * Vec2::new(theta2.cos(), theta2.sin()),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(60.0, 20.0), WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 70.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 40.0);
    }

    #[test]
    fn test_outline_stays_inside_rect() {
        let v = rect_outline(Vec2::new(0.0, 50.0), Vec2::new(60.0, 20.0), 2.0, WHITE);
        assert_eq!(v.len(), 24);
        assert!(v.iter().all(|v| {
            let p = v.pos();
            p.x >= 0.0 && p.x <= 60.0 && p.y >= 50.0 && p.y <= 70.0
        }));
    }

    #[test]
    fn test_circle_radius() {
        let center = Vec2::new(200.0, 200.0);
        let v = circle(center, 10.0, WHITE, 16);
        assert_eq!(v.len(), 48);
        for tri in v.chunks(3) {
            assert_eq!(tri[0].pos(), center);
            assert!((tri[1].pos().distance(center) - 10.0).abs() < 1e-3);
        }
    }
}
