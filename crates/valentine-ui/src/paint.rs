//! Shape painters for the card's artwork.

use std::f32::consts::TAU;

use egui::emath::Rot2;
use egui::epaint::{Mesh, Vertex};
use egui::{pos2, vec2, Color32, Painter, Pos2, Rect, Shape, Stroke, TextureId, Vec2};

pub const AMBER_50: Color32 = Color32::from_rgb(255, 251, 235);
pub const YELLOW_50: Color32 = Color32::from_rgb(254, 252, 232);
pub const ORANGE_50: Color32 = Color32::from_rgb(255, 247, 237);
pub const AMBER_500: Color32 = Color32::from_rgb(245, 158, 11);
pub const AMBER_600: Color32 = Color32::from_rgb(217, 119, 6);
pub const RED_500: Color32 = Color32::from_rgb(239, 68, 68);
pub const PINK_500: Color32 = Color32::from_rgb(236, 72, 153);
pub const ROSE_500: Color32 = Color32::from_rgb(244, 63, 94);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);
pub const GRAY_500: Color32 = Color32::from_rgb(107, 114, 128);
pub const BLUE_900: Color32 = Color32::from_rgb(30, 58, 138);
pub const BLUE_700: Color32 = Color32::from_rgb(29, 78, 216);

/// Scale, then rotate, then translate to `origin`.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub origin: Pos2,
    pub scale: Vec2,
    pub rotation: Rot2,
}

impl Placement {
    pub fn new(origin: Pos2, scale: Vec2, degrees: f32) -> Self {
        Self {
            origin,
            scale,
            rotation: Rot2::from_angle(degrees.to_radians()),
        }
    }

    pub fn apply(&self, local: Vec2) -> Pos2 {
        self.origin + self.rotation * vec2(local.x * self.scale.x, local.y * self.scale.y)
    }
}

/// Bright top-left to warm bottom-right wash of the daytime scene.
pub fn daylight(painter: &Painter, rect: Rect) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), AMBER_50);
    mesh.colored_vertex(rect.right_top(), YELLOW_50);
    mesh.colored_vertex(rect.left_bottom(), YELLOW_50);
    mesh.colored_vertex(rect.right_bottom(), ORANGE_50);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(Shape::mesh(mesh));
}

/// Top-to-bottom gradient through evenly spaced `stops`.
pub fn vertical_gradient(painter: &Painter, rect: Rect, stops: &[Color32], opacity: f32) {
    if stops.len() < 2 {
        return;
    }
    let mut mesh = Mesh::default();
    let bands = (stops.len() - 1) as f32;
    for (index, color) in stops.iter().enumerate() {
        let y = rect.top() + rect.height() * index as f32 / bands;
        let color = color.gamma_multiply(opacity);
        mesh.colored_vertex(pos2(rect.left(), y), color);
        mesh.colored_vertex(pos2(rect.right(), y), color);
    }
    for band in 0..stops.len() as u32 - 1 {
        let top = band * 2;
        mesh.add_triangle(top, top + 1, top + 2);
        mesh.add_triangle(top + 1, top + 3, top + 2);
    }
    painter.add(Shape::mesh(mesh));
}

/// Left-to-right band that fades in and out, used for the accept button shine.
pub fn horizontal_glint(painter: &Painter, rect: Rect, color: Color32) {
    let clear = Color32::TRANSPARENT;
    let mut mesh = Mesh::default();
    for (x, tint) in [(rect.left(), clear), (rect.center().x, color), (rect.right(), clear)] {
        mesh.colored_vertex(pos2(x, rect.top()), tint);
        mesh.colored_vertex(pos2(x, rect.bottom()), tint);
    }
    for band in 0..2u32 {
        let left = band * 2;
        mesh.add_triangle(left, left + 2, left + 1);
        mesh.add_triangle(left + 2, left + 3, left + 1);
    }
    painter.add(Shape::mesh(mesh));
}

/// Classic heart curve, `size` points across its bounding box.
pub fn heart(painter: &Painter, center: Pos2, size: f32, degrees: f32, fill: Color32) {
    const SEGMENTS: usize = 48;
    // The raw curve spans roughly 32 x 30 units.
    let placement = Placement::new(center, Vec2::splat(size / 34.0), degrees);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(placement.apply(Vec2::ZERO), fill);
    for step in 0..SEGMENTS {
        let t = TAU * step as f32 / SEGMENTS as f32;
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        mesh.colored_vertex(placement.apply(vec2(x, -y)), fill);
    }
    for step in 0..SEGMENTS as u32 {
        let next = (step + 1) % SEGMENTS as u32;
        mesh.add_triangle(0, step + 1, next + 1);
    }
    painter.add(Shape::mesh(mesh));
}

fn ellipse(placement: &Placement, center: Vec2, radii: Vec2, degrees: f32) -> Vec<Pos2> {
    const SEGMENTS: usize = 32;
    let tilt = Rot2::from_angle(degrees.to_radians());
    (0..SEGMENTS)
        .map(|step| {
            let angle = TAU * step as f32 / SEGMENTS as f32;
            let rim = tilt * vec2(radii.x * angle.cos(), radii.y * angle.sin());
            placement.apply(center + rim)
        })
        .collect()
}

fn quadratic(placement: &Placement, points: [Vec2; 3]) -> Vec<Pos2> {
    const STEPS: usize = 12;
    (0..=STEPS)
        .map(|step| {
            let t = step as f32 / STEPS as f32;
            let u = 1.0 - t;
            placement.apply(points[0] * (u * u) + points[1] * (2.0 * u * t) + points[2] * (t * t))
        })
        .collect()
}

/// Butterfly in a 100 x 100 unit box centred on `placement.origin`.
pub fn butterfly(painter: &Painter, placement: &Placement, opacity: f32) {
    let fill = Color32::WHITE.gamma_multiply(0.9 * opacity);
    let at = |x: f32, y: f32| vec2(x - 50.0, y - 50.0);

    for (center, tilt) in [(at(30.0, 40.0), -20.0), (at(70.0, 40.0), 20.0)] {
        let wing = ellipse(placement, center, vec2(25.0, 35.0), tilt);
        painter.add(Shape::convex_polygon(wing, fill, Stroke::NONE));
    }
    let body = ellipse(placement, at(50.0, 50.0), vec2(4.0, 20.0), 0.0);
    painter.add(Shape::convex_polygon(body, fill, Stroke::NONE));

    let width = 1.5 * placement.scale.y;
    let antennae = [
        [at(48.0, 35.0), at(45.0, 25.0), at(42.0, 20.0)],
        [at(52.0, 35.0), at(55.0, 25.0), at(58.0, 20.0)],
    ];
    for tip in antennae {
        painter.add(Shape::line(quadratic(placement, tip), Stroke::new(width, fill)));
    }
}

/// Disc textured with `texture`, for round artwork such as the moon.
pub fn textured_disc(painter: &Painter, center: Pos2, radius: f32, texture: TextureId, tint: Color32) {
    const SEGMENTS: usize = 64;
    let mut mesh = Mesh::with_texture(texture);
    mesh.vertices.push(Vertex {
        pos: center,
        uv: pos2(0.5, 0.5),
        color: tint,
    });
    for step in 0..SEGMENTS {
        let angle = TAU * step as f32 / SEGMENTS as f32;
        let (sin, cos) = angle.sin_cos();
        mesh.vertices.push(Vertex {
            pos: center + vec2(cos, sin) * radius,
            uv: pos2(0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
            color: tint,
        });
    }
    for step in 0..SEGMENTS as u32 {
        let next = (step + 1) % SEGMENTS as u32;
        mesh.add_triangle(0, step + 1, next + 1);
    }
    painter.add(Shape::mesh(mesh));
}

/// Soft halo: stacked translucent discs.
pub fn glow(painter: &Painter, center: Pos2, radius: f32, strength: f32) {
    for ring in 0..6 {
        let spread = 1.0 + ring as f32 * 0.08;
        let alpha = strength * 0.3 / 6.0;
        painter.circle_filled(center, radius * spread, Color32::WHITE.gamma_multiply(alpha));
    }
}

/// Stand-in for an image that failed to load.
pub fn broken_image(painter: &Painter, rect: Rect, alt: &str, opacity: f32) {
    let color = GRAY_400.gamma_multiply(opacity);
    painter.rect_stroke(rect, 2.0, Stroke::new(1.0, color), egui::StrokeKind::Inside);
    painter.text(
        rect.left_top() + vec2(6.0, 6.0),
        egui::Align2::LEFT_TOP,
        alt,
        egui::FontId::proportional(13.0),
        color,
    );
}
