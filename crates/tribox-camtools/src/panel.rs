//! Panel outlines and layout
//!
//! A [`PanelRenderer`] draws one panel per call and moves its layout cursor
//! so the next panel lands next to it. [`PathRenderer`] is the concrete
//! renderer: it traces every edge profile around the panel polygon and
//! collects the placed [`Part`]s for output.

use tracing::debug;

use crate::edges::{EdgeProfile, EdgeStyleRegistry, StandardEdges};
use crate::error::{ensure_positive, CamToolResult, ParameterError};
use crate::joints::JointGeometry;
use crate::types::{close_path, push_unique_point, Bounds, Point};

/// Direction the layout cursor advances after a panel is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Right,
    Up,
}

pub trait PanelRenderer {
    /// Draw a rectangle. Edge codes are read bottom, right, top, left.
    fn draw_rectangle(
        &mut self,
        width: f64,
        height: f64,
        edges: &str,
        movement: Move,
        label: &str,
    ) -> CamToolResult<()>;

    /// Draw a right triangle with the right angle between the two legs.
    /// Edge codes are read `leg1`, `leg2`, hypotenuse.
    fn draw_right_triangle(
        &mut self,
        leg1: f64,
        leg2: f64,
        edges: &str,
        movement: Move,
        label: &str,
    ) -> CamToolResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelShape {
    Rectangle,
    RightTriangle,
}

/// A panel placed on the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub label: String,
    pub shape: PanelShape,
    /// Nominal size before edge profiles are applied
    pub width: f64,
    pub height: f64,
    pub edges: String,
    /// Closed outline in layout coordinates (y up)
    pub outline: Vec<Point>,
}

impl Part {
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.outline)
    }
}

#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            spacing,
        }
    }

    fn place(&mut self, width: f64, height: f64, movement: Move) -> (f64, f64) {
        let position = (self.x, self.y);
        match movement {
            Move::Right => self.x += width + self.spacing,
            Move::Up => self.y += height + self.spacing,
        }
        position
    }
}

pub struct PathRenderer<R: EdgeStyleRegistry = StandardEdges> {
    registry: R,
    joints: JointGeometry,
    cursor: LayoutCursor,
    parts: Vec<Part>,
}

impl PathRenderer<StandardEdges> {
    pub fn new(joints: JointGeometry, spacing: f64) -> Self {
        Self::with_registry(StandardEdges, joints, spacing)
    }
}

impl<R: EdgeStyleRegistry> PathRenderer<R> {
    pub fn with_registry(registry: R, joints: JointGeometry, spacing: f64) -> Self {
        Self {
            registry,
            joints,
            cursor: LayoutCursor::new(spacing),
            parts: Vec::new(),
        }
    }

    pub fn joints(&self) -> &JointGeometry {
        &self.joints
    }

    /// Parts placed so far, in draw order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    fn resolve_edges(&self, edges: &str, expected: usize) -> CamToolResult<Vec<EdgeProfile>> {
        let count = edges.chars().count();
        if count != expected {
            return Err(ParameterError::InvalidValue {
                name: "edges".to_string(),
                reason: format!("expected {} edge codes, got {} ('{}')", expected, count, edges),
            }
            .into());
        }
        self.registry.resolve_all(edges)
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &mut self,
        shape: PanelShape,
        (width, height): (f64, f64),
        vertices: &[Point],
        profiles: &[EdgeProfile],
        edges: &str,
        movement: Move,
        label: &str,
    ) {
        let mut outline = trace_polygon(vertices, profiles, &self.joints);

        if let Some(bounds) = Bounds::of(&outline) {
            let (x, y) = self.cursor.place(bounds.width(), bounds.height(), movement);
            let dx = x - bounds.min_x;
            let dy = y - bounds.min_y;
            for p in &mut outline {
                p.x += dx;
                p.y += dy;
            }
            debug!(
                "Placed {:?} '{}' {:.3}x{:.3} edges {} at ({:.3}, {:.3})",
                shape, label, width, height, edges, x, y
            );
        }

        self.parts.push(Part {
            label: label.to_string(),
            shape,
            width,
            height,
            edges: edges.to_string(),
            outline,
        });
    }
}

impl<R: EdgeStyleRegistry> PanelRenderer for PathRenderer<R> {
    fn draw_rectangle(
        &mut self,
        width: f64,
        height: f64,
        edges: &str,
        movement: Move,
        label: &str,
    ) -> CamToolResult<()> {
        ensure_positive("rectangle width", width)?;
        ensure_positive("rectangle height", height)?;
        let profiles = self.resolve_edges(edges, 4)?;

        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ];
        self.place(
            PanelShape::Rectangle,
            (width, height),
            &vertices,
            &profiles,
            edges,
            movement,
            label,
        );
        Ok(())
    }

    fn draw_right_triangle(
        &mut self,
        leg1: f64,
        leg2: f64,
        edges: &str,
        movement: Move,
        label: &str,
    ) -> CamToolResult<()> {
        ensure_positive("triangle leg", leg1)?;
        ensure_positive("triangle leg", leg2)?;
        let profiles = self.resolve_edges(edges, 3)?;

        let vertices = [
            Point::new(0.0, 0.0),
            Point::new(leg1, 0.0),
            Point::new(leg1, leg2),
        ];
        self.place(
            PanelShape::RightTriangle,
            (leg1, leg2),
            &vertices,
            &profiles,
            edges,
            movement,
            label,
        );
        Ok(())
    }
}

/// Outward unit normal of the side from `a` to `b` of a counter-clockwise polygon.
fn outward_normal(a: Point, b: Point) -> (f64, f64) {
    let len = (b.x - a.x).hypot(b.y - a.y);
    ((b.y - a.y) / len, -(b.x - a.x) / len)
}

/// Vertex pushed out along the corner bisector so both offset sides meet.
fn miter(vertex: Point, n1: (f64, f64), n2: (f64, f64), offset: f64) -> Point {
    let denom = 1.0 + n1.0 * n2.0 + n1.1 * n2.1;
    let scale = if denom > 1e-9 { offset / denom } else { offset };
    Point::new(
        vertex.x + (n1.0 + n2.0) * scale,
        vertex.y + (n1.1 + n2.1) * scale,
    )
}

/// Trace a closed outline around a counter-clockwise polygon, one edge
/// profile per side.
fn trace_polygon(vertices: &[Point], profiles: &[EdgeProfile], joints: &JointGeometry) -> Vec<Point> {
    let n = vertices.len();
    let half_kerf = joints.burn() / 2.0;
    let normals: Vec<(f64, f64)> = (0..n)
        .map(|i| outward_normal(vertices[i], vertices[(i + 1) % n]))
        .collect();

    let mut path: Vec<Point> = Vec::new();
    for (i, profile) in profiles.iter().enumerate().take(n) {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let normal = normals[i];
        let length = (b.x - a.x).hypot(b.y - a.y);
        let (dx, dy) = ((b.x - a.x) / length, (b.y - a.y) / length);

        push_unique_point(&mut path, miter(a, normals[(i + n - 1) % n], normal, half_kerf));

        for p in profile.trace(length, joints) {
            push_unique_point(
                &mut path,
                Point::new(
                    a.x + dx * p.x - normal.0 * p.y,
                    a.y + dy * p.x - normal.1 * p.y,
                ),
            );
        }
    }

    close_path(&mut path);
    path
}
