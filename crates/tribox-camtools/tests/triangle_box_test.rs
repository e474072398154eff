//! Draw-call contract of the right triangle box generator

use tribox_camtools::{
    BoxGenerator, CamToolError, CamToolResult, EdgeStyleRegistry, FingerJointSettings,
    JointGeometry, Move, PanelRenderer, PathRenderer, SizeAdjuster, StandardEdges,
    ThicknessAdjuster, TriangleBoxGenerator, TriangleBoxParameters,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Rectangle(f64, f64, String, Move, String),
    Triangle(f64, f64, String, Move, String),
}

/// Records every call and fails the way the real renderer does.
#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<Call>,
}

impl RecordingRenderer {
    fn check(&self, a: f64, b: f64, edges: &str) -> CamToolResult<()> {
        if a <= 0.0 || b <= 0.0 {
            return Err(CamToolError::InvalidGeometry(format!("{} x {}", a, b)));
        }
        StandardEdges.resolve_all(edges)?;
        Ok(())
    }
}

impl PanelRenderer for RecordingRenderer {
    fn draw_rectangle(
        &mut self,
        width: f64,
        height: f64,
        edges: &str,
        movement: Move,
        label: &str,
    ) -> CamToolResult<()> {
        self.check(width, height, edges)?;
        self.calls.push(Call::Rectangle(
            width,
            height,
            edges.to_string(),
            movement,
            label.to_string(),
        ));
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
        self.check(leg1, leg2, edges)?;
        self.calls.push(Call::Triangle(
            leg1,
            leg2,
            edges.to_string(),
            movement,
            label.to_string(),
        ));
        Ok(())
    }
}

/// Adjuster with an easily recognisable result.
struct HalvingAdjuster;

impl SizeAdjuster for HalvingAdjuster {
    fn to_inside(&self, outside_length: f64) -> f64 {
        outside_length / 2.0
    }
}

fn render(params: TriangleBoxParameters) -> (CamToolResult<()>, Vec<Call>) {
    let generator = TriangleBoxGenerator::new(params);
    let mut renderer = RecordingRenderer::default();
    let result = generator.render(&mut renderer, &ThicknessAdjuster::new(3.0));
    (result, renderer.calls)
}

fn dims(call: &Call) -> (f64, f64, &str) {
    match call {
        Call::Rectangle(a, b, e, _, _) | Call::Triangle(a, b, e, _, _) => (*a, *b, e.as_str()),
    }
}

#[test]
fn test_default_box_draw_sequence() {
    let (result, calls) = render(TriangleBoxParameters::default());
    result.expect("render should succeed");

    assert_eq!(calls.len(), 5);

    let hyp = (100.0f64 * 100.0 + 80.0 * 80.0).sqrt();
    assert!((hyp - 128.0625).abs() < 1e-4);

    assert_eq!(
        calls[0],
        Call::Rectangle(100.0, 50.0, "ffFf".into(), Move::Right, "Wall 1 (base)".into())
    );
    assert_eq!(
        calls[1],
        Call::Rectangle(80.0, 50.0, "ffFf".into(), Move::Right, "Wall 2 (height)".into())
    );
    match &calls[2] {
        Call::Rectangle(w, h, e, m, label) => {
            assert!((w - hyp).abs() < 1e-9);
            assert_eq!(*h, 50.0);
            assert_eq!(e, "ffFf");
            assert_eq!(*m, Move::Right);
            assert_eq!(label, "Wall 3 (hypotenuse)");
        }
        other => panic!("expected hypotenuse wall, got {:?}", other),
    }
    assert_eq!(
        calls[3],
        Call::Triangle(100.0, 80.0, "fff".into(), Move::Right, "Bottom triangle".into())
    );
    assert_eq!(
        calls[4],
        Call::Triangle(100.0, 80.0, "Fff".into(), Move::Right, "Top triangle".into())
    );
}

#[test]
fn test_edge_code_patterns() {
    let params = TriangleBoxParameters {
        bottom_edge: 'e',
        top_edge: 'E',
        wall_edge: 'F',
        ..Default::default()
    };
    let (result, calls) = render(params);
    result.unwrap();

    for call in &calls[..3] {
        assert_eq!(dims(call).2, "eFEF");
    }
    assert_eq!(dims(&calls[3]).2, "eFF");
    assert_eq!(dims(&calls[4]).2, "EFF");
}

#[test]
fn test_outside_dimensions_are_adjusted_before_drawing() {
    let generator = TriangleBoxGenerator::new(TriangleBoxParameters {
        base: 100.0,
        height: 80.0,
        depth: 50.0,
        outside: true,
        ..Default::default()
    });
    let mut renderer = RecordingRenderer::default();
    generator.render(&mut renderer, &HalvingAdjuster).unwrap();

    let calls = renderer.calls;
    assert_eq!(dims(&calls[0]).0, 50.0);
    assert_eq!(dims(&calls[0]).1, 25.0);
    assert_eq!(dims(&calls[1]).0, 40.0);
    let hyp = (50.0f64 * 50.0 + 40.0 * 40.0).sqrt();
    assert!((dims(&calls[2]).0 - hyp).abs() < 1e-9);
    assert_eq!((dims(&calls[3]).0, dims(&calls[3]).1), (50.0, 40.0));
    assert_eq!((dims(&calls[4]).0, dims(&calls[4]).1), (50.0, 40.0));
}

#[test]
fn test_inside_dimensions_are_used_unchanged() {
    let generator = TriangleBoxGenerator::new(TriangleBoxParameters::default());
    let mut renderer = RecordingRenderer::default();
    generator.render(&mut renderer, &HalvingAdjuster).unwrap();
    assert_eq!(dims(&renderer.calls[0]).0, 100.0);
    assert_eq!(dims(&renderer.calls[0]).1, 50.0);
}

#[test]
fn test_outside_with_thickness_adjuster() {
    let (result, calls) = render(TriangleBoxParameters {
        outside: true,
        ..Default::default()
    });
    result.unwrap();
    assert_eq!(dims(&calls[0]).0, 94.0);
    assert_eq!(dims(&calls[0]).1, 44.0);
    assert_eq!(dims(&calls[1]).0, 74.0);
}

#[test]
fn test_render_is_idempotent() {
    let params = TriangleBoxParameters {
        base: 73.5,
        height: 41.25,
        depth: 30.0,
        ..Default::default()
    };
    let (_, first) = render(params.clone());
    let (_, second) = render(params);
    assert_eq!(first, second);
}

#[test]
fn test_zero_base_fails_before_any_panel() {
    let (result, calls) = render(TriangleBoxParameters {
        base: 0.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(CamToolError::InvalidGeometry(_))));
    assert!(calls.is_empty());
}

#[test]
fn test_zero_height_keeps_earlier_panels() {
    let (result, calls) = render(TriangleBoxParameters {
        height: 0.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(CamToolError::InvalidGeometry(_))));
    assert_eq!(calls.len(), 1);
    assert_eq!(dims(&calls[0]).0, 100.0);
}

#[test]
fn test_outside_adjustment_to_zero_is_rejected() {
    let (result, calls) = render(TriangleBoxParameters {
        depth: 6.0,
        outside: true,
        ..Default::default()
    });
    assert!(matches!(result, Err(CamToolError::InvalidGeometry(_))));
    assert!(calls.is_empty());
}

#[test]
fn test_unknown_edge_type_propagates() {
    let (result, calls) = render(TriangleBoxParameters {
        top_edge: 'x',
        ..Default::default()
    });
    assert_eq!(result, Err(CamToolError::UnknownEdgeType('x')));
    assert!(calls.is_empty());
}

#[test]
fn test_path_renderer_lays_out_five_parts() {
    let joints = JointGeometry::new(FingerJointSettings::default(), 3.0, 0.1).unwrap();
    let mut renderer = PathRenderer::new(joints, 5.0);
    let generator = TriangleBoxGenerator::default();
    generator
        .render(&mut renderer, &ThicknessAdjuster::new(3.0))
        .unwrap();

    let parts = renderer.parts();
    let labels: Vec<&str> = parts.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Wall 1 (base)",
            "Wall 2 (height)",
            "Wall 3 (hypotenuse)",
            "Bottom triangle",
            "Top triangle"
        ]
    );

    let mut previous_max = f64::NEG_INFINITY;
    for part in parts {
        let b = part.bounds().unwrap();
        assert!(b.min_x > previous_max, "{} overlaps its neighbour", part.label);
        assert_eq!(part.outline.first(), part.outline.last());
        previous_max = b.max_x;
    }
}

#[test]
fn test_path_renderer_keeps_parts_drawn_before_failure() {
    let joints = JointGeometry::new(FingerJointSettings::default(), 3.0, 0.1).unwrap();
    let mut renderer = PathRenderer::new(joints, 5.0);
    let generator = TriangleBoxGenerator::new(TriangleBoxParameters {
        wall_edge: 'f',
        top_edge: 'F',
        height: -5.0,
        ..Default::default()
    });
    let err = generator
        .render(&mut renderer, &ThicknessAdjuster::new(3.0))
        .unwrap_err();
    assert!(matches!(err, CamToolError::InvalidGeometry(_)));
    assert_eq!(renderer.parts().len(), 1);
}
