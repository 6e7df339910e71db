use approx::assert_relative_eq;
use glam::Vec2;
use spline_reveal::core::CURVE_POINT_COLOR;
use spline_reveal::shared::{sample_count, DEFAULT_STEP_SIZE};
use spline_reveal::{
    assemble_appended, assemble_curve, evaluate_segment, CurveError, CurveFamily, PointSequence,
};

fn control(points: &[Vec2]) -> PointSequence {
    PointSequence::from_positions(points.iter().copied(), [0.0, 0.0, 0.0, 1.0])
}

fn zigzag(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = -0.9 + 1.8 * i as f32 / count.max(2) as f32;
            let y = if i % 2 == 0 { -0.4 } else { 0.4 };
            Vec2::new(x, y)
        })
        .collect()
}

#[test]
fn catmull_rom_curve_is_continuous_without_jumps() {
    let points = zigzag(6);
    let assembly = assemble_curve(&control(&points), CurveFamily::CatmullRom, DEFAULT_STEP_SIZE)
        .expect("genug Kontrollpunkte");

    // Reveal-Reihenfolge ist das Umgekehrte der gespeicherten Reihenfolge
    let mut revealed = assembly.positions();
    revealed.reverse();

    for pair in revealed.windows(2) {
        assert!(
            pair[0].distance(pair[1]) < 0.2,
            "Sprung zwischen {:?} und {:?}",
            pair[0],
            pair[1]
        );
    }
    assert!(revealed[0].distance(points[0]) < 0.05);
}

#[test]
fn all_families_reject_too_few_points() {
    for family in CurveFamily::ALL {
        let needed = family.min_control_points();
        let points = zigzag(needed - 1);
        let err = assemble_curve(&control(&points), family, DEFAULT_STEP_SIZE)
            .expect_err("zu wenige Punkte");
        assert_eq!(
            err,
            CurveError::PrematureInterpolation {
                available: needed - 1,
                required: needed,
            }
        );
    }
}

#[test]
fn appended_assembly_adds_exactly_one_segment() {
    let points = zigzag(5);
    let n = sample_count(DEFAULT_STEP_SIZE);

    let assembly = assemble_appended(&control(&points), 2, CurveFamily::CatmullRom, DEFAULT_STEP_SIZE)
        .expect("Fenster liegt im Bereich");

    assert_eq!(assembly.point_count(), n);
}

#[test]
fn render_buffer_decodes_back_to_points() {
    let samples = evaluate_segment(
        Vec2::new(-0.5, 0.0),
        Vec2::new(0.0, 0.5),
        Vec2::new(0.5, 0.0),
        Vec2::new(1.0, 0.5),
        CurveFamily::UniformBSpline,
        0.25,
    );
    let sequence = PointSequence::from_positions(samples.iter().copied(), CURVE_POINT_COLOR);

    let geometry = sequence.extract_render_buffer();
    assert_eq!(geometry.len(), samples.len());
    assert_eq!(geometry.indices, (0..samples.len() as u32).collect::<Vec<_>>());

    for (decoded, expected) in geometry.to_points().iter().zip(&samples) {
        assert_relative_eq!(decoded.position.x, expected.x);
        assert_relative_eq!(decoded.position.y, expected.y);
        assert_eq!(decoded.color, CURVE_POINT_COLOR);
    }
}
