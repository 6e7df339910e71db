//! Reine Geometrie-Funktionen für die drei kubischen Kurvenfamilien.
//!
//! Layer-neutral: wird vom Segment-Assembler, von Tests und Benchmarks genutzt.
//! Alle Funktionen arbeiten auf vier Kontrollpunkten `a, b, c, d`.

use glam::Vec2;

use crate::core::CurveFamily;

/// Standard-Schrittweite des Kurvenparameters.
pub const DEFAULT_STEP_SIZE: f32 = 0.02;

/// Anzahl der Samples pro Fenster: `round(1 / step)`, mindestens 1.
///
/// Für nicht-positive oder nicht-endliche Schrittweiten wird 0 zurückgegeben.
pub fn sample_count(step: f32) -> usize {
    if !(step.is_finite() && step > 0.0) {
        return 0;
    }
    ((1.0 / step).round() as usize).max(1)
}

/// Catmull-Rom-Gewichte für `t` (vor dem Faktor 0.5).
pub fn catmull_rom_weights(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -t3 + 2.0 * t2 - t,
        3.0 * t3 - 5.0 * t2 + 2.0,
        -3.0 * t3 + 4.0 * t2 + t,
        t3 - t2,
    ]
}

/// Bernstein-Gewichte der kubischen Bezier-Kurve.
pub fn bezier_weights(t: f32) -> [f32; 4] {
    let u = 1.0 - t;
    [u * u * u, 3.0 * t * u * u, 3.0 * t * t * u, t * t * t]
}

/// Uniforme B-Spline-Gewichte für `t` (vor der Division durch 6).
pub fn b_spline_weights(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -t3 + 3.0 * t2 - 3.0 * t + 1.0,
        3.0 * t3 - 6.0 * t2 + 4.0,
        -3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0,
        t3,
    ]
}

/// Wertet eine Familie an Parameter `t` aus.
pub fn curve_point(family: CurveFamily, [a, b, c, d]: [Vec2; 4], t: f32) -> Vec2 {
    let (weights, scale) = match family {
        CurveFamily::CatmullRom => (catmull_rom_weights(t), 0.5),
        CurveFamily::Bezier => (bezier_weights(t), 1.0),
        CurveFamily::UniformBSpline => (b_spline_weights(t), 1.0 / 6.0),
    };
    let [q1, q2, q3, q4] = weights;
    (a * q1 + b * q2 + c * q3 + d * q4) * scale
}

/// Parameter des `k`-ten Samples.
///
/// Catmull-Rom und B-Spline laufen von 1 abwärts (0 ausgeschlossen),
/// Bezier von 0 aufwärts (1 ausgeschlossen). `t` wird aus dem ganzzahligen
/// `k` berechnet, damit sich keine Rundungsfehler aufsummieren.
pub fn sample_parameter(family: CurveFamily, k: usize, step: f32) -> f32 {
    match family {
        CurveFamily::CatmullRom | CurveFamily::UniformBSpline => 1.0 - k as f32 * step,
        CurveFamily::Bezier => k as f32 * step,
    }
}

/// Tastet ein Fenster aus vier Kontrollpunkten ab.
///
/// Liefert genau [`sample_count`]`(step)` Positionen in Parameter-Reihenfolge
/// (siehe [`sample_parameter`]). Bei Catmull-Rom ist das erste Sample exakt `c`.
pub fn evaluate_segment(
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
    family: CurveFamily,
    step: f32,
) -> Vec<Vec2> {
    let count = sample_count(step);
    (0..count)
        .map(|k| curve_point(family, [a, b, c, d], sample_parameter(family, k, step)))
        .collect()
}
