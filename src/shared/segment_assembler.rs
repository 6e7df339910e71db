//! Setzt Kurvensegmente aus Viererfenstern über die Kontrollpunkte zusammen.
//!
//! Alle Indizes beziehen sich auf die echten Kontrollpunkte (ohne das doppelte
//! Startelement der Interaktion). Die Ergebnisse sind so geordnet, dass das
//! letzte Element eines Puffers zuerst aufgedeckt wird: wer vom Ende her
//! abbaut, zeichnet die Kurve vom ersten zum letzten Kontrollpunkt.

use glam::Vec2;

use super::curve_geometry::evaluate_segment;
use crate::core::{CurveError, CurveFamily, PointSequence};

/// Vier Indizes in die Kontrollpunktfolge plus der Punkt, dem das Segment gehört.
///
/// `owner` ist der Kontrollpunkt, dessen Hinzufügen das Fenster freigeschaltet
/// hat. Darüber führt die Interaktion Buch, wie viele Kurvenpunkte beim
/// Entfernen eines Kontrollpunkts wieder verschwinden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub indices: [usize; 4],
    pub owner: usize,
}

impl Window {
    /// Gleitendes Fenster `(i-1, i, i+1, i+2)` für das Segment P(i) → P(i+1).
    pub fn sliding(i: usize) -> Self {
        Self {
            indices: [i.saturating_sub(1), i, i + 1, i + 2],
            owner: (i + 1).max(2),
        }
    }

    /// Endstück `(f, f+1, f+2, f+2)` für das Segment P(f+1) → P(f+2).
    pub fn terminal(first: usize) -> Self {
        Self {
            indices: [first, first + 1, first + 2, first + 2],
            owner: first + 2,
        }
    }

    /// Anfangsstück `(0, 0, 1, 2)` für das Segment P(0) → P(1).
    pub fn leading() -> Self {
        Self {
            indices: [0, 0, 1, 2],
            owner: 2,
        }
    }

    /// Bezier-Gruppe `(k, k+1, k+2, k+3)`.
    pub fn bezier_group(k: usize) -> Self {
        Self {
            indices: [k, k + 1, k + 2, k + 3],
            owner: k + 3,
        }
    }

    /// Löst die Indizes gegen die Kontrollpunktfolge auf (mit Bereichsprüfung).
    pub fn resolve(&self, control: &PointSequence) -> Result<[Vec2; 4], CurveError> {
        let [i0, i1, i2, i3] = self.indices;
        Ok([
            control.position(i0)?,
            control.position(i1)?,
            control.position(i2)?,
            control.position(i3)?,
        ])
    }
}

/// Ein ausgewertetes Fenster. `samples` liegen bereits in Puffer-Reihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledSegment {
    pub window: Window,
    pub samples: Vec<Vec2>,
}

/// Ergebnis eines Zusammensetz-Laufs: Segmente in Puffer-Reihenfolge
/// (letztes Kurvensegment zuerst).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveAssembly {
    segments: Vec<AssembledSegment>,
}

impl CurveAssembly {
    pub fn segments(&self) -> &[AssembledSegment] {
        &self.segments
    }

    /// Gesamtzahl der erzeugten Kurvenpunkte.
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.samples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Erzeugte Punkte je Kontrollpunkt-Index (Länge `control_len`).
    ///
    /// Besitzer außerhalb von `control_len` werden ignoriert.
    pub fn points_per_owner(&self, control_len: usize) -> Vec<usize> {
        let mut ledger = vec![0; control_len];
        for segment in &self.segments {
            if let Some(slot) = ledger.get_mut(segment.window.owner) {
                *slot += segment.samples.len();
            }
        }
        ledger
    }

    /// Alle Samples als flache Positionsliste in Puffer-Reihenfolge.
    pub fn positions(&self) -> Vec<Vec2> {
        self.segments
            .iter()
            .flat_map(|s| s.samples.iter().copied())
            .collect()
    }

    /// Wandelt das Ergebnis in einen Reveal-Puffer mit einheitlicher Kurvenfarbe.
    pub fn into_pending(self, color: [f32; 4]) -> PointSequence {
        PointSequence::from_positions(
            self.segments.into_iter().flat_map(|s| s.samples),
            color,
        )
    }
}

/// Fenster für eine vollständige Kurve über `len` Kontrollpunkte, in Puffer-Reihenfolge.
pub fn curve_windows(len: usize, family: CurveFamily) -> Result<Vec<Window>, CurveError> {
    let required = family.min_control_points();
    if len < required {
        return Err(CurveError::PrematureInterpolation {
            available: len,
            required,
        });
    }

    let windows = match family {
        CurveFamily::CatmullRom | CurveFamily::UniformBSpline => {
            let mut windows = Vec::with_capacity(len - 1);
            windows.push(Window::terminal(len - 3));
            windows.extend((1..=len - 3).rev().map(Window::sliding));
            windows.push(Window::leading());
            windows
        }
        CurveFamily::Bezier => {
            let mut windows: Vec<Window> = (0..)
                .map(|g| g * 3)
                .take_while(|k| k + 3 < len)
                .map(Window::bezier_group)
                .collect();
            windows.reverse();
            windows
        }
    };
    Ok(windows)
}

/// Fenster, die das Anhängen des letzten Kontrollpunkts freischaltet.
///
/// `cursor` ist der Index des ersten Punkts im neuen Endstück, also
/// `Anzahl Kontrollpunkte - 3`.
pub fn appended_windows(cursor: usize, family: CurveFamily) -> Vec<Window> {
    match family {
        CurveFamily::CatmullRom | CurveFamily::UniformBSpline => {
            let mut windows = vec![Window::terminal(cursor)];
            if cursor == 0 {
                windows.push(Window::leading());
            }
            windows
        }
        CurveFamily::Bezier => {
            if cursor >= 1 && (cursor + 2) % 3 == 0 {
                vec![Window::bezier_group(cursor - 1)]
            } else {
                Vec::new()
            }
        }
    }
}

/// Setzt die komplette Kurve über alle Kontrollpunkte zusammen.
pub fn assemble_curve(
    control: &PointSequence,
    family: CurveFamily,
    step: f32,
) -> Result<CurveAssembly, CurveError> {
    let windows = curve_windows(control.len(), family)?;
    evaluate_windows(control, &windows, family, step)
}

/// Setzt nur die Segmente zusammen, die der zuletzt angehängte Punkt freischaltet.
///
/// Bereits gezeichnete Segmente werden nicht erneut berechnet.
pub fn assemble_appended(
    control: &PointSequence,
    cursor: usize,
    family: CurveFamily,
    step: f32,
) -> Result<CurveAssembly, CurveError> {
    evaluate_windows(control, &appended_windows(cursor, family), family, step)
}

fn evaluate_windows(
    control: &PointSequence,
    windows: &[Window],
    family: CurveFamily,
    step: f32,
) -> Result<CurveAssembly, CurveError> {
    let mut segments = Vec::with_capacity(windows.len());
    for window in windows {
        let [a, b, c, d] = window.resolve(control)?;
        let mut samples = evaluate_segment(a, b, c, d, family, step);
        // Bezier läuft 0 → 1, der Puffer wird aber vom Ende her aufgedeckt
        if family == CurveFamily::Bezier {
            samples.reverse();
        }
        segments.push(AssembledSegment {
            window: *window,
            samples,
        });
    }
    Ok(CurveAssembly { segments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CURVE_POINT_COLOR;

    fn control(points: &[(f32, f32)]) -> PointSequence {
        PointSequence::from_positions(
            points.iter().map(|&(x, y)| Vec2::new(x, y)),
            crate::core::CONTROL_POINT_COLOR,
        )
    }

    fn indices(windows: &[Window]) -> Vec<[usize; 4]> {
        windows.iter().map(|w| w.indices).collect()
    }

    #[test]
    fn catmull_rom_windows_run_last_segment_first() {
        let windows = curve_windows(5, CurveFamily::CatmullRom).expect("5 Punkte reichen");
        assert_eq!(
            indices(&windows),
            vec![[2, 3, 4, 4], [1, 2, 3, 4], [0, 1, 2, 3], [0, 0, 1, 2]]
        );
        let owners: Vec<usize> = windows.iter().map(|w| w.owner).collect();
        assert_eq!(owners, vec![4, 3, 2, 2]);
    }

    #[test]
    fn three_points_give_terminal_and_leading_window() {
        let windows = curve_windows(3, CurveFamily::UniformBSpline).expect("3 Punkte reichen");
        assert_eq!(indices(&windows), vec![[0, 1, 2, 2], [0, 0, 1, 2]]);
    }

    #[test]
    fn bezier_uses_non_overlapping_groups() {
        let windows = curve_windows(8, CurveFamily::Bezier).expect("8 Punkte reichen");
        assert_eq!(indices(&windows), vec![[3, 4, 5, 6], [0, 1, 2, 3]]);
        assert_eq!(
            indices(&curve_windows(7, CurveFamily::Bezier).expect("7 Punkte")),
            vec![[3, 4, 5, 6], [0, 1, 2, 3]]
        );
        assert_eq!(
            indices(&curve_windows(6, CurveFamily::Bezier).expect("6 Punkte")),
            vec![[0, 1, 2, 3]]
        );
    }

    #[test]
    fn too_few_points_is_premature() {
        assert_eq!(
            curve_windows(2, CurveFamily::CatmullRom),
            Err(CurveError::PrematureInterpolation {
                available: 2,
                required: 3
            })
        );
        assert_eq!(
            curve_windows(3, CurveFamily::Bezier),
            Err(CurveError::PrematureInterpolation {
                available: 3,
                required: 4
            })
        );
    }

    #[test]
    fn appended_windows_have_same_owners_as_full_assembly() {
        // Inkrementell und komplett zusammengesetzt führt zum gleichen Buch je Kontrollpunkt
        let len = 9;
        for family in CurveFamily::ALL {
            let full = curve_windows(len, family).expect("genug Punkte");
            for owner in 2..len {
                let full_count = full.iter().filter(|w| w.owner == owner).count();
                let appended = appended_windows(owner - 2, family);
                assert_eq!(appended.len(), full_count, "{family:?} owner {owner}");
                assert!(appended.iter().all(|w| w.owner == owner));
            }
        }
    }

    #[test]
    fn full_curve_point_count_per_family() {
        let cp = control(&[(0.0, 0.0), (0.5, 0.5), (-0.5, 0.5), (-0.5, -0.5), (0.2, -0.8)]);
        let step = 0.02;
        let cr = assemble_curve(&cp, CurveFamily::CatmullRom, step).expect("CR");
        assert_eq!(cr.point_count(), 4 * 50);
        let bs = assemble_curve(&cp, CurveFamily::UniformBSpline, step).expect("BS");
        assert_eq!(bs.point_count(), 4 * 50);
        let bz = assemble_curve(&cp, CurveFamily::Bezier, step).expect("Bezier");
        assert_eq!(bz.point_count(), 50);
    }

    #[test]
    fn ledger_counts_points_per_owner() {
        let cp = control(&[(0.0, 0.0), (0.5, 0.5), (-0.5, 0.5), (-0.5, -0.5)]);
        let assembly = assemble_curve(&cp, CurveFamily::CatmullRom, 0.1).expect("CR");
        assert_eq!(assembly.points_per_owner(4), vec![0, 0, 20, 10]);
    }

    #[test]
    fn pending_tail_is_first_point_of_curve() {
        let cp = control(&[(0.0, 0.0), (0.5, 0.5), (-0.5, 0.5), (-0.5, -0.5)]);
        for family in CurveFamily::ALL {
            let assembly = assemble_curve(&cp, family, 0.02).expect("genug Punkte");
            let mut pending = assembly.into_pending(CURVE_POINT_COLOR);
            let first = pending.pop().expect("Puffer darf nicht leer sein");
            match family {
                // Anfangsstück startet bei t = T nahe P0, Bezier exakt bei P0
                CurveFamily::CatmullRom => assert!(first.position.distance(Vec2::ZERO) < 0.05),
                CurveFamily::Bezier => assert_eq!(first.position, Vec2::ZERO),
                CurveFamily::UniformBSpline => {}
            }
            assert_eq!(first.color, CURVE_POINT_COLOR);
        }
    }

    #[test]
    fn appended_assembly_reports_invalid_index() {
        let cp = control(&[(0.0, 0.0), (0.5, 0.5), (-0.5, 0.5)]);
        let err = assemble_appended(&cp, 1, CurveFamily::CatmullRom, 0.02);
        assert_eq!(err, Err(CurveError::InvalidIndex { index: 3, len: 3 }));
    }

    #[test]
    fn bezier_appended_only_on_completed_group() {
        assert!(appended_windows(0, CurveFamily::Bezier).is_empty());
        assert_eq!(indices(&appended_windows(1, CurveFamily::Bezier)), vec![[0, 1, 2, 3]]);
        assert!(appended_windows(2, CurveFamily::Bezier).is_empty());
        assert!(appended_windows(3, CurveFamily::Bezier).is_empty());
        assert_eq!(indices(&appended_windows(4, CurveFamily::Bezier)), vec![[3, 4, 5, 6]]);
    }
}
