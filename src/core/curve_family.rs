//! Kurvenfamilien und deren Zyklus-Reihenfolge.

use serde::{Deserialize, Serialize};

/// Global gewählte Kurvenfamilie.
///
/// Reihenfolge beim Durchschalten: Catmull-Rom → Bezier → B-Spline → Catmull-Rom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveFamily {
    /// Interpolierende Catmull-Rom-Spline (läuft durch die Kontrollpunkte)
    #[default]
    CatmullRom,
    /// Kubische Bezier-Kurve (Bernstein-Basis über vier Punkte)
    Bezier,
    /// Uniforme kubische B-Spline (approximierend)
    UniformBSpline,
}

impl CurveFamily {
    /// Alle Familien in Zyklus-Reihenfolge.
    pub const ALL: [CurveFamily; 3] = [
        CurveFamily::CatmullRom,
        CurveFamily::Bezier,
        CurveFamily::UniformBSpline,
    ];

    /// Modus-Index (0, 1, 2).
    pub fn index(self) -> usize {
        match self {
            CurveFamily::CatmullRom => 0,
            CurveFamily::Bezier => 1,
            CurveFamily::UniformBSpline => 2,
        }
    }

    /// Familie zu einem Modus-Index (modulo 3).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Nächste Familie im Zyklus.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Mindestanzahl (echter) Kontrollpunkte für eine vollständige Kurve.
    pub fn min_control_points(self) -> usize {
        match self {
            CurveFamily::CatmullRom | CurveFamily::UniformBSpline => 3,
            CurveFamily::Bezier => 4,
        }
    }

    /// Anzeigename für Statusleiste und Log.
    pub fn label(self) -> &'static str {
        match self {
            CurveFamily::CatmullRom => "Catmull-Rom",
            CurveFamily::Bezier => "Bezier",
            CurveFamily::UniformBSpline => "B-Spline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_families() {
        let mut family = CurveFamily::CatmullRom;
        family = family.next();
        assert_eq!(family, CurveFamily::Bezier);
        family = family.next();
        assert_eq!(family, CurveFamily::UniformBSpline);
        family = family.next();
        assert_eq!(family, CurveFamily::CatmullRom);
    }

    #[test]
    fn from_index_wraps_modulo_three() {
        assert_eq!(CurveFamily::from_index(3), CurveFamily::CatmullRom);
        assert_eq!(CurveFamily::from_index(5), CurveFamily::UniformBSpline);
        for family in CurveFamily::ALL {
            assert_eq!(CurveFamily::from_index(family.index()), family);
        }
    }
}
