//! Einzelner Punkt der Demo: Position in Normalized Device Coordinates plus Farbe.

use glam::Vec2;

/// Standardfarbe der Kontrollpunkte (fast schwarz).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
/// Standardfarbe der generierten Kurvenpunkte (gedämpftes Rot).
pub const CURVE_POINT_COLOR: [f32; 4] = [0.9, 0.3, 0.3, 1.0];

/// Kontroll- oder Kurvenpunkt.
///
/// Punkte sind unveränderlich; "Verschieben" bedeutet entfernen und neu anhängen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Position in NDC ([-1, 1] auf beiden Achsen, Y nach oben)
    pub position: Vec2,
    /// RGBA-Farbe, Komponenten in [0, 1]
    pub color: [f32; 4],
}

impl CurvePoint {
    /// Erstellt einen Punkt mit expliziter Farbe.
    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Erstellt einen Kontrollpunkt mit der Standardfarbe.
    pub fn control(position: Vec2) -> Self {
        Self::new(position, CONTROL_POINT_COLOR)
    }

    /// Erstellt einen Kurvenpunkt mit der Standardfarbe.
    pub fn curve(position: Vec2) -> Self {
        Self::new(position, CURVE_POINT_COLOR)
    }
}
