//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::RenderGeometry;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Kontrollpunkte (inklusive doppeltem Startpunkt)
    pub control_points: RenderGeometry,
    /// Bereits aufgedeckte Kurvenpunkte
    pub curve_points: RenderGeometry,
    /// Kantenlänge der Kontrollpunkte in Pixeln
    pub control_point_size_px: f32,
    /// Kantenlänge der Kurvenpunkte in Pixeln
    pub curve_point_size_px: f32,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl RenderScene {
    /// Gesamtzahl der zu zeichnenden Punkte.
    pub fn point_count(&self) -> usize {
        self.control_points.len() + self.curve_points.len()
    }

    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}
