//! Flacher Punkt-Puffer für den Renderer.

use glam::Vec2;

use super::CurvePoint;

/// Renderfertige Punktdaten einer Ebene.
///
/// `positions` hält zwei Floats pro Punkt, `colors` vier Floats pro Punkt,
/// `indices` die fortlaufenden Punktnummern in Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderGeometry {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,
}

impl RenderGeometry {
    /// Erstellt einen leeren Puffer mit Platz für `points` Punkte.
    pub fn with_capacity(points: usize) -> Self {
        Self {
            positions: Vec::with_capacity(points * 2),
            colors: Vec::with_capacity(points * 4),
            indices: Vec::with_capacity(points),
        }
    }

    /// Hängt einen Punkt an; der Index ist die bisherige Punktanzahl.
    pub fn add(&mut self, position: Vec2, color: [f32; 4]) {
        let index = self.indices.len() as u32;
        self.positions.extend_from_slice(&[position.x, position.y]);
        self.colors.extend_from_slice(&color);
        self.indices.push(index);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Dekodiert den Puffer in Zeichenreihenfolge zurück in Punkte.
    ///
    /// Indizes ohne vollständige Positions- oder Farbdaten werden übersprungen.
    pub fn to_points(&self) -> Vec<CurvePoint> {
        self.indices
            .iter()
            .filter_map(|&index| {
                let i = index as usize;
                let position = self.positions.get(i * 2..i * 2 + 2)?;
                let color = self.colors.get(i * 4..i * 4 + 4)?;
                Some(CurvePoint::new(
                    Vec2::new(position[0], position[1]),
                    [color[0], color[1], color[2], color[3]],
                ))
            })
            .collect()
    }
}
