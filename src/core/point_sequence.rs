//! Geordnete Punktfolge für Kontrollpunkte, sichtbare Kurve und Reveal-Puffer.

use glam::Vec2;

use super::{CurveError, CurvePoint, RenderGeometry};

/// Anhäng- und abbaubare Folge von Punkten mit lückenlosen Indizes ab 0.
///
/// Wird in drei Rollen verwendet: Kontrollpunkte, bereits sichtbare Kurve
/// und Puffer der noch aufzudeckenden Kurvenpunkte (Ende = nächster Punkt).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<CurvePoint>,
}

impl PointSequence {
    /// Erstellt eine leere Folge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine leere Folge mit reservierter Kapazität.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Erstellt eine Folge aus Positionen mit einheitlicher Farbe.
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>, color: [f32; 4]) -> Self {
        positions
            .into_iter()
            .map(|position| CurvePoint::new(position, color))
            .collect()
    }

    /// Hängt einen Punkt an.
    pub fn push(&mut self, point: CurvePoint) {
        self.points.push(point);
    }

    /// Entfernt den letzten Punkt und gibt ihn zurück.
    pub fn pop(&mut self) -> Option<CurvePoint> {
        self.points.pop()
    }

    /// Hängt eine komplette Folge an (Reihenfolge bleibt erhalten).
    pub fn extend(&mut self, other: PointSequence) {
        self.points.extend(other.points);
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    /// Position an `index` mit Bereichsprüfung.
    pub fn position(&self, index: usize) -> Result<Vec2, CurveError> {
        self.points
            .get(index)
            .map(|p| p.position)
            .ok_or(CurveError::InvalidIndex {
                index,
                len: self.points.len(),
            })
    }

    /// Letzter Punkt der Folge.
    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Alle Punkte als Slice.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    /// Teilfolge ab `start` (leer, wenn `start` hinter dem Ende liegt).
    pub fn tail_from(&self, start: usize) -> PointSequence {
        Self {
            points: self.points.get(start..).unwrap_or_default().to_vec(),
        }
    }

    /// Flacher, renderfertiger Puffer (2 Floats Position, 4 Floats Farbe, Index je Punkt).
    pub fn extract_render_buffer(&self) -> RenderGeometry {
        let mut geometry = RenderGeometry::with_capacity(self.points.len());
        for point in &self.points {
            geometry.add(point.position, point.color);
        }
        geometry
    }
}

impl FromIterator<CurvePoint> for PointSequence {
    fn from_iter<I: IntoIterator<Item = CurvePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CONTROL_POINT_COLOR, CURVE_POINT_COLOR};

    fn sample_sequence() -> PointSequence {
        let mut seq = PointSequence::new();
        seq.push(CurvePoint::control(Vec2::new(0.0, 0.0)));
        seq.push(CurvePoint::curve(Vec2::new(0.5, -0.25)));
        seq.push(CurvePoint::new(Vec2::new(-1.0, 1.0), [0.0, 0.5, 1.0, 0.5]));
        seq
    }

    #[test]
    fn pop_returns_last_point() {
        let mut seq = sample_sequence();
        let popped = seq.pop().expect("Folge darf nicht leer sein");
        assert_eq!(popped.position, Vec2::new(-1.0, 1.0));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut seq = PointSequence::new();
        assert!(seq.pop().is_none());
    }

    #[test]
    fn position_out_of_range_reports_index_and_len() {
        let seq = sample_sequence();
        assert_eq!(
            seq.position(3),
            Err(CurveError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(seq.position(1), Ok(Vec2::new(0.5, -0.25)));
    }

    #[test]
    fn extend_keeps_order() {
        let mut seq = sample_sequence();
        let mut tail = PointSequence::new();
        tail.push(CurvePoint::curve(Vec2::new(0.9, 0.9)));
        seq.extend(tail);
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.position(3), Ok(Vec2::new(0.9, 0.9)));
        assert_eq!(seq.position(0), Ok(Vec2::ZERO));
    }

    #[test]
    fn tail_from_skips_leading_points() {
        let seq = sample_sequence();
        let tail = seq.tail_from(1);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail.position(0), Ok(Vec2::new(0.5, -0.25)));
        assert!(seq.tail_from(7).is_empty());
    }

    #[test]
    fn render_buffer_decodes_to_same_points() {
        let seq = sample_sequence();
        let geometry = seq.extract_render_buffer();

        assert_eq!(geometry.positions.len(), 6);
        assert_eq!(geometry.colors.len(), 12);
        assert_eq!(geometry.indices, vec![0, 1, 2]);
        assert_eq!(geometry.to_points(), seq.points().to_vec());
        assert_eq!(geometry.colors[0..4], CONTROL_POINT_COLOR);
        assert_eq!(geometry.colors[4..8], CURVE_POINT_COLOR);
    }

    #[test]
    fn render_buffer_of_empty_sequence_is_empty() {
        let geometry = PointSequence::new().extract_render_buffer();
        assert!(geometry.is_empty());
        assert!(geometry.to_points().is_empty());
    }
}
