//! Fehlertypen der Kurven-Engine.

use thiserror::Error;

/// Fehler beim Zugriff auf Kontrollpunkte oder beim Zusammensetzen einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Index-Zugriff außerhalb der Punktfolge.
    #[error("Punkt-Index {index} liegt außerhalb der Folge (Länge {len})")]
    InvalidIndex { index: usize, len: usize },
    /// Für die gewählte Kurvenfamilie gibt es noch nicht genug Kontrollpunkte.
    #[error("Zu wenige Kontrollpunkte für eine Kurve: {available} vorhanden, {required} benötigt")]
    PrematureInterpolation { available: usize, required: usize },
}
