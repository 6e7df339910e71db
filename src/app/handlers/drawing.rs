//! Handler für Kontrollpunkte und Kurvenaufbau.

use crate::app::AppState;

/// Hängt einen Kontrollpunkt an (ignoriert, solange eine Animation läuft).
pub fn add_control_point(state: &mut AppState, position: glam::Vec2) -> anyhow::Result<()> {
    state.interaction.add_control_point(position)?;
    Ok(())
}

/// Entfernt den letzten Kontrollpunkt samt zugehörigen Kurvenpunkten.
pub fn remove_control_point(state: &mut AppState) {
    state.interaction.remove_control_point();
}

/// Schaltet zur nächsten Kurvenfamilie.
pub fn cycle_curve_family(state: &mut AppState) -> anyhow::Result<()> {
    state.interaction.cycle_family()?;
    Ok(())
}

/// Baut die Kurve mit der aktuellen Familie neu auf.
pub fn reinterpolate(state: &mut AppState) -> anyhow::Result<()> {
    state.interaction.reinterpolate()?;
    Ok(())
}
