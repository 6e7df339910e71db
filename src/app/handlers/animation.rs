//! Handler für die Reveal-/Lösch-Animation.

use crate::app::AppState;

/// Dreht die Animations-Uhr weiter und führt alle fälligen Ticks aus.
pub fn advance(state: &mut AppState, dt_seconds: f32) {
    let ticks = state.clock.advance(dt_seconds);
    for _ in 0..ticks {
        if !state.interaction.is_busy() {
            break;
        }
        state.interaction.tick();
    }
}
