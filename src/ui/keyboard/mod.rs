//! Tastatur-Shortcuts der Demo.
//!
//! Escape und Q beenden, Leertaste wechselt die Kurvenfamilie,
//! R berechnet die Kurve neu.

use crate::app::AppIntent;

/// Verarbeitet Tastatur-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, escape, q, space, r) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::R),
        )
    });

    if escape || q {
        events.push(AppIntent::ExitRequested);
    }

    if space {
        events.push(AppIntent::CycleCurveFamilyRequested);
    }

    // Nur kleines 'r'
    if r && !modifiers.shift && !modifiers.command {
        events.push(AppIntent::ReinterpolateRequested);
    }

    events
}

#[cfg(test)]
mod tests;
