//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, RevealPhase};

fn phase_label(phase: RevealPhase) -> String {
    match phase {
        RevealPhase::Idle => "Bereit".to_string(),
        RevealPhase::Interpolating => "Zeichnet…".to_string(),
        RevealPhase::Erasing { remaining } => format!("Löscht ({} übrig)", remaining),
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let interaction = &state.interaction;
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", interaction.family().label()));

            ui.separator();

            ui.label(format!(
                "Kontrollpunkte: {} | Kurvenpunkte: {} | Ausstehend: {}",
                state.control_point_count(),
                state.curve_point_count(),
                interaction.pending().len()
            ));

            ui.separator();

            ui.label(phase_label(interaction.phase()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak("Links: Punkt | Rechts: Entfernen | Leertaste: Modus | R: Neu | Q/Esc: Ende");
            });
        });
    });
}
