//! Zeichenbereich-Input: Maustasten → AppIntent mit NDC-Position.

use super::keyboard;
use crate::app::{AppIntent, PointerButton};

/// Rechnet eine Pixelposition relativ zur linken oberen Ecke in NDC um.
///
/// `ndc_x = -1 + px * 2 / width`, `ndc_y = 1 - py * 2 / height`.
pub fn pixel_to_ndc(pixel: glam::Vec2, viewport_size: [f32; 2]) -> glam::Vec2 {
    let [width, height] = viewport_size;
    if width <= 0.0 || height <= 0.0 {
        return glam::Vec2::ZERO;
    }
    glam::Vec2::new(-1.0 + pixel.x * 2.0 / width, 1.0 - pixel.y * 2.0 / height)
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Tertiary),
        _ => None,
    }
}

/// Sammelt Tastatur- und Maus-Events des Zeichenbereichs als AppIntents.
pub fn collect_viewport_intents(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let mut events = keyboard::collect_keyboard_intents(ui);

    if !response.hovered() {
        return events;
    }

    let rect = response.rect;
    let viewport_size = [rect.width(), rect.height()];
    let pressed: Vec<(egui::PointerButton, egui::Pos2)> = ui.input(|i| {
        let Some(pos) = i.pointer.interact_pos() else {
            return Vec::new();
        };
        [
            egui::PointerButton::Primary,
            egui::PointerButton::Secondary,
            egui::PointerButton::Middle,
        ]
        .into_iter()
        .filter(|&b| i.pointer.button_pressed(b))
        .map(|b| (b, pos))
        .collect()
    });

    for (button, pos) in pressed {
        let Some(button) = map_button(button) else {
            continue;
        };
        let local = pos - rect.min;
        events.push(AppIntent::PointerPressed {
            button,
            ndc: pixel_to_ndc(glam::Vec2::new(local.x, local.y), viewport_size),
        });
    }

    events
}
