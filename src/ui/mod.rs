//! UI-Komponenten: Zeichenbereich-Input, Tastatur, Status-Bar.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Übersetzt egui-Eingaben in `AppIntent`s und zeigt den Animationszustand an.
pub mod status;

pub use input::{collect_viewport_intents, pixel_to_ndc};
pub use status::render_status_bar;
