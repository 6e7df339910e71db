//! Application State: zentrale Datenhaltung.

use super::animation_clock::AnimationClock;
use super::interaction::{InteractionController, RevealSettings};
use super::CommandLog;
use crate::shared::DemoOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte, Kurve und Animationszustand
    pub interaction: InteractionController,
    /// Uhr für die feste Tick-Rate
    pub clock: AnimationClock,
    /// Beim Start geladene Optionen (Farben, Größen, Schrittweite)
    pub options: DemoOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(DemoOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: DemoOptions) -> Self {
        let options = options.validated();
        Self {
            interaction: InteractionController::new(
                RevealSettings::from_options(&options),
                options.initial_family,
            ),
            clock: AnimationClock::new(options.tick_interval_secs()),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Anzahl der Kontrollpunkte inklusive doppeltem Startpunkt (für UI-Anzeige)
    pub fn control_point_count(&self) -> usize {
        self.interaction.control_points().len()
    }

    /// Anzahl der sichtbaren Kurvenpunkte (für UI-Anzeige)
    pub fn curve_point_count(&self) -> usize {
        self.interaction.curve().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
