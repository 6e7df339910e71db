//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kontrollpunkte & Kurve ===
            AppCommand::AddControlPoint { position } => {
                handlers::drawing::add_control_point(state, position)?
            }
            AppCommand::RemoveControlPoint => handlers::drawing::remove_control_point(state),
            AppCommand::CycleCurveFamily => handlers::drawing::cycle_curve_family(state)?,
            AppCommand::Reinterpolate => handlers::drawing::reinterpolate(state)?,

            // === Animation ===
            AppCommand::AdvanceAnimation { dt_seconds } => {
                handlers::animation::advance(state, dt_seconds)
            }

            // === Anwendung ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
