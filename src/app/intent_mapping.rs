//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, PointerButton};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { button, ndc } => match button {
            PointerButton::Primary => vec![AppCommand::AddControlPoint { position: ndc }],
            PointerButton::Secondary => vec![AppCommand::RemoveControlPoint],
            PointerButton::Tertiary => vec![],
        },
        AppIntent::CycleCurveFamilyRequested => vec![AppCommand::CycleCurveFamily],
        AppIntent::ReinterpolateRequested => vec![AppCommand::Reinterpolate],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FrameAdvanced { dt_seconds } => {
            vec![AppCommand::AdvanceAnimation { dt_seconds }]
        }
    }
}
