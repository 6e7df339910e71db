//! Application-Layer: Controller, State, Events und Interaktion.

pub mod animation_clock;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Hält Interaktion, Animations-Uhr und Optionen der laufenden Sitzung.
pub mod state;

pub use animation_clock::AnimationClock;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerButton};
pub use interaction::{InteractionController, RevealPhase, RevealSettings};
pub use render_scene::build as build_render_scene;
pub use state::AppState;
