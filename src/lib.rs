//! Spline Reveal: animierte Kurvendemo.
//! Core-Funktionalität als Library exportiert für Tests, Benchmarks und Fuzzing.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PointerButton, RevealPhase};
pub use core::{CurveError, CurveFamily, CurvePoint, PointSequence, RenderGeometry};
pub use shared::{
    assemble_appended, assemble_curve, evaluate_segment, CurveAssembly, DemoOptions, RenderScene,
};
