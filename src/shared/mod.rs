//! Geteilte Typen und layer-neutrale Kurven-Geometrie.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod curve_geometry;
pub mod options;
mod render_scene;
pub mod segment_assembler;

pub use curve_geometry::{evaluate_segment, sample_count, DEFAULT_STEP_SIZE};
pub use options::DemoOptions;
pub use render_scene::RenderScene;
pub use segment_assembler::{assemble_appended, assemble_curve, CurveAssembly, Window};
