//! Core-Domänentypen: Punkte, Punktfolgen, Kurvenfamilien, Fehler.

pub mod curve_family;
pub mod error;
pub mod point;
pub mod point_sequence;
pub mod render_geometry;

pub use curve_family::CurveFamily;
pub use error::CurveError;
pub use point::{CurvePoint, CONTROL_POINT_COLOR, CURVE_POINT_COLOR};
pub use point_sequence::PointSequence;
pub use render_geometry::RenderGeometry;
