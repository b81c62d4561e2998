//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen, Einheiten, Unterteilungs-Modi und die Render-Szene, die zwischen `app`
//! und dem Host geteilt werden.

mod mode;
pub mod options;
mod render_scene;
pub mod units;

pub use mode::DivisionMode;
pub use options::DividerOptions;
pub use options::{MAX_LINES_PER_AXIS, TOLERANCE};
pub use render_scene::RenderScene;
pub use units::{parse_length, LengthUnit};
