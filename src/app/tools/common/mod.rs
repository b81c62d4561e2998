//! Gemeinsame Hilfsfunktionen für Unterteilungs-Werkzeuge.
//!
//! Aufgeteilt in:
//! - `context`: FaceContext (Fläche, Begrenzungs-Index, Optionen)
//! - `geometry`: ebenen-gebundene Vektoren, Normal-Kreuzprodukt
//! - `builder`: wiederholte Schnittlinien über einen Index-Bereich, Vorschau-Obergrenze

mod builder;
mod context;
mod geometry;

pub(crate) use builder::{exceeds_line_cap, repeated_lines, LineFamily};
pub use context::FaceContext;
pub(crate) use geometry::{confined_direction, perpendicular_in_plane};
