//! Rechteckraster-Werkzeug: zwei Ecken legen Länge und Richtung fest, die
//! Breite folgt senkrecht dazu. Das Raster wird über die ganze Fläche fortgesetzt.

mod geometry;
mod lifecycle;
mod state;

pub use state::{GridDivisionTool, GridFrame, GridPhase};
