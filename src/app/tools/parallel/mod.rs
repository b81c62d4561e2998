//! Parallele-Linien-Werkzeug: Basispunkt, Richtung und Abstand wählen,
//! dann eine Schar paralleler Schnitte über die ganze Fläche legen.

mod geometry;
mod lifecycle;
mod state;

pub use state::{ParallelDivisionTool, ParallelFrame, ParallelPhase};

#[cfg(test)]
mod tests;
