//! Face Divider Library.
//! Unterteilt planare Flächen (mit Löchern) in parallele Schnittlinien oder ein
//! Rechteckraster. Core-Funktionalität als Library exportiert für Tests und Host-Anbindung.

pub mod app;
pub mod core;
pub mod scenario;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommitReport, DivisionMode, SessionPhase,
    UiState,
};
pub use core::{Face, FaceId, Model, ModelEdge, PointClassification, Segment};
pub use scenario::{load_scenario, run_scenario, write_report, Scenario};
pub use shared::{parse_length, DividerOptions, LengthUnit, RenderScene};
