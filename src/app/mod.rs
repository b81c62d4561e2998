//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod bootstrap;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Modell, Sitzung, Rückmeldungen).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SessionPhase, UiState};
pub use tools::{DivisionMode, DivisionTool, ToolPreview};
pub use use_cases::editing::CommitReport;
