//! Szenario-Dateien: Flächen plus Event-Skript, headless abgespielt.
//!
//! Ein Szenario (TOML) beschreibt die Flächen des Modells und eine Folge von
//! Host-Ereignissen. Der Runner spielt sie als `AppIntent`s durch den Controller
//! ab; der Writer exportiert die entstandenen Kanten als JSON.

pub mod parser;
pub mod runner;
pub mod writer;

pub use parser::{load_scenario, parse_scenario, FaceEntry, Scenario, Step};
pub use runner::run_scenario;
pub use writer::write_report;
