//! Use-Case-Funktionen für Modell-Änderungen.
//!
//! - `apply_tool_result`: Werkzeug-Ergebnis als Kanten einfügen

mod apply_tool_result;

pub use apply_tool_result::{apply_tool_result, CommitReport};
