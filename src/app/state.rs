//! Application State: Modell, Unterteilungs-Sitzung, UI-Rückmeldungen.

mod app_state;
mod session;
mod ui;

pub use app_state::AppState;
pub use session::SessionPhase;
pub use ui::UiState;
