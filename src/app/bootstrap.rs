//! Einmalige Prozess-Initialisierung (Logger).

use std::sync::atomic::{AtomicBool, Ordering};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialisiert den Logger genau einmal pro Prozess.
///
/// Gibt `true` zurück, wenn dieser Aufruf die Initialisierung durchgeführt hat.
pub fn initialize() -> bool {
    if INITIALIZED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return false;
    }

    let logger = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
    if logger.is_err() {
        // Ein anderer Logger (z.B. aus Tests) ist bereits aktiv
        log::debug!("Logger war bereits gesetzt");
    }

    log::info!("Face Divider v{} startet...", env!("CARGO_PKG_VERSION"));
    true
}

/// Wurde `initialize` bereits ausgeführt?
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}
