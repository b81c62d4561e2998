//! Face Divider (headless).
//!
//! Spielt ein Szenario (Flächen + Host-Ereignisse) ab und gibt die
//! eingefügten Kanten als JSON aus.

use anyhow::{bail, Context};
use face_divider::app::bootstrap;
use face_divider::{load_scenario, run_scenario, write_report, DividerOptions};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    bootstrap::initialize();

    let mut args = std::env::args().skip(1);
    let Some(scenario_path) = args.next().map(PathBuf::from) else {
        bail!("Aufruf: face-divider <szenario.toml> [ausgabe.json]");
    };
    let output_path = args.next().map(PathBuf::from);

    let options = DividerOptions::load_from_file(&DividerOptions::config_path());
    let scenario = load_scenario(&scenario_path)?;
    let state = run_scenario(&scenario, options)?;
    let report = write_report(&state)?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, report)
                .with_context(|| format!("Ausgabe nicht schreibbar: {}", path.display()))?;
            log::info!("{} Kanten geschrieben nach: {}", state.edge_count(), path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}
