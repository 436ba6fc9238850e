//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use anyhow::Context;

use crate::app::AppState;
use crate::core::RouteLayer;
use crate::feature_set::{parse_feature_set, write_feature_set};

/// Lädt ein FeatureSet und ersetzt die Routen-Ebene.
///
/// Eine laufende Session wird vorher abgebrochen.
pub fn load_routes(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei {path} konnte nicht gelesen werden"))?;
    let routes = parse_feature_set(&content).with_context(|| format!("Datei {path}"))?;

    super::edit::cancel_edit(state);
    state.layer = RouteLayer::from_routes(routes);
    state.last_outcome = None;
    state.last_applied = None;

    log::info!("{} Trasse(n) geladen aus {}", state.layer.len(), path);
    state.ui.status_message = None;
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Speichert alle Trassen als FeatureSet.
///
/// `None` speichert unter dem zuletzt bekannten Pfad.
pub fn save_routes(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.ui.current_file_path.clone()) else {
        anyhow::bail!("Kein Speicherpfad bekannt");
    };

    let content = write_feature_set(state.layer.routes())?;
    std::fs::write(&path, content)
        .with_context(|| format!("Datei {path} konnte nicht geschrieben werden"))?;

    log::info!("{} Trasse(n) gespeichert nach {}", state.layer.len(), path);
    state.ui.current_file_path = Some(path);
    Ok(())
}
