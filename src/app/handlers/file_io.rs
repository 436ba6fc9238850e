//! Handler für Datei-Operationen (Laden, Speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt Trassen aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_routes(state, path)
}

/// Speichert die Trassen.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_routes(state, path)
}
