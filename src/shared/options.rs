//! Zentrale Konfiguration für den Route-Cut-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_EPSILON;
use crate::session::{SessionConfig, SnapPolicy};

// ── Geometrie ───────────────────────────────────────────────────────

/// Toleranz für Positionsvergleiche (Einheiten des Koordinatensystems).
pub const GEOMETRY_EPSILON: f64 = DEFAULT_EPSILON;

// ── Picking ─────────────────────────────────────────────────────────

/// Pick-Radius für Klicks auf Trassen (Grad bei WGS84, rund 50 m).
pub const ROUTE_PICK_RADIUS: f64 = 0.0005;

/// Hover-Vorschau des Schnittpunkts standardmäßig aktiv.
pub const HOVER_SNAP_ENABLED: bool = true;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `route_cut_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Toleranz für Positionsvergleiche
    #[serde(default = "default_geometry_epsilon")]
    pub geometry_epsilon: f64,

    // ── Schnitt ─────────────────────────────────────────────────
    /// Maximale Klick-Distanz zum Segment; `None` akzeptiert jeden Klick
    #[serde(default)]
    pub max_snap_distance: Option<f64>,
    /// Hover-Vorschau des projizierten Schnittpunkts
    #[serde(default = "default_hover_snap_enabled")]
    pub hover_snap_enabled: bool,

    // ── Picking ─────────────────────────────────────────────────
    /// Pick-Radius für Klicks auf Trassen
    #[serde(default = "default_route_pick_radius")]
    pub route_pick_radius: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            geometry_epsilon: GEOMETRY_EPSILON,
            max_snap_distance: None,
            hover_snap_enabled: HOVER_SNAP_ENABLED,
            route_pick_radius: ROUTE_PICK_RADIUS,
        }
    }
}

fn default_geometry_epsilon() -> f64 {
    GEOMETRY_EPSILON
}

fn default_hover_snap_enabled() -> bool {
    HOVER_SNAP_ENABLED
}

fn default_route_pick_radius() -> f64 {
    ROUTE_PICK_RADIUS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("route-cut"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("route_cut_editor.toml")
    }

    /// Snap-Verhalten der Session.
    ///
    /// Eine negative oder nicht-endliche Maximaldistanz gilt als "aus".
    pub fn snap_policy(&self) -> SnapPolicy {
        match self.max_snap_distance {
            Some(max) if max.is_finite() && max >= 0.0 => SnapPolicy::RejectBeyond(max),
            _ => SnapPolicy::AcceptAny,
        }
    }

    /// Leitet die Session-Einstellungen ab.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            epsilon: self.geometry_epsilon,
            snap_policy: self.snap_policy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_accept_any_click() {
        let options = EditorOptions::default();

        assert_eq!(options.snap_policy(), SnapPolicy::AcceptAny);
        assert_eq!(options.session_config(), SessionConfig::default());
    }

    #[test]
    fn max_snap_distance_maps_to_reject_policy() {
        let options = EditorOptions {
            max_snap_distance: Some(2.5),
            ..EditorOptions::default()
        };
        assert_eq!(options.snap_policy(), SnapPolicy::RejectBeyond(2.5));

        let broken = EditorOptions {
            max_snap_distance: Some(-1.0),
            ..EditorOptions::default()
        };
        assert_eq!(broken.snap_policy(), SnapPolicy::AcceptAny);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let options: EditorOptions = toml::from_str("max_snap_distance = 0.001\n").unwrap();

        assert_eq!(options.max_snap_distance, Some(0.001));
        assert_eq!(options.route_pick_radius, ROUTE_PICK_RADIUS);
        assert!(options.hover_snap_enabled);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "route_cut_editor_options_{}.toml",
            std::process::id()
        ));
        let options = EditorOptions {
            geometry_epsilon: 1e-6,
            max_snap_distance: Some(3.0),
            hover_snap_enabled: false,
            route_pick_radius: 0.25,
        };

        options.save_to_file(&path).unwrap();
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/route_cut_editor.toml",
        ));
        assert_eq!(loaded, EditorOptions::default());
    }
}
