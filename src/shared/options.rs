//! Zentrale Konfiguration für das Maus-Greifen.
//!
//! `GrabOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::TimescaleModel;

// ── Reichweite ──────────────────────────────────────────────────────

/// Objekte, die kleiner als dieser Raumwinkel erscheinen, sind nicht greifbar.
pub const MAX_SOLID_ANGLE: f32 = 0.01;

// ── Update-Loop ─────────────────────────────────────────────────────

/// Debounce-Intervall des Update-Ticks (≈30 Hz).
pub const TICK_INTERVAL_MS: u64 = 33;
/// Lebensdauer eines Far-Grab-Constraints in Sekunden.
pub const ACTION_TTL_SECS: f32 = 10.0;

// ── Zeitkonstanten ──────────────────────────────────────────────────

/// Basis-Zeitkonstante (wie schnell Objekte ihr Ziel erreichen).
pub const TIMESCALE_BASE: f32 = 0.1;
/// Masse, bei der die Basis-Zeitkonstante unverändert gilt.
pub const TIMESCALE_UNITY_MASS: f32 = 1200.0;
/// Distanz, bei der die Basis-Zeitkonstante unverändert gilt.
pub const TIMESCALE_UNITY_DISTANCE: f32 = 6.0;

// ── Rotation ────────────────────────────────────────────────────────

/// Rotationswinkel in Grad pro Pixel Drag (von Hand abgestimmt).
pub const ROTATE_STRENGTH_DEG: f32 = 0.4;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Grab-Optionen.
/// Wird als `mouse_grab.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabOptions {
    /// Minimaler Raumwinkel; `max_distance = Durchmesser / max_solid_angle`
    pub max_solid_angle: f32,
    /// Debounce-Intervall in Millisekunden
    pub tick_interval_ms: u64,
    /// Lebensdauer des Constraints in Sekunden
    pub action_ttl_secs: f32,
    /// Basis-Zeitkonstante in Sekunden
    pub timescale_base: f32,
    /// Referenzmasse der Zeitkonstante
    pub unity_mass: f32,
    /// Referenzdistanz der Zeitkonstante
    pub unity_distance: f32,
    /// Rotate-Modus: Grad pro Pixel
    pub rotate_strength_deg: f32,
}

impl Default for GrabOptions {
    fn default() -> Self {
        Self {
            max_solid_angle: MAX_SOLID_ANGLE,
            tick_interval_ms: TICK_INTERVAL_MS,
            action_ttl_secs: ACTION_TTL_SECS,
            timescale_base: TIMESCALE_BASE,
            unity_mass: TIMESCALE_UNITY_MASS,
            unity_distance: TIMESCALE_UNITY_DISTANCE,
            rotate_strength_deg: ROTATE_STRENGTH_DEG,
        }
    }
}

impl GrabOptions {
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
            .unwrap_or_else(|_| std::path::PathBuf::from("mouse_grab"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mouse_grab.toml")
    }

    /// Maximale Grab-Reichweite für eine Bounding-Box mit diesem Durchmesser.
    ///
    /// Dient zugleich als Cutoff beim Greifen und als Radial-Clamp des Ziels.
    pub fn max_grab_distance(&self, bounding_diameter: f32) -> f32 {
        bounding_diameter / self.max_solid_angle
    }

    /// Debounce-Intervall als `Duration`.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    /// Zeitkonstanten-Modell aus den aktuellen Optionen.
    pub fn timescale_model(&self) -> TimescaleModel {
        TimescaleModel {
            base: self.timescale_base,
            unity_mass: self.unity_mass,
            unity_distance: self.unity_distance,
        }
    }
}
