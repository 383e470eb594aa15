//! Zeitkonstanten-Modell für den Far-Grab-Constraint.
//!
//! Schwere oder weit entfernte Objekte reagieren träger (größere Zeitkonstante),
//! damit der Constraint keine unbegrenzten Kräfte aufbringt.

use glam::Vec3;

/// Parameter des Zeitkonstanten-Modells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimescaleModel {
    /// Basis-Zeitkonstante in Sekunden und zugleich Untergrenze
    pub base: f32,
    /// Masse, bei der die Basis-Zeitkonstante unverändert gilt
    pub unity_mass: f32,
    /// Distanz, bei der die Basis-Zeitkonstante unverändert gilt
    pub unity_distance: f32,
}

impl TimescaleModel {
    /// Zeitkonstante für Masse und Kamera-Distanz, nie kleiner als `base`.
    pub fn response_timescale(&self, mass: f32, camera_distance: f32) -> f32 {
        let scaled =
            self.base * mass / self.unity_mass * camera_distance / self.unity_distance;
        // f32::max ignoriert NaN
        scaled.max(self.base)
    }
}

/// Masse aus Bounding-Box-Volumen und Dichte.
pub fn mass_from_dimensions(dimensions: Vec3, density: f32) -> f32 {
    dimensions.x * dimensions.y * dimensions.z * density
}
