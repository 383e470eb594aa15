//! 3D-Kamera mit Pick-Ray-Berechnung aus Screen-Koordinaten.

use glam::{Quat, Vec2, Vec3};

use super::CursorSample;

/// Strahl von der Kamera durch einen Screen-Punkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    /// Ursprung in Welt-Koordinaten
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

/// Perspektivische Kamera (rechtshändig, Y oben, Blick entlang -Z).
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec3,
    /// Orientierung (Identität = Blick entlang -Z)
    pub orientation: Quat,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Vertikales Sichtfeld in Radiant
    pub vertical_fov: f32,
}

impl Camera3D {
    /// Standard-Sichtfeld (45°).
    pub const DEFAULT_FOV: f32 = std::f32::consts::FRAC_PI_4;

    /// Erstellt eine Kamera im Ursprung mit 1280×720-Viewport.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            viewport_size: Vec2::new(1280.0, 720.0),
            vertical_fov: Self::DEFAULT_FOV,
        }
    }

    /// Blickrichtung.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Rechts-Vektor der Kamera.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Oben-Vektor der Kamera.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Richtet die Kamera per Yaw/Pitch auf einen Punkt aus (kein Roll).
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        let yaw = (-dir.x).atan2(-dir.z);
        let pitch = dir.y.clamp(-1.0, 1.0).asin();
        self.orientation = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);
    }

    /// Berechnet den Pick-Ray durch ein Screen-Sample.
    ///
    /// Screen-Ursprung oben links, Y wächst nach unten.
    pub fn compute_pick_ray(&self, sample: CursorSample) -> PickRay {
        let size = self.viewport_size.max(Vec2::ONE);
        let ndc_x = (sample.x / size.x) * 2.0 - 1.0;
        let ndc_y = 1.0 - (sample.y / size.y) * 2.0;
        let tan_half = (self.vertical_fov * 0.5).tan();
        let aspect = size.x / size.y;

        let direction = (self.forward()
            + self.right() * (ndc_x * tan_half * aspect)
            + self.up() * (ndc_y * tan_half))
            .normalize();

        PickRay {
            origin: self.position,
            direction,
        }
    }

    /// Screen-Mitte des Viewports.
    pub fn screen_center(&self) -> CursorSample {
        self.viewport_size * 0.5
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}
