use glam::{Quat, Vec3};

use super::GrabMode;
use crate::core::geometry::{self, GrabPlane};
use crate::core::timescale::mass_from_dimensions;
use crate::core::{ActionId, EntityId, EntityProperties};

/// Zustand eines laufenden Grabs. Existiert genau zwischen Press und Release.
#[derive(Debug, Clone)]
pub struct GrabSession {
    /// Gegriffene Entity (exklusiv für die Dauer der Session)
    pub entity_id: EntityId,
    /// Aktueller Freiheitsgrad-Modus
    pub mode: GrabMode,
    /// Position beim Greifen
    pub start_position: Vec3,
    /// Zuletzt gelesene Live-Position
    pub current_position: Vec3,
    /// Zuletzt berechnete Zielposition
    pub target_position: Vec3,
    /// Akkumulierte Zielrotation; wird während des Grabs nie auf die Live-Rotation zurückgesetzt
    pub last_rotation: Quat,
    /// Vom Objektmittelpunkt zum ursprünglichen Grab-Punkt
    pub offset: Vec3,
    /// Grab-Ebene (Planar fix, Zylinder pro Tick neu)
    pub plane: GrabPlane,
    /// XZ-Abstand Kamera → Grab-Punkt beim letzten Modus-Wechsel
    pub xz_distance_to_grab: f32,
    /// Reichweite: Cutoff beim Greifen und Radial-Clamp des Ziels
    pub max_distance: f32,
    /// Masse aus Live-Abmessungen und Dichte
    pub mass: f32,
    /// Handle des Far-Grab-Constraints, erst nach erfolgreicher Erstellung gesetzt
    pub action_id: Option<ActionId>,
    /// Hat diese Session das Objekt dynamisch geschaltet?
    pub made_dynamic: bool,
    /// Letzte Schwerkraft ungleich Null
    pub original_gravity: Option<Vec3>,
}

impl GrabSession {
    /// Erstellt eine Session aus den Eigenschaften beim Greifen.
    pub fn new(
        entity_id: EntityId,
        props: &EntityProperties,
        offset: Vec3,
        max_distance: f32,
        made_dynamic: bool,
    ) -> Self {
        Self {
            entity_id,
            mode: GrabMode::Planar,
            start_position: props.position,
            current_position: props.position,
            target_position: props.position,
            last_rotation: props.rotation,
            offset,
            plane: GrabPlane::horizontal(props.position + offset),
            xz_distance_to_grab: 0.0,
            max_distance,
            mass: mass_from_dimensions(props.dimensions, props.density),
            action_id: None,
            made_dynamic,
            original_gravity: (props.gravity != Vec3::ZERO).then_some(props.gravity),
        }
    }

    /// Verankert Ebene und Zylinder-Abstand neu an der aktuellen Objektposition.
    pub fn reanchor(&mut self, camera_position: Vec3) {
        self.plane = GrabPlane::horizontal(self.current_position + self.offset);
        self.xz_distance_to_grab = geometry::xz_distance(camera_position, self.plane.point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reanchor_uses_current_position() {
        let props = EntityProperties {
            position: Vec3::new(0.0, 1.0, -5.0),
            ..EntityProperties::default()
        };
        let mut session = GrabSession::new(EntityId(1), &props, Vec3::new(0.0, 0.5, 0.0), 50.0, false);
        session.current_position = Vec3::new(3.0, 1.0, -4.0);
        session.reanchor(Vec3::new(0.0, 1.7, 0.0));

        assert_eq!(session.plane.point, Vec3::new(3.0, 1.5, -4.0));
        assert_eq!(session.plane.normal, Vec3::Y);
        assert_relative_eq!(session.xz_distance_to_grab, 5.0);
    }
}
