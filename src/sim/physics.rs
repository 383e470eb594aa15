//! Vereinfachte Constraint-Physik für den Sim-Host.

use glam::Vec3;

use crate::core::{EntityProperties, GrabTarget};

/// Anteil des Restabstands, der in `dt` Sekunden bei Zeitkonstante `timescale` abgebaut wird.
fn approach_factor(dt: f32, timescale: f32) -> f32 {
    if timescale <= f32::EPSILON {
        return 1.0;
    }
    1.0 - (-dt / timescale).exp()
}

/// Zieht eine Entity exponentiell an das Far-Grab-Ziel heran.
///
/// Position-Ziele setzen zusätzlich die resultierende Geschwindigkeit,
/// Rotations-Ziele lassen die Geschwindigkeit unverändert.
pub fn apply_far_grab(
    props: &mut EntityProperties,
    velocity: &mut Vec3,
    target: &GrabTarget,
    dt: f32,
) {
    match *target {
        GrabTarget::Position {
            target_position,
            linear_time_scale,
        } => {
            let k = approach_factor(dt, linear_time_scale);
            let next = props.position.lerp(target_position, k);
            *velocity = (next - props.position) / dt;
            props.position = next;
        }
        GrabTarget::Rotation {
            target_rotation,
            angular_time_scale,
        } => {
            let k = approach_factor(dt, angular_time_scale);
            props.rotation = props.rotation.slerp(target_rotation, k).normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Quat;

    #[test]
    fn test_position_converges_towards_target() {
        let mut props = EntityProperties::default();
        let mut velocity = Vec3::ZERO;
        let target = GrabTarget::Position {
            target_position: Vec3::new(1.0, 0.0, 0.0),
            linear_time_scale: 0.1,
        };

        apply_far_grab(&mut props, &mut velocity, &target, 0.1);
        assert_relative_eq!(props.position.x, 1.0 - (-1.0f32).exp(), epsilon = 1e-5);
        assert!(velocity.x > 0.0);

        for _ in 0..20 {
            apply_far_grab(&mut props, &mut velocity, &target, 0.1);
        }
        assert_relative_eq!(props.position.x, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rotation_target_keeps_position() {
        let mut props = EntityProperties::default();
        let mut velocity = Vec3::ZERO;
        let target = GrabTarget::Rotation {
            target_rotation: Quat::from_rotation_y(1.0),
            angular_time_scale: 0.0,
        };

        apply_far_grab(&mut props, &mut velocity, &target, 0.033);
        assert_eq!(props.position, Vec3::ZERO);
        assert!(props.rotation.angle_between(Quat::from_rotation_y(1.0)) < 1e-3);
    }
}
