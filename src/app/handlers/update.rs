//! Handler für den Update-Pass (Body des Debounce-Ticks).
//!
//! Liest die Live-Eigenschaften, löst die Geometrie des aktuellen Modus,
//! berechnet die Zeitkonstante und erstellt bzw. aktualisiert den
//! Far-Grab-Constraint. Am Ende meldet sich der Tick selbst neu an.

use glam::Vec3;

use crate::app::conflict::{self, grab_tag};
use crate::app::ports::GrabHost;
use crate::app::state::{GrabMode, GrabSession};
use crate::app::GrabState;
use crate::core::geometry;
use crate::core::timescale::mass_from_dimensions;
use crate::core::{ActionKind, DragTracker, FarGrabParams, GrabTarget};
use crate::shared::GrabOptions;

use super::lifecycle;

/// Führt einen Update-Pass aus.
///
/// Ist die Entity nicht verfügbar oder ein HMD aktiv, wird der Pass ohne
/// Zustandsänderung abgebrochen und der Tick nicht neu angemeldet; die
/// Session bleibt aktiv, bis ein Release kommt.
pub fn run_update_pass<H: GrabHost + ?Sized>(
    state: &mut GrabState,
    host: &mut H,
) -> anyhow::Result<()> {
    // Pending-Flag vor dem Body löschen, damit der Body neu anmelden kann
    state.scheduler.cancel_tick();

    let GrabState {
        session,
        drag,
        options,
        ..
    } = state;
    let Some(session) = session.as_mut() else {
        return Ok(());
    };
    if host.is_hmd_active() {
        return Ok(());
    }
    let Some(props) = host.properties(session.entity_id) else {
        log::debug!(
            "Entity {} nicht verfügbar, Update-Pass übersprungen",
            session.entity_id
        );
        return Ok(());
    };

    if props.gravity != Vec3::ZERO {
        session.original_gravity = Some(props.gravity);
    }
    session.current_position = props.position;
    session.mass = mass_from_dimensions(props.dimensions, props.density);

    let target = solve_target(session, drag, options, &*host);
    let params = FarGrabParams {
        target,
        tag: grab_tag(host.session_id()),
        ttl: options.action_ttl_secs,
    };

    let entity_id = session.entity_id;
    match session.action_id {
        Some(action_id) => {
            if let Err(e) = host.update_action(entity_id, action_id, &params) {
                log::warn!("Far-Grab-Update für {} fehlgeschlagen: {:#}", entity_id, e);
            }
        }
        None => {
            if conflict::entity_is_grabbed_by_other(&*host, entity_id) || props.equipped {
                log::debug!("Entity {} wird bereits gehalten, Constraint verschoben", entity_id);
            } else {
                match host.add_action(ActionKind::FarGrab, entity_id, &params) {
                    Ok(action_id) => {
                        log::debug!("Far-Grab {:?} an Entity {} erstellt", action_id, entity_id);
                        session.action_id = Some(action_id);
                    }
                    Err(e) => {
                        log::warn!("Far-Grab an {} nicht erstellt: {:#}", entity_id, e);
                    }
                }
            }
        }
    }

    lifecycle::schedule_tick(state, &*host);
    Ok(())
}

/// Löst die Geometrie des aktuellen Modus und liefert das Constraint-Ziel.
fn solve_target<H: GrabHost + ?Sized>(
    session: &mut GrabSession,
    drag: &mut DragTracker,
    options: &GrabOptions,
    host: &H,
) -> GrabTarget {
    let camera_position = host.camera_position();
    let camera_orientation = host.camera_orientation();
    let model = options.timescale_model();

    match session.mode {
        GrabMode::Rotate => {
            let delta = drag.consume_delta();
            let delta_rotation =
                geometry::rotation_from_drag(delta, camera_orientation, options.rotate_strength_deg);
            // Neue Rotation wird im Weltraum vor der akkumulierten angewendet
            session.last_rotation = (delta_rotation * session.last_rotation).normalize();

            let distance = session.current_position.distance(camera_position);
            GrabTarget::Rotation {
                target_rotation: session.last_rotation,
                angular_time_scale: model.response_timescale(session.mass, distance),
            }
        }
        GrabMode::VerticalCylinder | GrabMode::Planar => {
            let ray = host.compute_pick_ray(drag.current());
            let point_on_plane = if session.mode == GrabMode::VerticalCylinder {
                let forward = camera_orientation * Vec3::NEG_Z;
                if let Some(plane) =
                    geometry::cylinder_plane(camera_position, forward, session.xz_distance_to_grab)
                {
                    session.plane = plane;
                }
                let point = geometry::intersect_ray_with_plane(
                    camera_position,
                    &ray,
                    &session.plane,
                    session.max_distance,
                );
                session.plane.point = point;
                point
            } else {
                let point = geometry::intersect_ray_with_plane(
                    camera_position,
                    &ray,
                    &session.plane,
                    session.max_distance,
                );
                geometry::clamp_to_radius(camera_position, point, session.max_distance)
            };

            session.target_position = point_on_plane - session.offset;
            let distance = session.target_position.distance(camera_position);
            GrabTarget::Position {
                target_position: session.target_position,
                linear_time_scale: model.response_timescale(session.mass, distance),
            }
        }
    }
}
