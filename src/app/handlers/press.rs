//! Handler für den Grab-Start (Press).

use crate::app::conflict;
use crate::app::notification::{self, ManipulationMessage};
use crate::app::ports::{GrabHost, RenderState};
use crate::app::state::GrabSession;
use crate::app::GrabState;
use crate::core::geometry;
use crate::core::{CursorSample, EntityEdit, PickKind};

use super::{lifecycle, modifiers, HOOK_ARGS};

/// Versucht, das zuletzt gepickte Objekt zu greifen.
///
/// Alle nicht erfüllten Vorbedingungen (Overlay, kein Treffer, nicht greifbar,
/// außer Reichweite) sind stille No-ops; der Controller bleibt dann Idle.
pub fn begin_grab<H: GrabHost + ?Sized>(
    state: &mut GrabState,
    host: &mut H,
    position: CursorSample,
) -> anyhow::Result<()> {
    if state.is_active() {
        return Ok(());
    }

    if host.overlay_at_reticle() || host.last_overlay_pick().is_hit() {
        return Ok(());
    }

    let pick = host.last_entity_pick();
    let Some(entity_id) = pick.object.filter(|_| pick.kind == PickKind::Entity) else {
        host.set_render_state(RenderState::Idle);
        return Ok(());
    };

    let Some(props) = host.properties(entity_id) else {
        log::debug!("Gepickte Entity {} nicht verfügbar", entity_id);
        return Ok(());
    };
    if !props.is_grabbable() || props.equipped {
        return Ok(());
    }

    let camera_position = host.camera_position();
    let diameter = props.bounding_diameter();
    let max_distance = state.options.max_grab_distance(diameter);
    if props.position.distance(camera_position) > max_distance {
        log::debug!(
            "Entity {} außer Reichweite ({:.1} > {:.1})",
            entity_id,
            props.position.distance(camera_position),
            max_distance
        );
        return Ok(());
    }

    host.set_render_state(RenderState::Grabbed);
    host.lock_end(Some(entity_id));
    host.unhighlight(entity_id);
    host.set_beacon_height(diameter);

    let reticle = host.reticle_position();
    state.drag.begin_drag(position, reticle);

    let made_dynamic = if props.dynamic {
        false
    } else {
        match host.edit(entity_id, EntityEdit::make_dynamic()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Entity {} konnte nicht dynamisch geschaltet werden: {:#}", entity_id, e);
                false
            }
        }
    };

    // Erster Grab-Punkt: Projektion auf den geraden Pick-Ray, nicht der Ebenen-Solver
    let ray = host.compute_pick_ray(position);
    let grab_point = geometry::nearest_point_on_ray(camera_position, ray.direction, props.position);
    let offset = grab_point - props.position;

    state.session = Some(GrabSession::new(
        entity_id,
        &props,
        offset,
        max_distance,
        made_dynamic,
    ));
    modifiers::recompute_grab_plane(state, host);

    if !conflict::entity_is_grabbed_by_other(&*host, entity_id) {
        lifecycle::track_cursor(state, position);
        lifecycle::schedule_tick(state, &*host);
    }

    host.call_method(entity_id, "startDistanceGrab", HOOK_ARGS);
    notification::broadcast(host, &ManipulationMessage::grab(entity_id));

    log::info!(
        "Grab gestartet: Entity {} (Reichweite {:.1}, dynamisch erzwungen: {})",
        entity_id,
        max_distance,
        made_dynamic
    );
    Ok(())
}
