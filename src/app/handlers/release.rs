//! Handler für das Grab-Ende (Release und Skript-Ende).

use crate::app::notification::{self, ManipulationMessage};
use crate::app::ports::{GrabHost, RenderState};
use crate::app::GrabState;
use crate::core::EntityEdit;

use super::HOOK_ARGS;

/// Beendet den laufenden Grab. Ohne Session ein No-op.
///
/// Der Constraint wird nur gelöscht, wenn er je erstellt wurde; ein
/// erzwungenes Dynamic-Flag wird zurückgenommen und das Objekt gestoppt.
/// Fehler der Kollaborateure werden geloggt, die Session endet trotzdem.
pub fn end_grab<H: GrabHost + ?Sized>(state: &mut GrabState, host: &mut H) -> anyhow::Result<()> {
    let Some(session) = state.session.take() else {
        return Ok(());
    };
    let entity_id = session.entity_id;

    if let Some(action_id) = session.action_id {
        if let Err(e) = host.delete_action(entity_id, action_id) {
            log::warn!("Far-Grab {:?} nicht gelöscht: {:#}", action_id, e);
        }
    }

    if session.made_dynamic {
        if let Err(e) = host.edit(entity_id, EntityEdit::revert_dynamic()) {
            log::warn!("Dynamic-Flag von {} nicht zurückgesetzt: {:#}", entity_id, e);
        }
    }

    host.set_render_state(RenderState::Idle);
    host.lock_end(None);

    host.call_method(entity_id, "releaseGrab", HOOK_ARGS);
    notification::broadcast(host, &ManipulationMessage::release(entity_id));

    log::info!("Grab beendet: Entity {}", entity_id);
    Ok(())
}
