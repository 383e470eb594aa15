//! Handler für Modifier-Tasten und Modus-Wechsel.

use crate::app::ports::{CameraService, PointerService};
use crate::app::state::{GrabMode, ModifierKey};
use crate::app::GrabState;

/// Setzt ein Modifier-Flag (auch im Idle-Zustand).
pub fn set_modifier(state: &mut GrabState, key: ModifierKey, pressed: bool) {
    state.modifiers.set(key, pressed);
}

/// Bestimmt den Modus aus den Modifiern und verankert die Grab-Ebene neu.
///
/// Beim Verlassen von Rotate springt der sichtbare Cursor an seine
/// Position vom Rotate-Start zurück. Ohne aktive Session ein No-op.
pub fn recompute_grab_plane<H>(state: &mut GrabState, host: &mut H)
where
    H: PointerService + CameraService + ?Sized,
{
    let GrabState {
        session,
        drag,
        modifiers,
        ..
    } = state;
    let Some(session) = session.as_mut() else {
        return;
    };

    let was_rotate = session.mode == GrabMode::Rotate;
    let mode = GrabMode::from_modifiers(modifiers);

    if mode == GrabMode::Rotate {
        drag.begin_rotate_drag(host.reticle_position());
    } else if was_rotate {
        let anchor = drag.restore_rotate_cursor();
        host.set_reticle_position(anchor);
    }

    if mode != session.mode {
        log::debug!("Grab-Modus {:?} -> {:?}", session.mode, mode);
    }
    session.mode = mode;
    session.reanchor(host.camera_position());
}
