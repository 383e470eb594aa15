//! Handler für Cursor-Tracking, Debounce-Tick und Skript-Ende.

use crate::app::ports::{HostContext, PointerService};
use crate::app::GrabState;
use crate::core::CursorSample;

/// Übernimmt das neueste Cursor-Sample; ältere, noch nicht verarbeitete Samples verfallen.
pub fn track_cursor(state: &mut GrabState, position: CursorSample) {
    state.drag.update_drag(position);
}

/// Meldet den Update-Tick an, falls keiner aussteht.
pub fn schedule_tick<H: HostContext + ?Sized>(state: &mut GrabState, host: &H) {
    if state.scheduler.schedule_tick(host.now()) {
        log::trace!("Update-Tick angemeldet (fällig {:?})", state.scheduler.due_at());
    }
}

/// Verwirft einen ausstehenden Update-Tick.
pub fn cancel_tick(state: &mut GrabState) {
    if state.scheduler.cancel_tick() {
        log::trace!("Update-Tick verworfen");
    }
}

/// Feuert den Tick, wenn er fällig ist. Gibt `true` zurück, wenn er gefeuert hat.
pub fn take_due_tick<H: HostContext + ?Sized>(state: &mut GrabState, host: &H) -> bool {
    state.scheduler.take_due(host.now())
}

/// Gibt Pointer und Picks frei.
pub fn remove_pointers<H: PointerService + ?Sized>(host: &mut H) {
    host.remove_pointers();
    log::debug!("Grab-Pointer entfernt");
}
