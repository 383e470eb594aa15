//! Mapping von Grab-Intents auf mutierende Grab-Commands.
//!
//! Filtert Eingaben, die nur vom Event und vom Host-Kontext abhängen
//! (Taste, Alt/Meta, Edit-Modus, HMD). Vorbedingungen, die Picks oder
//! Entity-Eigenschaften brauchen, prüft der Press-Handler.

use super::ports::HostContext;
use super::{GrabCommand, GrabIntent, GrabState, PointerButton};

/// Übersetzt einen `GrabIntent` in eine Sequenz ausführbarer `GrabCommand`s.
pub fn map_intent_to_commands<H: HostContext + ?Sized>(
    state: &GrabState,
    host: &H,
    intent: GrabIntent,
) -> Vec<GrabCommand> {
    match intent {
        GrabIntent::PointerPressed { event } => {
            if host.is_in_edit_mode() || host.is_hmd_active() {
                return Vec::new();
            }
            if event.button != PointerButton::Left || event.is_alt || event.is_meta {
                return Vec::new();
            }
            vec![GrabCommand::BeginGrab {
                position: event.position,
            }]
        }
        GrabIntent::PointerMoved { position } => {
            if !state.is_active() || host.is_hmd_active() {
                return Vec::new();
            }
            vec![
                GrabCommand::TrackCursor { position },
                GrabCommand::ScheduleTick,
            ]
        }
        GrabIntent::PointerReleased { button } => {
            if button != PointerButton::Left && !host.is_hmd_active() {
                return Vec::new();
            }
            vec![GrabCommand::CancelTick, GrabCommand::EndGrab]
        }
        GrabIntent::ModifierChanged { key, pressed } => vec![
            GrabCommand::SetModifier { key, pressed },
            GrabCommand::RecomputeGrabPlane,
        ],
        GrabIntent::TickDue => vec![GrabCommand::RunUpdatePass],
        GrabIntent::ShutdownRequested => vec![
            GrabCommand::CancelTick,
            GrabCommand::EndGrab,
            GrabCommand::RemovePointers,
        ],
    }
}
