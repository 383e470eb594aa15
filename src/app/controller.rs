//! Grab-Controller für zentrale Event-Verarbeitung.

use super::handlers;
use super::ports::GrabHost;
use super::state::ModifierKey;
use super::{GrabCommand, GrabIntent, GrabState, PointerButton, PointerEvent};
use crate::core::CursorSample;

/// Orchestriert Eingabe-Events und Handler auf den GrabState.
///
/// Hält selbst keinen Zustand: Session, Drag und Tick liegen im `GrabState`,
/// alle Außenwirkungen laufen über den injizierten `GrabHost`.
#[derive(Default)]
pub struct GrabController;

impl GrabController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
        intent: GrabIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, &*host, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem GrabState aus.
    /// Dispatcht an Lifecycle-Handler in `handlers/`.
    pub fn handle_command<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
        command: GrabCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(host.now(), &command);

        match command {
            // === Grab-Lifecycle ===
            GrabCommand::BeginGrab { position } => {
                handlers::press::begin_grab(state, host, position)?
            }
            GrabCommand::EndGrab => handlers::release::end_grab(state, host)?,
            GrabCommand::RunUpdatePass => handlers::update::run_update_pass(state, host)?,

            // === Cursor & Tick ===
            GrabCommand::TrackCursor { position } => {
                handlers::lifecycle::track_cursor(state, position)
            }
            GrabCommand::ScheduleTick => handlers::lifecycle::schedule_tick(state, &*host),
            GrabCommand::CancelTick => handlers::lifecycle::cancel_tick(state),

            // === Modifier ===
            GrabCommand::SetModifier { key, pressed } => {
                handlers::modifiers::set_modifier(state, key, pressed)
            }
            GrabCommand::RecomputeGrabPlane => {
                handlers::modifiers::recompute_grab_plane(state, host)
            }

            // === Aufräumen ===
            GrabCommand::RemovePointers => handlers::lifecycle::remove_pointers(host),
        }

        Ok(())
    }

    /// Feuert den Debounce-Tick, falls er laut Host-Uhr fällig ist.
    ///
    /// Gibt `true` zurück, wenn ein Update-Pass gelaufen ist.
    pub fn poll_tick<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
    ) -> anyhow::Result<bool> {
        if !handlers::lifecycle::take_due_tick(state, &*host) {
            return Ok(false);
        }
        self.handle_intent(state, host, GrabIntent::TickDue)?;
        Ok(true)
    }

    // ── Einstiegspunkte für Hosts ohne Input-Adapter ─────────────────

    /// Maustaste gedrückt.
    pub fn on_press<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
        event: PointerEvent,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, GrabIntent::PointerPressed { event })
    }

    /// Maus bewegt.
    pub fn on_move<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
        position: CursorSample,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, GrabIntent::PointerMoved { position })
    }

    /// Maustaste losgelassen.
    pub fn on_release<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
        button: PointerButton,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, GrabIntent::PointerReleased { button })
    }

    /// Modifier gedrückt/losgelassen.
    pub fn on_key_change<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
        key: ModifierKey,
        pressed: bool,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, GrabIntent::ModifierChanged { key, pressed })
    }

    /// Tick-Body direkt ausführen (für Hosts mit eigenem Timer).
    pub fn on_timer_fire<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, GrabIntent::TickDue)
    }

    /// Skript-Ende: Tick verwerfen, laufenden Grab abbauen, Pointer freigeben.
    pub fn cleanup<H: GrabHost + ?Sized>(
        &mut self,
        state: &mut GrabState,
        host: &mut H,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, GrabIntent::ShutdownRequested)
    }
}
