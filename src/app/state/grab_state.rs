use crate::app::{CommandLog, TickScheduler};
use crate::core::DragTracker;
use crate::shared::GrabOptions;

use super::{GrabSession, Modifiers};

/// Hauptzustand des Grab-Controllers
pub struct GrabState {
    /// Laufzeit-Optionen (Reichweite, Tick-Intervall, Zeitkonstanten)
    pub options: GrabOptions,
    /// Maus-Deltas des aktuellen Drags
    pub drag: DragTracker,
    /// Gedrückte Modifier (auch im Idle-Zustand gepflegt)
    pub modifiers: Modifiers,
    /// Laufender Grab (None = Idle)
    pub session: Option<GrabSession>,
    /// Debounce-Tick des Update-Loops
    pub scheduler: TickScheduler,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl GrabState {
    /// Erstellt einen Idle-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(GrabOptions::default())
    }

    /// Erstellt einen Idle-Zustand mit den gegebenen Optionen.
    pub fn with_options(options: GrabOptions) -> Self {
        Self {
            scheduler: TickScheduler::new(options.tick_interval()),
            options,
            drag: DragTracker::new(),
            modifiers: Modifiers::default(),
            session: None,
            command_log: CommandLog::new(),
        }
    }

    /// Ersetzt die Optionen und übernimmt das Tick-Intervall.
    pub fn set_options(&mut self, options: GrabOptions) {
        self.scheduler.set_interval(options.tick_interval());
        self.options = options;
    }

    /// `true` zwischen erfolgreichem Press und Release.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

impl Default for GrabState {
    fn default() -> Self {
        Self::new()
    }
}
