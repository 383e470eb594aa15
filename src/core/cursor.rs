//! Cursor-Samples und Drag-Tracker für inkrementelle Maus-Deltas.

use glam::Vec2;

/// Screen-Koordinaten eines Pointer-Events in Pixeln.
pub type CursorSample = Vec2;

/// Verfolgt die Maus-Position während eines Grabs.
///
/// `previous` spiegelt immer das zuletzt per `consume_delta` gelesene Sample.
/// Im Rotate-Modus merkt sich der Tracker zusätzlich, wo der sichtbare
/// Cursor beim Eintritt stand, damit er beim Verlassen zurückgesetzt werden kann.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    current: CursorSample,
    previous: CursorSample,
    rotate_start: CursorSample,
    cursor_restore_anchor: CursorSample,
}

impl DragTracker {
    /// Erstellt einen Tracker im Ursprung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet einen neuen Drag: `current = previous = sample`, Rotate-Anker neu.
    pub fn begin_drag(&mut self, sample: CursorSample, reticle: CursorSample) {
        self.current = sample;
        self.begin_rotate_drag(reticle);
    }

    /// Übernimmt ein neues Sample, ohne `previous` anzufassen.
    pub fn update_drag(&mut self, sample: CursorSample) {
        self.current = sample;
    }

    /// Friert den aktuellen Stand als Rotate-Start ein.
    ///
    /// `reticle` ist die Position des sichtbaren Cursors laut Host.
    pub fn begin_rotate_drag(&mut self, reticle: CursorSample) {
        self.previous = self.current;
        self.rotate_start = self.current;
        self.cursor_restore_anchor = reticle;
    }

    /// Liefert `current - previous` und schiebt `previous` nach.
    ///
    /// Nicht idempotent: ein zweiter Aufruf ohne neues Sample liefert Null.
    pub fn consume_delta(&mut self) -> Vec2 {
        let delta = self.current - self.previous;
        self.previous = self.current;
        delta
    }

    /// Setzt `current` und `previous` auf den Rotate-Start zurück, sodass das
    /// nächste `consume_delta` Null liefert. Gibt die Position zurück, an die
    /// der Host den sichtbaren Cursor verschieben soll.
    pub fn restore_rotate_cursor(&mut self) -> CursorSample {
        self.current = self.rotate_start;
        self.previous = self.rotate_start;
        self.cursor_restore_anchor
    }

    /// Zuletzt übernommenes Sample.
    pub fn current(&self) -> CursorSample {
        self.current
    }
}
