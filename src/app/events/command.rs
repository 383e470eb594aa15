use crate::app::state::ModifierKey;
use crate::core::CursorSample;

/// Grab-Commands: mutierende Schritte, die der Controller ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum GrabCommand {
    /// Grab am gepickten Objekt versuchen (Vorbedingungen im Handler)
    BeginGrab { position: CursorSample },
    /// Cursor-Sample in den Drag-Tracker übernehmen
    TrackCursor { position: CursorSample },
    /// Debounce-Tick anmelden (No-op wenn bereits ausstehend)
    ScheduleTick,
    /// Ausstehenden Tick verwerfen
    CancelTick,
    /// Einen Update-Pass ausführen (Tick-Body)
    RunUpdatePass,
    /// Grab beenden und Constraint abbauen
    EndGrab,
    /// Modifier-Flag setzen
    SetModifier { key: ModifierKey, pressed: bool },
    /// Modus und Grab-Ebene aus den Modifiern neu bestimmen
    RecomputeGrabPlane,
    /// Pointer und Picks freigeben
    RemovePointers,
}
