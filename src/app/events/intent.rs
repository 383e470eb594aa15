use crate::app::state::ModifierKey;
use crate::core::CursorSample;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Reine Bewegung ohne Taste
    None,
}

/// Press-Event mit den für die Vorbedingungen nötigen Feldern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Screen-Position
    pub position: CursorSample,
    /// Gedrückte Taste
    pub button: PointerButton,
    /// Alt gehalten
    pub is_alt: bool,
    /// Meta gehalten
    pub is_meta: bool,
}

impl PointerEvent {
    /// Linksklick ohne Modifier an `position`.
    pub fn left(position: CursorSample) -> Self {
        Self {
            position,
            button: PointerButton::Left,
            is_alt: false,
            is_meta: false,
        }
    }
}

/// Grab-Intents: Eingaben aus Host/Input-Adapter ohne Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum GrabIntent {
    /// Maustaste gedrückt
    PointerPressed { event: PointerEvent },
    /// Maus bewegt
    PointerMoved { position: CursorSample },
    /// Maustaste losgelassen
    PointerReleased { button: PointerButton },
    /// Modifier gedrückt oder losgelassen
    ModifierChanged { key: ModifierKey, pressed: bool },
    /// Debounce-Tick ist fällig
    TickDue,
    /// Host beendet den Controller (Skript-Ende)
    ShutdownRequested,
}
