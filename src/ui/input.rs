//! Input-Adapter: rohe Host-Events (Maus, Tastatur, Skript-Ende) → GrabIntent.

use glam::Vec2;

use super::keyboard;
use crate::app::{GrabController, GrabHost, GrabIntent, GrabState, PointerButton, PointerEvent};

/// Rohes Eingabe-Event, wie es der Host liefert.
#[derive(Debug, Clone, PartialEq)]
pub enum HostInputEvent {
    /// Maustaste gedrückt
    MousePress {
        x: f32,
        y: f32,
        button: PointerButton,
        is_alt: bool,
        is_meta: bool,
    },
    /// Maus bewegt
    MouseMove { x: f32, y: f32 },
    /// Maustaste losgelassen
    MouseRelease { x: f32, y: f32, button: PointerButton },
    /// Taste gedrückt (`is_auto_repeat` bei gehaltener Taste)
    KeyPress { text: String, is_auto_repeat: bool },
    /// Taste losgelassen
    KeyRelease { text: String },
    /// Host beendet das Skript
    ScriptEnding,
}

/// Übersetzt Host-Events in Grab-Intents und reicht sie an den Controller weiter.
#[derive(Debug, Default)]
pub struct InputAdapter;

impl InputAdapter {
    /// Erstellt einen neuen Adapter.
    pub fn new() -> Self {
        Self
    }

    /// Übersetzt ein Event; irrelevante Events (fremde Tasten, Auto-Repeat) → `None`.
    pub fn translate(&self, event: &HostInputEvent) -> Option<GrabIntent> {
        match event {
            HostInputEvent::MousePress {
                x,
                y,
                button,
                is_alt,
                is_meta,
            } => Some(GrabIntent::PointerPressed {
                event: PointerEvent {
                    position: Vec2::new(*x, *y),
                    button: *button,
                    is_alt: *is_alt,
                    is_meta: *is_meta,
                },
            }),
            HostInputEvent::MouseMove { x, y } => Some(GrabIntent::PointerMoved {
                position: Vec2::new(*x, *y),
            }),
            HostInputEvent::MouseRelease { button, .. } => {
                Some(GrabIntent::PointerReleased { button: *button })
            }
            HostInputEvent::KeyPress {
                text,
                is_auto_repeat,
            } => {
                if *is_auto_repeat {
                    return None;
                }
                keyboard::modifier_for_key_text(text)
                    .map(|key| GrabIntent::ModifierChanged { key, pressed: true })
            }
            HostInputEvent::KeyRelease { text } => keyboard::modifier_for_key_text(text)
                .map(|key| GrabIntent::ModifierChanged {
                    key,
                    pressed: false,
                }),
            HostInputEvent::ScriptEnding => Some(GrabIntent::ShutdownRequested),
        }
    }

    /// Übersetzt eine Event-Folge in Intents (Reihenfolge bleibt erhalten).
    pub fn collect_intents(&self, events: &[HostInputEvent]) -> Vec<GrabIntent> {
        events.iter().filter_map(|e| self.translate(e)).collect()
    }

    /// Übersetzt ein Event und lässt es direkt vom Controller verarbeiten.
    pub fn dispatch<H: GrabHost + ?Sized>(
        &self,
        controller: &mut GrabController,
        state: &mut GrabState,
        host: &mut H,
        event: &HostInputEvent,
    ) -> anyhow::Result<()> {
        match self.translate(event) {
            Some(intent) => controller.handle_intent(state, host, intent),
            None => Ok(()),
        }
    }
}
