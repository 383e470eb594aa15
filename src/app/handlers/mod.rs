//! Feature-Handler für GrabCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Lifecycle-Abschnitts.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod lifecycle;
pub mod modifiers;
pub mod press;
pub mod release;
pub mod update;

/// Argumente der Entity-Methoden-Hooks.
pub(crate) const HOOK_ARGS: &[&str] = &[super::notification::MOUSE_JOINT];
