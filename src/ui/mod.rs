//! Input-Layer: Anbindung der Host-Events an den Grab-Controller.
//!
//! Tastatur-Mapping ist in eine eigene Datei extrahiert.

pub mod input;
mod keyboard;

pub use input::{HostInputEvent, InputAdapter};
pub use keyboard::{LIFT_KEY_TEXT, ROTATE_KEY_TEXT};
