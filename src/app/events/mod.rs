//! GrabIntent- und GrabCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::GrabCommand;
pub use intent::{GrabIntent, PointerButton, PointerEvent};
