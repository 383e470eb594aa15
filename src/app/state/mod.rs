//! Zustand des Grab-Controllers: Session, Modifier, Modus.

mod grab_state;
mod modifiers;
mod session;

pub use grab_state::GrabState;
pub use modifiers::{GrabMode, ModifierKey, Modifiers};
pub use session::GrabSession;
