//! Mouse Distance Grab Library.
//! Greifen und Bewegen von Physik-Objekten auf Distanz per Maus,
//! als Library exportiert für Host-Anbindung, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod sim;
pub mod ui;

pub use app::{
    GrabCommand, GrabController, GrabHost, GrabIntent, GrabMode, GrabSession, GrabState,
    ModifierKey, PointerButton, PointerEvent,
};
pub use core::{
    ActionId, Camera3D, CursorSample, DragTracker, EntityId, EntityProperties, FarGrabParams,
    GrabPlane, GrabTarget, PickResult, TimescaleModel,
};
pub use shared::GrabOptions;
pub use sim::SimWorld;
pub use ui::{HostInputEvent, InputAdapter};
