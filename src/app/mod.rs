//! Application-Layer: Controller, State, Events, Handler und Kollaborateur-Ports.

pub mod command_log;
pub mod conflict;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod notification;
pub mod ports;
pub mod scheduler;
/// Grab-State und Session
///
/// Dieses Modul verwaltet den Zustand des Controllers (Session, Modifier, Tick).
pub mod state;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::GrabController;
pub use events::{GrabCommand, GrabIntent, PointerButton, PointerEvent};
pub use ports::{
    ActionService, CameraService, EntityStore, GrabHost, HostContext, NotificationBus,
    PointerService, RenderState,
};
pub use scheduler::TickScheduler;
pub use state::{GrabMode, GrabSession, GrabState, ModifierKey, Modifiers};
