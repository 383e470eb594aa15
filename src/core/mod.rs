//! Core-Domänentypen: Cursor, Kamera, Grab-Geometrie, Zeitkonstanten, Entity-Werttypen.

pub mod camera;
pub mod cursor;
pub mod entity;
pub mod geometry;
pub mod timescale;

pub use camera::{Camera3D, PickRay};
pub use cursor::{CursorSample, DragTracker};
pub use entity::{
    ActionId, ActionInfo, ActionKind, EntityEdit, EntityId, EntityProperties, FarGrabParams,
    GrabTarget, PickKind, PickResult,
};
pub use geometry::GrabPlane;
pub use timescale::TimescaleModel;
