//! Headless Sim-Host für Demo, Benchmarks und Integrationstests.
//!
//! `SimWorld` implementiert alle Kollaborateur-Traits aus `app::ports`
//! im Speicher: Entities, getaggte Actions mit TTL, Pointer-Zustand,
//! Kamera, Nachrichtenbus und eine manuell vorgerückte Uhr.

mod physics;
pub mod world;

pub use physics::apply_far_grab;
pub use world::{ActionCallCounts, MethodCall, SimAction, SimWorld};
