//! Schnittstellen zu den externen Kollaborateuren des Grab-Controllers.
//!
//! Der Controller spricht ausschließlich über diese Traits mit der Umgebung.
//! `GrabHost` bündelt alle Traits und ist für jeden Typ implementiert,
//! der sie vollständig erfüllt (z.B. `sim::SimWorld`).

use std::time::Duration;

use glam::{Quat, Vec3};

use crate::core::{
    ActionId, ActionInfo, ActionKind, CursorSample, EntityEdit, EntityId, EntityProperties,
    FarGrabParams, PickRay, PickResult,
};

/// Zugriff auf Entity-Eigenschaften.
pub trait EntityStore {
    /// Aktuelle Eigenschaften, `None` wenn die Entity nicht (mehr) verfügbar ist.
    fn properties(&self, id: EntityId) -> Option<EntityProperties>;
    /// Wendet eine partielle Änderung an.
    fn edit(&mut self, id: EntityId, edit: EntityEdit) -> anyhow::Result<()>;
    /// Ruft eine Methode im Entity-Skript auf (fire-and-forget).
    fn call_method(&mut self, id: EntityId, method: &str, args: &[&str]);
}

/// Visueller Zustand des Maus-Pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// Kein Grab-Beacon
    #[default]
    Idle,
    /// Beacon am gegriffenen Objekt
    Grabbed,
}

/// Pointer, Picks und sichtbarer Cursor (Reticle).
pub trait PointerService {
    /// Liegt ein UI-Overlay direkt unter dem Reticle?
    fn overlay_at_reticle(&self) -> bool;
    /// Letztes Ergebnis des Overlay-Pick-Rays.
    fn last_overlay_pick(&self) -> PickResult;
    /// Letztes Ergebnis des Entity-Pick-Rays.
    fn last_entity_pick(&self) -> PickResult;
    /// Setzt den Render-State des Entity-Pointers.
    fn set_render_state(&mut self, state: RenderState);
    /// Höhe des Grab-Beacons (Bounding-Durchmesser des Objekts).
    fn set_beacon_height(&mut self, height: f32);
    /// Fixiert den Pointer-Endpunkt am Objekt (`None` = lösen).
    fn lock_end(&mut self, entity: Option<EntityId>);
    /// Entfernt die Hover-Hervorhebung.
    fn unhighlight(&mut self, entity: EntityId);
    /// Position des sichtbaren Cursors.
    fn reticle_position(&self) -> CursorSample;
    /// Verschiebt den sichtbaren Cursor.
    fn set_reticle_position(&mut self, position: CursorSample);
    /// Gibt Pointer und Picks frei (Skript-Ende).
    fn remove_pointers(&mut self);
}

/// Physik-Actions (Constraints) an Entities.
pub trait ActionService {
    /// Erstellt eine Action und gibt ihr Handle zurück.
    fn add_action(
        &mut self,
        kind: ActionKind,
        entity: EntityId,
        params: &FarGrabParams,
    ) -> anyhow::Result<ActionId>;
    /// Aktualisiert die Parameter einer bestehenden Action.
    fn update_action(
        &mut self,
        entity: EntityId,
        action: ActionId,
        params: &FarGrabParams,
    ) -> anyhow::Result<()>;
    /// Löscht eine Action.
    fn delete_action(&mut self, entity: EntityId, action: ActionId) -> anyhow::Result<()>;
    /// Alle Actions an einer Entity samt Tag.
    fn actions(&self, entity: EntityId) -> Vec<ActionInfo>;
}

/// Kamera des lokalen Users.
pub trait CameraService {
    fn camera_position(&self) -> Vec3;
    fn camera_orientation(&self) -> Quat;
    /// Pick-Ray durch ein Screen-Sample.
    fn compute_pick_ray(&self, sample: CursorSample) -> PickRay;
}

/// Lokaler Nachrichtenbus für andere Subsysteme.
pub trait NotificationBus {
    fn send_local_message(&mut self, channel: &str, message: &str);
}

/// Umgebungszustand, der Eingaben sperrt, plus Identität und Uhr.
pub trait HostContext {
    /// Edit-Modus aktiv (Greifen gesperrt)?
    fn is_in_edit_mode(&self) -> bool;
    /// HMD aktiv (Maus-Greifen gesperrt)?
    fn is_hmd_active(&self) -> bool;
    /// Session-ID des lokalen Users (Basis des Action-Tags).
    fn session_id(&self) -> &str;
    /// Monotone Uhr für den Debounce-Tick.
    fn now(&self) -> Duration;
}

/// Alle Kollaborateure zusammen.
pub trait GrabHost:
    EntityStore + PointerService + ActionService + CameraService + NotificationBus + HostContext
{
}

impl<T: ?Sized> GrabHost for T where
    T: EntityStore + PointerService + ActionService + CameraService + NotificationBus + HostContext
{
}
