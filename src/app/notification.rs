//! Broadcast von Grab/Release an andere Subsysteme.

use serde::Serialize;

use super::ports::NotificationBus;
use crate::core::EntityId;

/// Kanal für Objekt-Manipulations-Nachrichten.
pub const MANIPULATION_CHANNEL: &str = "Hifi-Object-Manipulation";
/// Joint-Name des Maus-Grabbers.
pub const MOUSE_JOINT: &str = "mouse";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManipulationAction {
    Grab,
    Release,
}

/// Payload einer Manipulations-Nachricht (JSON).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManipulationMessage {
    pub action: ManipulationAction,
    pub grabbed_entity: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint: Option<&'static str>,
}

impl ManipulationMessage {
    pub fn grab(entity: EntityId) -> Self {
        Self {
            action: ManipulationAction::Grab,
            grabbed_entity: entity,
            joint: None,
        }
    }

    pub fn release(entity: EntityId) -> Self {
        Self {
            action: ManipulationAction::Release,
            grabbed_entity: entity,
            joint: Some(MOUSE_JOINT),
        }
    }
}

/// Serialisiert und sendet die Nachricht; Fehler werden nur geloggt.
pub fn broadcast<H: NotificationBus + ?Sized>(host: &mut H, message: &ManipulationMessage) {
    match serde_json::to_string(message) {
        Ok(json) => host.send_local_message(MANIPULATION_CHANNEL, &json),
        Err(e) => log::warn!("Manipulations-Nachricht nicht serialisierbar: {}", e),
    }
}
