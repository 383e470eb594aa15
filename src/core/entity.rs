//! Werttypen an der Grenze zu Entity-Store, Pick-Service und Physik-Actions.

use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Opaque Referenz auf eine Entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:08x}}}", self.0)
    }
}

/// Opaque Referenz auf eine Physik-Action (Constraint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub u64);

/// Die vom Grab benötigten Entity-Eigenschaften.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityProperties {
    /// Position (Mittelpunkt) in Welt-Koordinaten
    pub position: Vec3,
    /// Orientierung
    pub rotation: Quat,
    /// Bounding-Box-Abmessungen
    pub dimensions: Vec3,
    /// Dichte (kg/m³)
    pub density: f32,
    /// Wird das Objekt von der Physik simuliert?
    pub dynamic: bool,
    /// Schwerkraft der Entity
    pub gravity: Vec3,
    /// Grab-Erlaubnis der Entity
    pub grabbable: bool,
    /// Gesperrte Entities sind nie greifbar
    pub locked: bool,
    /// Wird gerade von jemandem ausgerüstet gehalten (Equip)
    pub equipped: bool,
}

impl EntityProperties {
    /// Greifbar = Grab erlaubt und nicht gesperrt.
    pub fn is_grabbable(&self) -> bool {
        self.grabbable && !self.locked
    }

    /// Durchmesser der Bounding-Box.
    pub fn bounding_diameter(&self) -> f32 {
        self.dimensions.length()
    }
}

impl Default for EntityProperties {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            dimensions: Vec3::splat(0.1),
            density: 1000.0,
            dynamic: false,
            gravity: Vec3::ZERO,
            grabbable: true,
            locked: false,
            equipped: false,
        }
    }
}

/// Partielle Änderung an einer Entity. `None` = Feld unverändert.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntityEdit {
    /// Neues Dynamic-Flag
    pub dynamic: Option<bool>,
    /// Neue lokale Geschwindigkeit
    pub local_velocity: Option<Vec3>,
}

impl EntityEdit {
    /// Schaltet die Simulation für die Dauer des Grabs ein.
    pub fn make_dynamic() -> Self {
        Self {
            dynamic: Some(true),
            ..Self::default()
        }
    }

    /// Nimmt das erzwungene Dynamic-Flag zurück und stoppt das Objekt.
    pub fn revert_dynamic() -> Self {
        Self {
            dynamic: Some(false),
            local_velocity: Some(Vec3::ZERO),
        }
    }
}

/// Was der letzte Pick getroffen hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickKind {
    /// Nichts getroffen
    #[default]
    None,
    /// Eine Entity
    Entity,
    /// Ein UI-Overlay
    Overlay,
}

/// Ergebnis des zuletzt ausgewerteten Pick-Rays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickResult {
    /// Art des Treffers
    pub kind: PickKind,
    /// Getroffenes Objekt (nur bei `Entity`)
    pub object: Option<EntityId>,
    /// Distanz entlang des Strahls
    pub distance: f32,
}

impl PickResult {
    /// Ergebnis ohne Treffer.
    pub fn miss() -> Self {
        Self::default()
    }

    /// Treffer auf einer Entity.
    pub fn entity(id: EntityId, distance: f32) -> Self {
        Self {
            kind: PickKind::Entity,
            object: Some(id),
            distance,
        }
    }

    /// Treffer auf einem Overlay.
    pub fn overlay(distance: f32) -> Self {
        Self {
            kind: PickKind::Overlay,
            object: None,
            distance,
        }
    }

    /// `true`, wenn irgendetwas getroffen wurde.
    pub fn is_hit(&self) -> bool {
        self.kind != PickKind::None
    }
}

/// Art der Physik-Action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Zeitlich begrenzter Constraint, der eine Entity zum Ziel zieht
    FarGrab,
}

impl ActionKind {
    /// Name der Action im Physik-Service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::FarGrab => "far-grab",
        }
    }
}

/// Eintrag aus der Action-Liste einer Entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    /// Handle der Action
    pub id: ActionId,
    /// Besitzer-Tag (Konvention `grab-<session>`)
    pub tag: String,
}

/// Zielvorgabe des Far-Grab-Constraints: entweder Position oder Rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GrabTarget {
    /// Positionsziel (Planar/Zylinder)
    Position {
        #[serde(rename = "targetPosition")]
        target_position: Vec3,
        #[serde(rename = "linearTimeScale")]
        linear_time_scale: f32,
    },
    /// Rotationsziel (Rotate)
    Rotation {
        #[serde(rename = "targetRotation")]
        target_rotation: Quat,
        #[serde(rename = "angularTimeScale")]
        angular_time_scale: f32,
    },
}

/// Parameter eines Far-Grab-Constraints, wie sie an den Physik-Service gehen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarGrabParams {
    /// Ziel und Zeitkonstante
    #[serde(flatten)]
    pub target: GrabTarget,
    /// Besitzer-Tag
    pub tag: String,
    /// Lebensdauer in Sekunden
    pub ttl: f32,
}
