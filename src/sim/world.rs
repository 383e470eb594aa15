//! In-Memory-Host: Entities, Actions, Pointer, Kamera und Uhr.

use std::time::Duration;

use anyhow::{anyhow, bail};
use glam::{Quat, Vec3};
use indexmap::IndexMap;

use crate::app::ports::{
    ActionService, CameraService, EntityStore, HostContext, NotificationBus, PointerService,
    RenderState,
};
use crate::core::{
    ActionId, ActionInfo, ActionKind, Camera3D, CursorSample, EntityEdit, EntityId,
    EntityProperties, FarGrabParams, PickRay, PickResult,
};

/// Physik-Action im Sim-Host.
#[derive(Debug, Clone)]
pub struct SimAction {
    pub entity: EntityId,
    pub kind: ActionKind,
    pub tag: String,
    /// `None` bei fremden Actions, deren Parameter hier unbekannt sind
    pub params: Option<FarGrabParams>,
    /// Ablaufzeitpunkt auf der Sim-Uhr
    pub expires_at: Duration,
}

/// Aufgezeichneter Aufruf einer Entity-Methode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub entity: EntityId,
    pub method: String,
    pub args: Vec<String>,
}

/// Zähler der Action-Aufrufe (für Tests und Demo-Ausgabe).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCallCounts {
    pub added: usize,
    pub updated: usize,
    pub deleted: usize,
}

/// Headless-Host, der alle Kollaborateur-Traits implementiert.
pub struct SimWorld {
    /// Kamera des lokalen Users
    pub camera: Camera3D,
    /// Session-ID des lokalen Users
    pub session_id: String,
    /// Sim-Uhr (monoton)
    pub clock: Duration,
    /// Edit-Modus aktiv
    pub edit_mode: bool,
    /// HMD aktiv
    pub hmd_active: bool,
    /// Sichtbarer Cursor
    pub reticle: CursorSample,
    /// UI-Overlay unter dem Reticle
    pub overlay_under_reticle: bool,
    /// Letztes Overlay-Pick-Ergebnis
    pub overlay_pick: PickResult,
    /// Letztes Entity-Pick-Ergebnis
    pub entity_pick: PickResult,
    /// Aktueller Render-State des Pointers
    pub render_state: RenderState,
    /// Höhe des Grab-Beacons
    pub beacon_height: f32,
    /// Entity, an der der Pointer-Endpunkt fixiert ist
    pub locked_end: Option<EntityId>,
    /// Entities, deren Hervorhebung entfernt wurde
    pub unhighlighted: Vec<EntityId>,
    /// Aufgezeichnete Entity-Methoden-Aufrufe
    pub method_calls: Vec<MethodCall>,
    /// Gesendete Nachrichten (Kanal, JSON)
    pub messages: Vec<(String, String)>,
    /// Pointer wurden freigegeben
    pub pointers_removed: bool,
    /// Neue Actions ablehnen (Fehlerpfad-Simulation)
    pub reject_new_actions: bool,
    /// Zähler der Action-Aufrufe
    pub action_calls: ActionCallCounts,
    entities: IndexMap<EntityId, EntityProperties>,
    velocities: IndexMap<EntityId, Vec3>,
    actions: IndexMap<ActionId, SimAction>,
    next_entity_id: u64,
    next_action_id: u64,
}

impl SimWorld {
    /// Erstellt eine leere Welt mit Kamera im Ursprung.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            camera: Camera3D::new(),
            session_id: session_id.into(),
            clock: Duration::ZERO,
            edit_mode: false,
            hmd_active: false,
            reticle: CursorSample::ZERO,
            overlay_under_reticle: false,
            overlay_pick: PickResult::miss(),
            entity_pick: PickResult::miss(),
            render_state: RenderState::Idle,
            beacon_height: 0.0,
            locked_end: None,
            unhighlighted: Vec::new(),
            method_calls: Vec::new(),
            messages: Vec::new(),
            pointers_removed: false,
            reject_new_actions: false,
            action_calls: ActionCallCounts::default(),
            entities: IndexMap::new(),
            velocities: IndexMap::new(),
            actions: IndexMap::new(),
            next_entity_id: 1,
            next_action_id: 1,
        }
    }

    /// Fügt eine Entity hinzu.
    pub fn spawn(&mut self, props: EntityProperties) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(id, props);
        self.velocities.insert(id, Vec3::ZERO);
        id
    }

    /// Entfernt eine Entity samt ihrer Actions.
    pub fn despawn(&mut self, id: EntityId) -> Option<EntityProperties> {
        self.velocities.shift_remove(&id);
        self.actions.retain(|_, action| action.entity != id);
        self.entities.shift_remove(&id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&EntityProperties> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntityProperties> {
        self.entities.get_mut(&id)
    }

    /// Lokale Geschwindigkeit einer Entity.
    pub fn velocity(&self, id: EntityId) -> Option<Vec3> {
        self.velocities.get(&id).copied()
    }

    /// Setzt die Geschwindigkeit (z.B. um ein fallendes Objekt zu simulieren).
    pub fn set_velocity(&mut self, id: EntityId, velocity: Vec3) {
        if let Some(v) = self.velocities.get_mut(&id) {
            *v = velocity;
        }
    }

    /// Hängt eine Action eines anderen Users an (ohne bekannte Parameter).
    pub fn add_foreign_action(&mut self, entity: EntityId, tag: impl Into<String>) -> ActionId {
        let id = self.allocate_action_id();
        self.actions.insert(
            id,
            SimAction {
                entity,
                kind: ActionKind::FarGrab,
                tag: tag.into(),
                params: None,
                expires_at: Duration::MAX,
            },
        );
        id
    }

    /// Entfernt eine Action ohne Zählung (z.B. fremder Grabber lässt los).
    pub fn remove_action(&mut self, id: ActionId) -> Option<SimAction> {
        self.actions.shift_remove(&id)
    }

    pub fn action(&self, id: ActionId) -> Option<&SimAction> {
        self.actions.get(&id)
    }

    /// Alle Actions an einer Entity.
    pub fn actions_on(&self, entity: EntityId) -> impl Iterator<Item = (ActionId, &SimAction)> {
        self.actions
            .iter()
            .filter(move |(_, action)| action.entity == entity)
            .map(|(id, action)| (*id, action))
    }

    /// Rückt die Sim-Uhr vor.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
    }

    /// Setzt das Reticle und wertet den Entity-Pick-Ray an dieser Stelle aus.
    ///
    /// Entities werden als Kugeln mit halbem Bounding-Durchmesser getroffen.
    pub fn point_at(&mut self, sample: CursorSample) {
        self.reticle = sample;
        let ray = self.camera.compute_pick_ray(sample);

        let nearest = self
            .entities
            .iter()
            .filter_map(|(id, props)| {
                ray_sphere_distance(&ray, props.position, props.bounding_diameter() * 0.5)
                    .map(|d| (*id, d))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        self.entity_pick = match nearest {
            Some((id, distance)) => PickResult::entity(id, distance),
            None => PickResult::miss(),
        };
    }

    /// Schritt der Constraint-Physik: abgelaufene Actions entfernen, gegriffene
    /// Entities exponentiell an ihr Ziel heranziehen.
    pub fn step_physics(&mut self, dt: Duration) {
        let now = self.clock;
        self.actions.retain(|id, action| {
            let alive = action.expires_at > now;
            if !alive {
                log::debug!("Action {:?} abgelaufen", id);
            }
            alive
        });

        let dt_secs = dt.as_secs_f32();
        if dt_secs <= 0.0 {
            return;
        }
        for action in self.actions.values() {
            let Some(params) = action.params.as_ref() else {
                continue;
            };
            let Some(props) = self.entities.get_mut(&action.entity) else {
                continue;
            };
            if let Some(velocity) = self.velocities.get_mut(&action.entity) {
                super::physics::apply_far_grab(props, velocity, &params.target, dt_secs);
            }
        }
    }

    fn allocate_action_id(&mut self) -> ActionId {
        let id = ActionId(self.next_action_id);
        self.next_action_id += 1;
        id
    }
}

/// Ablaufzeitpunkt einer Action; unendliche oder zu große TTL laufen nie ab.
fn expiry(clock: Duration, ttl_secs: f32) -> Duration {
    let ttl = Duration::try_from_secs_f32(ttl_secs.max(0.0)).unwrap_or(Duration::MAX);
    clock.saturating_add(ttl)
}

/// Distanz entlang des Strahls bis zur Kugeloberfläche, `None` ohne Treffer.
fn ray_sphere_distance(ray: &PickRay, center: Vec3, radius: f32) -> Option<f32> {
    let oc = center - ray.origin;
    let along = oc.dot(ray.direction);
    if along < 0.0 {
        return None;
    }
    let d2 = oc.length_squared() - along * along;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }
    Some((along - (r2 - d2).sqrt()).max(0.0))
}

impl EntityStore for SimWorld {
    fn properties(&self, id: EntityId) -> Option<EntityProperties> {
        self.entities.get(&id).cloned()
    }

    fn edit(&mut self, id: EntityId, edit: EntityEdit) -> anyhow::Result<()> {
        let props = self
            .entities
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Entity {} existiert nicht", id))?;
        if let Some(dynamic) = edit.dynamic {
            props.dynamic = dynamic;
        }
        if let Some(velocity) = edit.local_velocity {
            self.velocities.insert(id, velocity);
        }
        Ok(())
    }

    fn call_method(&mut self, id: EntityId, method: &str, args: &[&str]) {
        self.method_calls.push(MethodCall {
            entity: id,
            method: method.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
    }
}

impl PointerService for SimWorld {
    fn overlay_at_reticle(&self) -> bool {
        self.overlay_under_reticle
    }

    fn last_overlay_pick(&self) -> PickResult {
        self.overlay_pick
    }

    fn last_entity_pick(&self) -> PickResult {
        self.entity_pick
    }

    fn set_render_state(&mut self, state: RenderState) {
        self.render_state = state;
    }

    fn set_beacon_height(&mut self, height: f32) {
        self.beacon_height = height;
    }

    fn lock_end(&mut self, entity: Option<EntityId>) {
        self.locked_end = entity;
    }

    fn unhighlight(&mut self, entity: EntityId) {
        self.unhighlighted.push(entity);
    }

    fn reticle_position(&self) -> CursorSample {
        self.reticle
    }

    fn set_reticle_position(&mut self, position: CursorSample) {
        self.reticle = position;
    }

    fn remove_pointers(&mut self) {
        self.pointers_removed = true;
    }
}

impl ActionService for SimWorld {
    fn add_action(
        &mut self,
        kind: ActionKind,
        entity: EntityId,
        params: &FarGrabParams,
    ) -> anyhow::Result<ActionId> {
        if self.reject_new_actions {
            bail!("Physik-Service lehnt neue Actions ab");
        }
        if !self.entities.contains_key(&entity) {
            bail!("Entity {} existiert nicht", entity);
        }
        let id = self.allocate_action_id();
        self.actions.insert(
            id,
            SimAction {
                entity,
                kind,
                tag: params.tag.clone(),
                params: Some(params.clone()),
                expires_at: expiry(self.clock, params.ttl),
            },
        );
        self.action_calls.added += 1;
        log::trace!("{} {:?} an {} angelegt", kind.as_str(), id, entity);
        Ok(id)
    }

    fn update_action(
        &mut self,
        entity: EntityId,
        action: ActionId,
        params: &FarGrabParams,
    ) -> anyhow::Result<()> {
        let clock = self.clock;
        let sim_action = self
            .actions
            .get_mut(&action)
            .filter(|a| a.entity == entity)
            .ok_or_else(|| anyhow!("Action {:?} an {} existiert nicht", action, entity))?;
        sim_action.tag = params.tag.clone();
        sim_action.params = Some(params.clone());
        sim_action.expires_at = expiry(clock, params.ttl);
        self.action_calls.updated += 1;
        Ok(())
    }

    fn delete_action(&mut self, entity: EntityId, action: ActionId) -> anyhow::Result<()> {
        match self.actions.get(&action) {
            Some(a) if a.entity == entity => {
                self.actions.shift_remove(&action);
                self.action_calls.deleted += 1;
                Ok(())
            }
            _ => bail!("Action {:?} an {} existiert nicht", action, entity),
        }
    }

    fn actions(&self, entity: EntityId) -> Vec<ActionInfo> {
        self.actions_on(entity)
            .map(|(id, action)| ActionInfo {
                id,
                tag: action.tag.clone(),
            })
            .collect()
    }
}

impl CameraService for SimWorld {
    fn camera_position(&self) -> Vec3 {
        self.camera.position
    }

    fn camera_orientation(&self) -> Quat {
        self.camera.orientation
    }

    fn compute_pick_ray(&self, sample: CursorSample) -> PickRay {
        self.camera.compute_pick_ray(sample)
    }
}

impl NotificationBus for SimWorld {
    fn send_local_message(&mut self, channel: &str, message: &str) {
        self.messages.push((channel.to_string(), message.to_string()));
    }
}

impl HostContext for SimWorld {
    fn is_in_edit_mode(&self) -> bool {
        self.edit_mode
    }

    fn is_hmd_active(&self) -> bool {
        self.hmd_active
    }

    fn session_id(&self) -> &str {
        &self.session_id
    }

    fn now(&self) -> Duration {
        self.clock
    }
}
