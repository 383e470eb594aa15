//! Gemeinsamer Aufbau für die Integrationstests: Controller, State und Sim-Host.

#![allow(dead_code)]

use std::time::Duration;

use glam::{Vec2, Vec3};
use mouse_grab::{
    EntityId, EntityProperties, GrabController, GrabState, PointerButton, PointerEvent, SimWorld,
};

/// Ein Tick-Intervall mit Standard-Optionen.
pub const TICK: Duration = Duration::from_millis(33);
/// Session-ID des lokalen Users im Sim-Host.
pub const SESSION: &str = "me";

/// Kiste 6 m vor der Kamera, 1,2 m unter Augenhöhe, nicht dynamisch.
pub fn crate_props() -> EntityProperties {
    EntityProperties {
        position: Vec3::new(0.0, 0.5, -6.0),
        dimensions: Vec3::ONE,
        ..EntityProperties::default()
    }
}

pub struct Rig {
    pub controller: GrabController,
    pub state: GrabState,
    pub world: SimWorld,
    pub entity: EntityId,
}

impl Rig {
    /// Kamera auf Augenhöhe, auf die Entity ausgerichtet.
    pub fn new(props: EntityProperties) -> Self {
        let mut world = SimWorld::new(SESSION);
        world.camera.position = Vec3::new(0.0, 1.7, 0.0);
        world.camera.look_at(props.position);
        let entity = world.spawn(props);
        Self {
            controller: GrabController::new(),
            state: GrabState::new(),
            world,
            entity,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.world.camera.screen_center()
    }

    pub fn press_at(&mut self, position: Vec2) {
        self.world.point_at(position);
        self.controller
            .on_press(&mut self.state, &mut self.world, PointerEvent::left(position))
            .expect("Press sollte ohne Fehler durchlaufen");
    }

    pub fn press_center(&mut self) {
        let center = self.center();
        self.press_at(center);
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.world.point_at(position);
        self.controller
            .on_move(&mut self.state, &mut self.world, position)
            .expect("Move sollte ohne Fehler durchlaufen");
    }

    pub fn release(&mut self) {
        self.controller
            .on_release(&mut self.state, &mut self.world, PointerButton::Left)
            .expect("Release sollte ohne Fehler durchlaufen");
    }

    /// Rückt die Uhr um ein Intervall vor und feuert den Tick, falls fällig.
    pub fn tick(&mut self) -> bool {
        self.world.advance(TICK);
        self.controller
            .poll_tick(&mut self.state, &mut self.world)
            .expect("Tick sollte ohne Fehler durchlaufen")
    }
}
