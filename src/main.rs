//! Mouse Grab Simulator.
//!
//! Spielt eine Maus-/Tastatur-Sequenz gegen den headless Sim-Host ab
//! und protokolliert, wie der Far-Grab-Constraint das Objekt führt.

use std::time::Duration;

use glam::{Vec2, Vec3};
use mouse_grab::{
    EntityProperties, GrabController, GrabOptions, GrabState, HostInputEvent, InputAdapter,
    PointerButton, SimWorld,
};

/// Simulationsschritt der Host-Schleife.
const FRAME: Duration = Duration::from_millis(8);

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Mouse Grab Simulator v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = GrabOptions::config_path();
    let options = GrabOptions::load_from_file(&config_path);

    let mut runner = SimRunner::new(options);
    runner.run(&demo_script())?;
    runner.report();
    Ok(())
}

/// Host-Schleife: Events zum geplanten Zeitpunkt einspeisen, Tick pollen, Physik schrittweise.
struct SimRunner {
    world: SimWorld,
    state: GrabState,
    controller: GrabController,
    input: InputAdapter,
    crate_id: mouse_grab::EntityId,
}

impl SimRunner {
    fn new(options: GrabOptions) -> Self {
        let mut world = SimWorld::new("a1b2c3d4");
        world.camera.position = Vec3::new(0.0, 1.7, 0.0);
        let crate_id = world.spawn(EntityProperties {
            position: Vec3::new(0.0, 0.5, -6.0),
            dimensions: Vec3::ONE,
            density: 500.0,
            ..EntityProperties::default()
        });
        world.camera.look_at(Vec3::new(0.0, 0.5, -6.0));

        Self {
            world,
            state: GrabState::with_options(options),
            controller: GrabController::new(),
            input: InputAdapter::new(),
            crate_id,
        }
    }

    fn run(&mut self, script: &[(Duration, HostInputEvent)]) -> anyhow::Result<()> {
        let end = script.last().map(|(at, _)| *at).unwrap_or_default() + Duration::from_millis(500);
        let mut events = script.iter().peekable();

        while self.world.clock <= end {
            while let Some((_, event)) = events.next_if(|(at, _)| *at <= self.world.clock) {
                self.feed(event)?;
            }

            if self.controller.poll_tick(&mut self.state, &mut self.world)? {
                self.log_tick();
            }

            self.world.advance(FRAME);
            self.world.step_physics(FRAME);
        }
        Ok(())
    }

    fn feed(&mut self, event: &HostInputEvent) -> anyhow::Result<()> {
        match event {
            HostInputEvent::MousePress { x, y, .. } | HostInputEvent::MouseMove { x, y } => {
                self.world.point_at(Vec2::new(*x, *y));
            }
            _ => {}
        }
        log::debug!("[{:>5} ms] {:?}", self.world.clock.as_millis(), event);
        self.input
            .dispatch(&mut self.controller, &mut self.state, &mut self.world, event)
    }

    fn log_tick(&self) {
        let Some(props) = self.world.entity(self.crate_id) else {
            return;
        };
        match self.state.session.as_ref() {
            Some(session) => log::info!(
                "[{:>5} ms] {:?}: Ziel {:.2?}, Position {:.2?}",
                self.world.clock.as_millis(),
                session.mode,
                session.target_position,
                props.position
            ),
            None => log::info!(
                "[{:>5} ms] kein Grab, Position {:.2?}",
                self.world.clock.as_millis(),
                props.position
            ),
        }
    }

    fn report(&self) {
        let calls = self.world.action_calls;
        log::info!(
            "Actions: {} angelegt, {} aktualisiert, {} gelöscht; {} Commands protokolliert",
            calls.added,
            calls.updated,
            calls.deleted,
            self.state.command_log.len()
        );
        for (channel, message) in &self.world.messages {
            log::info!("Nachricht auf {}: {}", channel, message);
        }
        if let Some(props) = self.world.entity(self.crate_id) {
            log::info!(
                "Endzustand: Position {:.2?}, dynamisch: {}",
                props.position,
                props.dynamic
            );
        }
    }
}

/// Greifen, seitlich ziehen, mit SHIFT anheben, mit CONTROL drehen, loslassen.
fn demo_script() -> Vec<(Duration, HostInputEvent)> {
    let ms = Duration::from_millis;
    let mut script = vec![(
        ms(0),
        HostInputEvent::MousePress {
            x: 640.0,
            y: 360.0,
            button: PointerButton::Left,
            is_alt: false,
            is_meta: false,
        },
    )];

    // Planar nach rechts
    for step in 1..=20u64 {
        script.push((
            ms(step * 16),
            HostInputEvent::MouseMove {
                x: 640.0 + step as f32 * 6.0,
                y: 360.0,
            },
        ));
    }

    // Anheben
    script.push((
        ms(400),
        HostInputEvent::KeyPress {
            text: "SHIFT".into(),
            is_auto_repeat: false,
        },
    ));
    for step in 1..=15u64 {
        script.push((
            ms(400 + step * 16),
            HostInputEvent::MouseMove {
                x: 760.0,
                y: 360.0 - step as f32 * 5.0,
            },
        ));
    }
    script.push((ms(700), HostInputEvent::KeyRelease { text: "SHIFT".into() }));

    // Drehen
    script.push((
        ms(750),
        HostInputEvent::KeyPress {
            text: "CONTROL".into(),
            is_auto_repeat: false,
        },
    ));
    for step in 1..=10u64 {
        script.push((
            ms(750 + step * 16),
            HostInputEvent::MouseMove {
                x: 760.0 + step as f32 * 8.0,
                y: 285.0,
            },
        ));
    }
    script.push((ms(950), HostInputEvent::KeyRelease { text: "CONTROL".into() }));

    script.push((
        ms(1000),
        HostInputEvent::MouseRelease {
            x: 760.0,
            y: 285.0,
            button: PointerButton::Left,
        },
    ));
    script.push((ms(1200), HostInputEvent::ScriptEnding));
    script
}
