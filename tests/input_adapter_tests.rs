mod common;

use common::{crate_props, Rig};
use glam::Vec2;
use mouse_grab::{GrabIntent, GrabMode, HostInputEvent, InputAdapter, PointerButton};

fn mouse_press(position: Vec2) -> HostInputEvent {
    HostInputEvent::MousePress {
        x: position.x,
        y: position.y,
        button: PointerButton::Left,
        is_alt: false,
        is_meta: false,
    }
}

fn dispatch(rig: &mut Rig, adapter: &InputAdapter, event: HostInputEvent) {
    if let HostInputEvent::MousePress { x, y, .. } | HostInputEvent::MouseMove { x, y } = event {
        rig.world.point_at(Vec2::new(x, y));
    }
    adapter
        .dispatch(&mut rig.controller, &mut rig.state, &mut rig.world, &event)
        .expect("Event sollte ohne Fehler verarbeitet werden");
}

#[test]
fn test_host_event_sequence_drives_full_grab() {
    let mut rig = Rig::new(crate_props());
    let adapter = InputAdapter::new();
    let center = rig.center();

    dispatch(&mut rig, &adapter, mouse_press(center));
    dispatch(
        &mut rig,
        &adapter,
        HostInputEvent::KeyPress {
            text: "SHIFT".into(),
            is_auto_repeat: false,
        },
    );
    dispatch(
        &mut rig,
        &adapter,
        HostInputEvent::MouseMove {
            x: center.x,
            y: center.y - 30.0,
        },
    );
    assert!(rig.tick());
    assert_eq!(
        rig.state.session.as_ref().unwrap().mode,
        GrabMode::VerticalCylinder
    );
    assert_eq!(rig.world.action_calls.added, 1);

    dispatch(
        &mut rig,
        &adapter,
        HostInputEvent::MouseRelease {
            x: center.x,
            y: center.y - 30.0,
            button: PointerButton::Left,
        },
    );
    dispatch(&mut rig, &adapter, HostInputEvent::ScriptEnding);

    assert!(!rig.state.is_active());
    assert_eq!(rig.world.action_calls.deleted, 1);
    assert!(rig.world.pointers_removed);
}

#[test]
fn test_alt_click_and_unrelated_keys_are_ignored() {
    let mut rig = Rig::new(crate_props());
    let adapter = InputAdapter::new();
    let center = rig.center();

    dispatch(
        &mut rig,
        &adapter,
        HostInputEvent::MousePress {
            x: center.x,
            y: center.y,
            button: PointerButton::Left,
            is_alt: true,
            is_meta: false,
        },
    );
    assert!(!rig.state.is_active());

    let intents = adapter.collect_intents(&[
        HostInputEvent::KeyPress {
            text: "A".into(),
            is_auto_repeat: false,
        },
        HostInputEvent::KeyPress {
            text: "CONTROL".into(),
            is_auto_repeat: true,
        },
        HostInputEvent::KeyRelease {
            text: "CONTROL".into(),
        },
    ]);
    assert_eq!(intents.len(), 1);
    assert!(matches!(
        intents[0],
        GrabIntent::ModifierChanged { pressed: false, .. }
    ));
}
