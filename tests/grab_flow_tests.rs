mod common;

use std::time::Duration;

use common::{crate_props, Rig, TICK};
use glam::{Vec2, Vec3};
use mouse_grab::app::ports::RenderState;
use mouse_grab::{EntityProperties, GrabCommand, GrabOptions, PickResult, PointerButton};

#[test]
fn test_press_tick_release_creates_and_removes_constraint() {
    let mut rig = Rig::new(crate_props());

    rig.press_center();

    assert!(rig.state.is_active());
    assert!(rig.world.entity(rig.entity).unwrap().dynamic);
    assert_eq!(rig.world.action_calls.added, 0, "Constraint erst beim ersten Tick");
    assert!(rig.state.scheduler.is_pending());

    assert!(rig.tick());
    assert_eq!(rig.world.action_calls.added, 1);
    let action_id = rig.state.session.as_ref().unwrap().action_id.expect("Handle gesetzt");
    assert!(rig.world.action(action_id).is_some());

    rig.world.set_velocity(rig.entity, Vec3::new(2.0, 0.0, 0.0));
    rig.release();

    assert!(!rig.state.is_active());
    assert!(!rig.state.scheduler.is_pending());
    assert_eq!(rig.world.action_calls.deleted, 1);
    assert!(rig.world.action(action_id).is_none());
    let props = rig.world.entity(rig.entity).unwrap();
    assert!(!props.dynamic);
    assert_eq!(rig.world.velocity(rig.entity), Some(Vec3::ZERO));
    assert_eq!(rig.world.render_state, RenderState::Idle);
    assert_eq!(rig.world.locked_end, None);
}

#[test]
fn test_press_sets_pointer_state() {
    let mut rig = Rig::new(crate_props());

    rig.press_center();

    assert_eq!(rig.world.render_state, RenderState::Grabbed);
    assert_eq!(rig.world.locked_end, Some(rig.entity));
    assert_eq!(rig.world.unhighlighted, vec![rig.entity]);
    assert!((rig.world.beacon_height - Vec3::ONE.length()).abs() < 1e-6);
}

#[test]
fn test_constraint_params_carry_tag_ttl_and_floored_timescale() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    rig.tick();

    let action_id = rig.state.session.as_ref().unwrap().action_id.unwrap();
    let action = rig.world.action(action_id).unwrap();
    let params = action.params.as_ref().expect("eigene Action hat Parameter");

    assert_eq!(action.tag, "grab-me");
    assert_eq!(params.ttl, 10.0);
    match params.target {
        mouse_grab::GrabTarget::Position {
            linear_time_scale, ..
        } => assert!(linear_time_scale >= 0.1),
        other => panic!("Positionsziel erwartet, nicht {other:?}"),
    }
}

#[test]
fn test_already_dynamic_entity_is_not_reverted() {
    let mut rig = Rig::new(EntityProperties {
        dynamic: true,
        ..crate_props()
    });
    rig.press_center();
    rig.tick();
    rig.world.set_velocity(rig.entity, Vec3::X);

    rig.release();

    assert!(rig.world.entity(rig.entity).unwrap().dynamic);
    assert_eq!(rig.world.velocity(rig.entity), Some(Vec3::X));
}

#[test]
fn test_rapid_moves_coalesce_into_one_tick_with_latest_sample() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    let center = rig.center();

    for step in 1..=5 {
        rig.world.advance(Duration::from_millis(5));
        rig.move_to(center + Vec2::new(step as f32 * 10.0, 0.0));
        assert!(!rig.controller.poll_tick(&mut rig.state, &mut rig.world).unwrap());
    }
    rig.world.advance(TICK - Duration::from_millis(25));
    assert!(rig.controller.poll_tick(&mut rig.state, &mut rig.world).unwrap());

    let passes = rig
        .state
        .command_log
        .count(|c| matches!(c, GrabCommand::RunUpdatePass));
    assert_eq!(passes, 1);
    assert_eq!(rig.world.action_calls.added, 1);

    // Referenz: nur das letzte Sample
    let mut reference = Rig::new(crate_props());
    reference.press_center();
    reference.move_to(center + Vec2::new(50.0, 0.0));
    reference.tick();

    let target = rig.state.session.as_ref().unwrap().target_position;
    let expected = reference.state.session.as_ref().unwrap().target_position;
    assert!(target.distance(expected) < 1e-5, "{target:?} != {expected:?}");
}

#[test]
fn test_tick_rearms_itself_and_updates_constraint() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();

    assert!(rig.tick());
    assert!(rig.state.scheduler.is_pending());
    assert!(rig.tick());
    assert!(rig.tick());

    assert_eq!(rig.world.action_calls.added, 1);
    assert_eq!(rig.world.action_calls.updated, 2);
}

#[test]
fn test_release_cancels_pending_tick() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    rig.move_to(rig.center() + Vec2::new(20.0, 0.0));
    assert!(rig.state.scheduler.is_pending());

    rig.release();

    assert!(!rig.state.scheduler.is_pending());
    assert!(!rig.tick());
    assert_eq!(rig.world.action_calls.added, 0);
    assert_eq!(rig.world.action_calls.deleted, 0);
}

#[test]
fn test_release_of_right_button_keeps_grab() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();

    rig.controller
        .on_release(&mut rig.state, &mut rig.world, PointerButton::Right)
        .unwrap();

    assert!(rig.state.is_active());
}

#[test]
fn test_target_lost_skips_pass_and_stays_active() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    rig.tick();

    rig.world.despawn(rig.entity);
    rig.move_to(rig.center() + Vec2::new(30.0, 0.0));
    assert!(rig.tick());

    assert!(rig.state.is_active());
    assert!(!rig.state.scheduler.is_pending(), "kein Re-Arm nach verlorenem Ziel");
    assert_eq!(rig.world.action_calls.updated, 0);

    // Release mit fehlender Entity und fehlender Action darf nicht scheitern
    rig.release();
    assert!(!rig.state.is_active());
}

#[test]
fn test_press_preconditions_are_silent_noops() {
    // Edit-Modus
    let mut rig = Rig::new(crate_props());
    rig.world.edit_mode = true;
    rig.press_center();
    assert!(!rig.state.is_active());

    // Overlay unter dem Reticle
    let mut rig = Rig::new(crate_props());
    rig.world.overlay_under_reticle = true;
    rig.press_center();
    assert!(!rig.state.is_active());

    // Overlay-Pick getroffen
    let mut rig = Rig::new(crate_props());
    rig.world.overlay_pick = PickResult::overlay(1.0);
    rig.press_center();
    assert!(!rig.state.is_active());

    // Gesperrt
    let mut rig = Rig::new(EntityProperties {
        locked: true,
        ..crate_props()
    });
    rig.press_center();
    assert!(!rig.state.is_active());

    // Ausgerüstet
    let mut rig = Rig::new(EntityProperties {
        equipped: true,
        ..crate_props()
    });
    rig.press_center();
    assert!(!rig.state.is_active());

    assert!(rig.world.method_calls.is_empty());
    assert!(rig.world.messages.is_empty());
}

#[test]
fn test_press_on_empty_space_resets_render_state() {
    let mut rig = Rig::new(crate_props());
    rig.world.render_state = RenderState::Grabbed;

    rig.press_at(Vec2::new(5.0, 5.0));

    assert!(!rig.state.is_active());
    assert_eq!(rig.world.render_state, RenderState::Idle);
}

#[test]
fn test_press_out_of_range_leaves_entity_untouched() {
    // Durchmesser ~0.087 m → Reichweite ~8.7 m
    let mut rig = Rig::new(EntityProperties {
        position: Vec3::new(0.0, 1.7, -20.0),
        dimensions: Vec3::splat(0.05),
        ..EntityProperties::default()
    });

    rig.press_center();

    assert!(!rig.state.is_active());
    assert!(!rig.world.entity(rig.entity).unwrap().dynamic);
    assert_eq!(rig.world.render_state, RenderState::Idle);
}

#[test]
fn test_hmd_blocks_update_pass_and_allows_any_release() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    rig.world.hmd_active = true;

    rig.move_to(rig.center() + Vec2::new(10.0, 0.0));
    assert!(rig.tick(), "Tick vom Press steht noch aus");
    assert_eq!(rig.world.action_calls.added, 0);
    assert!(!rig.state.scheduler.is_pending());

    rig.controller
        .on_release(&mut rig.state, &mut rig.world, PointerButton::None)
        .unwrap();
    assert!(!rig.state.is_active());
}

#[test]
fn test_second_press_while_active_is_ignored() {
    let mut rig = Rig::new(crate_props());
    let other = rig.world.spawn(EntityProperties {
        position: Vec3::new(1.0, 0.5, -6.0),
        ..crate_props()
    });
    rig.press_center();

    rig.world.entity_pick = PickResult::entity(other, 5.0);
    let event = mouse_grab::PointerEvent::left(rig.center());
    rig.controller
        .on_press(&mut rig.state, &mut rig.world, event)
        .unwrap();

    assert_eq!(rig.state.session.as_ref().unwrap().entity_id, rig.entity);
    assert!(!rig.world.entity(other).unwrap().dynamic);
}

#[test]
fn test_hooks_and_notifications_for_grab_and_release() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    rig.release();

    let methods: Vec<_> = rig
        .world
        .method_calls
        .iter()
        .map(|c| (c.method.as_str(), c.args.clone()))
        .collect();
    assert_eq!(
        methods,
        vec![
            ("startDistanceGrab", vec!["mouse".to_string()]),
            ("releaseGrab", vec!["mouse".to_string()]),
        ]
    );

    assert_eq!(rig.world.messages.len(), 2);
    let (channel, grab) = &rig.world.messages[0];
    assert_eq!(channel, "Hifi-Object-Manipulation");
    let grab: serde_json::Value = serde_json::from_str(grab).unwrap();
    assert_eq!(grab["action"], "grab");
    assert_eq!(grab["grabbedEntity"], rig.entity.0);

    let release: serde_json::Value = serde_json::from_str(&rig.world.messages[1].1).unwrap();
    assert_eq!(release["action"], "release");
    assert_eq!(release["joint"], "mouse");
}

#[test]
fn test_update_pass_remembers_nonzero_gravity() {
    let mut rig = Rig::new(EntityProperties {
        gravity: Vec3::new(0.0, -9.8, 0.0),
        ..crate_props()
    });
    rig.press_center();
    rig.world.entity_mut(rig.entity).unwrap().gravity = Vec3::ZERO;

    rig.tick();

    let session = rig.state.session.as_ref().unwrap();
    assert_eq!(session.original_gravity, Some(Vec3::new(0.0, -9.8, 0.0)));
}

#[test]
fn test_failed_constraint_creation_is_retried() {
    let mut rig = Rig::new(crate_props());
    rig.world.reject_new_actions = true;
    rig.press_center();

    rig.tick();
    assert!(rig.state.session.as_ref().unwrap().action_id.is_none());
    assert!(rig.state.scheduler.is_pending());

    rig.world.reject_new_actions = false;
    rig.tick();
    assert!(rig.state.session.as_ref().unwrap().action_id.is_some());
}

#[test]
fn test_cleanup_tears_down_grab_and_removes_pointers() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    rig.tick();

    rig.controller.cleanup(&mut rig.state, &mut rig.world).unwrap();

    assert!(!rig.state.is_active());
    assert!(!rig.state.scheduler.is_pending());
    assert_eq!(rig.world.action_calls.deleted, 1);
    assert!(rig.world.pointers_removed);
    assert!(!rig.world.entity(rig.entity).unwrap().dynamic);
}

#[test]
fn test_constraint_pulls_entity_towards_target() {
    let mut rig = Rig::new(crate_props());
    rig.press_center();
    rig.move_to(rig.center() + Vec2::new(120.0, 0.0));

    for _ in 0..30 {
        rig.tick();
        rig.world.step_physics(TICK);
    }

    let target = rig.state.session.as_ref().unwrap().target_position;
    let position = rig.world.entity(rig.entity).unwrap().position;
    assert!(target.x > 0.5, "Ziel liegt rechts: {target:?}");
    assert!(position.distance(target) < 0.05, "{position:?} vs {target:?}");
}

#[test]
fn test_infinite_ttl_from_config_never_expires() {
    let options: GrabOptions =
        toml::from_str("action_ttl_secs = inf").expect("TOML mit inf sollte parsebar sein");
    let mut rig = Rig::new(crate_props());
    rig.state.set_options(options);
    rig.press_center();

    assert!(rig.tick());
    let action_id = rig.state.session.as_ref().unwrap().action_id.unwrap();
    assert_eq!(rig.world.action(action_id).unwrap().expires_at, Duration::MAX);

    rig.tick();
    rig.world.advance(Duration::from_secs(3600));
    rig.world.step_physics(TICK);
    assert!(rig.world.action(action_id).is_some());
}

#[test]
fn test_update_passes_run_at_tick_cadence_under_fast_input() {
    let mut rig = Rig::new(crate_props());
    let center = rig.center();
    rig.press_center();

    for ms in 1..=200u64 {
        rig.world.advance(Duration::from_millis(1));
        if ms % 4 == 0 {
            rig.move_to(center + Vec2::new(ms as f32 * 0.5, 0.0));
        }
        rig.controller
            .poll_tick(&mut rig.state, &mut rig.world)
            .unwrap();
    }

    let times = rig.state.command_log.update_pass_times();
    assert_eq!(times.first(), Some(&TICK));
    assert_eq!(times.len(), 6);
    assert!(rig.state.command_log.update_intervals().iter().all(|dt| *dt == TICK));
}
