//! Resource token tick integration tests: visibility mirroring, remove/restore
//! events, layout spawning and the demo hotkeys.

use bevy_ecs::prelude::*;

use orthorig::components::resourcetoken::ResourceToken;
use orthorig::components::tokenlayout::TokenLayout;
use orthorig::components::visibility::Visibility;
use orthorig::components::worldposition::WorldPosition;
use orthorig::events::resource::{ResourceRemovedEvent, ResourceRestoredEvent};
use orthorig::game::{build_update_schedule, insert_default_resources, register_observers};
use orthorig::resources::input::InputState;
use orthorig::systems::resourcetoken::resource_visibility_system;

fn make_world() -> World {
    let mut world = World::new();
    insert_default_resources(&mut world, 800, 600);
    register_observers(&mut world);
    world
}

fn tick(world: &mut World) {
    let mut schedule = build_update_schedule();
    schedule.run(world);
}

fn tick_visibility(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(resource_visibility_system);
    schedule.run(world);
}

/// Spawn a display with the given initial visibility and a token pointing at it.
fn spawn_token(world: &mut World, removed: bool, shown: bool) -> (Entity, Entity) {
    let display = world
        .spawn((WorldPosition::new(0.0, 0.0, 0.0), Visibility::new(shown)))
        .id();
    let token = world
        .spawn(ResourceToken::new(display).with_removed(removed))
        .id();
    (token, display)
}

fn visible(world: &World, display: Entity) -> bool {
    world.get::<Visibility>(display).unwrap().visible
}

fn removed(world: &World, token: Entity) -> bool {
    world.get::<ResourceToken>(token).unwrap().is_removed()
}

// =============================================================================
// Visibility mirroring
// =============================================================================

#[test]
fn present_token_stays_visible_across_ticks() {
    let mut world = make_world();
    let (_, display) = spawn_token(&mut world, false, true);

    for _ in 0..3 {
        tick_visibility(&mut world);
        assert!(visible(&world, display));
    }
}

#[test]
fn hidden_display_of_present_token_is_shown_again() {
    let mut world = make_world();
    let (_, display) = spawn_token(&mut world, false, false);

    tick_visibility(&mut world);

    assert!(visible(&world, display));
}

#[test]
fn setting_removed_hides_display_on_next_tick() {
    let mut world = make_world();
    let (token, display) = spawn_token(&mut world, false, true);
    tick_visibility(&mut world);

    world
        .get_mut::<ResourceToken>(token)
        .unwrap()
        .set_removed(true);
    tick_visibility(&mut world);
    assert!(!visible(&world, display));

    // Idempotent: more ticks change nothing
    tick_visibility(&mut world);
    tick_visibility(&mut world);
    assert!(!visible(&world, display));
    assert!(removed(&world, token));
}

#[test]
fn unchanged_visibility_is_not_marked_changed() {
    let mut world = make_world();
    let (_, display) = spawn_token(&mut world, false, true);
    world.clear_trackers();

    tick_visibility(&mut world);

    let changed = world
        .entity(display)
        .get_ref::<Visibility>()
        .unwrap()
        .is_changed();
    assert!(!changed);
}

#[test]
fn token_with_missing_display_is_skipped() {
    let mut world = make_world();
    let (token, display) = spawn_token(&mut world, true, true);
    let (_, other_display) = spawn_token(&mut world, true, true);
    world.despawn(display);

    tick_visibility(&mut world);

    assert!(removed(&world, token));
    assert!(!visible(&world, other_display));
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn removed_event_flips_flag_and_hides_display() {
    let mut world = make_world();
    let (token, display) = spawn_token(&mut world, false, true);

    world.trigger(ResourceRemovedEvent { token });
    assert!(removed(&world, token));

    tick(&mut world);
    assert!(!visible(&world, display));
}

#[test]
fn restored_event_for_one_token_leaves_others_removed() {
    let mut world = make_world();
    let (a, a_display) = spawn_token(&mut world, true, false);
    let (b, b_display) = spawn_token(&mut world, true, false);

    world.trigger(ResourceRestoredEvent { token: Some(a) });
    tick(&mut world);

    assert!(!removed(&world, a));
    assert!(removed(&world, b));
    assert!(visible(&world, a_display));
    assert!(!visible(&world, b_display));
}

#[test]
fn restore_all_brings_back_every_token() {
    let mut world = make_world();
    let tokens: Vec<_> = (0..4)
        .map(|i| spawn_token(&mut world, i % 2 == 0, true))
        .collect();

    world.trigger(ResourceRestoredEvent { token: None });
    tick(&mut world);

    for (token, display) in tokens {
        assert!(!removed(&world, token));
        assert!(visible(&world, display));
    }
}

#[test]
fn event_for_non_token_entity_is_ignored() {
    let mut world = make_world();
    let stray = world.spawn(WorldPosition::new(1.0, 0.0, 1.0)).id();
    let (token, _) = spawn_token(&mut world, false, true);

    world.trigger(ResourceRemovedEvent { token: stray });
    world.trigger(ResourceRestoredEvent { token: Some(stray) });

    assert!(!removed(&world, token));
}

// =============================================================================
// Layout spawning
// =============================================================================

const LAYOUT_JSON: &str = r#"{
    "offset_x": 0.0,
    "offset_z": 0.0,
    "cell_size": 1.0,
    "grid": ["WS", ".F"],
    "legend": {
        "W": { "color": [60, 140, 60], "height": 0.8 },
        "S": { "color": [130, 130, 140] },
        "F": { "color": [200, 180, 60], "removed": true },
        ".": null
    }
}"#;

fn write_layout(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "orthorig_{}_{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn layout_spawns_tokens_with_matching_visibility() {
    let path = write_layout("layout_spawn", LAYOUT_JSON);
    let mut world = make_world();
    world.spawn(TokenLayout::new(&path));

    tick(&mut world);
    std::fs::remove_file(&path).ok();

    let mut query = world.query::<&ResourceToken>();
    let tokens: Vec<ResourceToken> = query.iter(&world).copied().collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens.iter().filter(|t| t.is_removed()).count(), 1);
    for t in &tokens {
        assert_eq!(visible(&world, t.display), !t.is_removed());
    }

    let mut layouts = world.query::<&TokenLayout>();
    assert!(layouts.iter(&world).all(|l| l.spawned));

    // A second tick does not spawn the layout again
    tick(&mut world);
    assert_eq!(query.iter(&world).count(), 3);
}

#[test]
fn missing_layout_file_spawns_nothing() {
    let mut world = make_world();
    world.spawn(TokenLayout::new("/nonexistent/orthorig/layout.json"));

    tick(&mut world);

    let mut query = world.query::<&ResourceToken>();
    assert_eq!(query.iter(&world).count(), 0);
    let mut layouts = world.query::<&TokenLayout>();
    assert!(layouts.iter(&world).all(|l| l.spawned));
}

// =============================================================================
// Hotkeys
// =============================================================================

#[test]
fn remove_hotkey_removes_exactly_one_present_token() {
    let mut world = make_world();
    let tokens: Vec<_> = (0..5).map(|_| spawn_token(&mut world, false, true)).collect();

    world.resource_mut::<InputState>().remove_token.just_pressed = true;
    tick(&mut world);

    let removed_count = tokens.iter().filter(|(t, _)| removed(&world, *t)).count();
    let hidden_count = tokens.iter().filter(|(_, d)| !visible(&world, *d)).count();
    assert_eq!(removed_count, 1);
    assert_eq!(hidden_count, 1);
}

#[test]
fn remove_hotkey_with_nothing_left_is_harmless() {
    let mut world = make_world();
    let (token, _) = spawn_token(&mut world, true, false);

    world.resource_mut::<InputState>().remove_token.just_pressed = true;
    tick(&mut world);

    assert!(removed(&world, token));
}

#[test]
fn restore_hotkey_restores_everything() {
    let mut world = make_world();
    let tokens: Vec<_> = (0..3).map(|_| spawn_token(&mut world, true, false)).collect();

    world.resource_mut::<InputState>().restore_tokens.just_pressed = true;
    tick(&mut world);

    for (token, display) in tokens {
        assert!(!removed(&world, token));
        assert!(visible(&world, display));
    }
}
