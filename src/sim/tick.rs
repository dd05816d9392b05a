//! Frame stepping
//!
//! One frame is one pass over the entity table in slot order. Each entity is
//! updated and resolved to completion before the next one, so later slots see
//! the already-moved positions of earlier ones.

use glam::Vec3;

use super::entity::{Entity, EntityKind, Facing};
use super::input::{Button, InputSnapshot};
use super::resolve::{ResolveParams, resolve_slot};
use super::state::World;
use crate::config::PlayerTuning;

/// Advance the world by one frame at wall-clock time `ms`.
///
/// The step is the time since the previous call, capped at
/// `config.max_frame_dt`. A call that does not advance the clock steps
/// nothing. Returns `true` when the driver should exit.
pub fn frame(world: &mut World, ms: u64, input: &InputSnapshot) -> bool {
    let dt = ms.saturating_sub(world.last_ms) as f32 / 1000.0;
    let dt = dt.min(world.config.max_frame_dt);
    world.last_ms = ms;

    if dt > 0.0 {
        tick(world, input, dt);
    } else {
        log::debug!("no time elapsed at {ms} ms, frame skipped");
    }

    input.was_pressed(Button::Start)
}

/// Advance the world by exactly `dt` seconds
pub fn tick(world: &mut World, input: &InputSnapshot, dt: f32) {
    assert!(dt > 0.0, "tick with non-positive dt {dt}");

    let params = ResolveParams::from(&world.config);
    let tuning = world.config.player;
    let camera_height = world.config.camera_height;

    world.scratch.clear();

    let entities = world.store.as_mut_slice();
    for slot in 0..entities.len() {
        match entities[slot].kind {
            EntityKind::Player => {
                drive_player(&mut entities[slot], input, &tuning, dt);
                resolve_slot(entities, slot, dt, &params);
                world.camera = Some(entities[slot].position + Vec3::Z * camera_height);
            }
            EntityKind::Monster | EntityKind::Derper | EntityKind::Thing => {
                if entities[slot].velocity != Vec3::ZERO {
                    resolve_slot(entities, slot, dt, &params);
                }
            }
            EntityKind::Wall | EntityKind::None => {}
        }

        entities[slot].animation_clock += dt;
    }

    world.elapsed += dt;
    world.frame_count += 1;

    if let Some(player) = world.player() {
        log::trace!("frame {} dt {dt:.4}: {player}", world.frame_count);
    }
}

/// Apply held directions to the player's velocity
pub fn drive_player(player: &mut Entity, input: &InputSnapshot, tuning: &PlayerTuning, dt: f32) {
    let skid = tuning.skid * dt;
    let v = &mut player.velocity;

    v.x = skid_axis(v.x, input.is_down(Button::Right), input.is_down(Button::Left), skid);
    v.y = skid_axis(v.y, input.is_down(Button::Up), input.is_down(Button::Down), skid);

    let accel = tuning.acceleration * dt;
    v.x += accel * (input.axis(Button::Right) - input.axis(Button::Left));
    v.y += accel * (input.axis(Button::Up) - input.axis(Button::Down));

    if v.x > 0.0 {
        player.facing = Facing::Right;
    } else if v.x < 0.0 {
        player.facing = Facing::Left;
    }

    // Only the planar components are capped
    let speed = player.velocity.length();
    if speed > tuning.max_speed {
        let scale = tuning.max_speed / speed;
        player.velocity.x *= scale;
        player.velocity.y *= scale;
    }
}

/// Slow one axis toward zero without crossing it.
///
/// Motion toward a released direction loses `step`; with both directions of
/// the axis released it loses `step` a second time.
fn skid_axis(mut v: f32, positive_held: bool, negative_held: bool, step: f32) -> f32 {
    if !positive_held && v > 0.0 {
        v -= step.min(v);
    }
    if !negative_held && v < 0.0 {
        v += step.min(-v);
    }
    if !positive_held && !negative_held {
        v -= v.signum() * step.min(v.abs());
    }
    v
}
