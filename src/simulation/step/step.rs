use crate::boundary::BoundaryFilter;

use super::{commands, WorldCore};

pub(super) fn step(world: &mut WorldCore, dt: f32) {
    // Drain queued interactions first so an explosion requested between
    // frames acts on the body set as the user saw it
    commands::drain(world);

    let events = world.physics.step(dt);
    let removed = BoundaryFilter::process(&events, &mut world.physics);
    world.removed_out_of_bounds += removed as u64;

    world.frame += 1;
}
