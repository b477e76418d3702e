//! Interaction commands
//!
//! Explosions and detection suspension are triggered from UI callbacks
//! that may run outside the update loop, so they are queued here and
//! drained at the top of the next step - one serialized writer, no
//! locks. Placement runs immediately because the caller needs the new
//! body id and tap handling already happens on the update thread.

use crate::core::math::Vec3;
use crate::physics::BodyId;

use super::WorldCore;

#[derive(Clone, Copy, Debug)]
pub(super) enum Command {
    Explode { hit: Vec3 },
    HideSurfaces,
}

pub(super) fn place_object(world: &mut WorldCore, position: Vec3) -> Option<BodyId> {
    world.physics.spawn(position)
}

pub(super) fn request_explosion(world: &mut WorldCore, hit: Vec3) -> bool {
    if !hit.is_finite() {
        return false;
    }
    world.pending.push(Command::Explode { hit });
    true
}

pub(super) fn request_hide_surfaces(world: &mut WorldCore) {
    world.pending.push(Command::HideSurfaces);
}

pub(super) fn drain(world: &mut WorldCore) {
    let pending = std::mem::take(&mut world.pending);
    for command in pending {
        match command {
            Command::Explode { hit } => {
                // The blast origin sits a little below the hit point so
                // the net impulse pushes cubes up off the surface
                let origin = hit - Vec3::new(0.0, world.explosion.settings().y_offset, 0.0);
                world.explosion.detonate(origin, &mut world.physics);
            }
            Command::HideSurfaces => {
                world.surfaces.set_all_hidden();
            }
        }
    }
}
