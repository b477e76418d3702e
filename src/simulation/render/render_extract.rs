//! Packed transform buffers for the JS scene-graph sync
//!
//! The renderer calls extract_* once per frame and reads the buffer
//! through ptr/len as a Float32Array view. Entries are sorted by id so
//! the consumer sees a stable order.
//!
//! Surface entry: [id, width, depth, thickness, lx, ly, lz, visible]
//! (positions local to the anchor node the host already has)
//! Body entry:    [id, category, x, y, z, rx, ry, rz]
//! (world position + Euler orientation; only Movable bodies are listed)

use crate::domain::category::BodyCategory;

use super::WorldCore;

pub const SURFACE_STRIDE: usize = 8;
pub const BODY_STRIDE: usize = 8;

pub(super) fn extract_surfaces(world: &mut WorldCore) -> usize {
    world.render.surface_buffer.clear();

    for id in world.surfaces.ids() {
        let Some(model) = world.surfaces.get(id) else {
            continue;
        };
        world.render.surface_buffer.extend_from_slice(&[
            model.id as f32,
            model.width,
            model.depth,
            model.thickness,
            model.local_position.x,
            model.local_position.y,
            model.local_position.z,
            if model.visible { 1.0 } else { 0.0 },
        ]);
    }

    world.render.surface_buffer.len() / SURFACE_STRIDE
}

pub(super) fn extract_bodies(world: &mut WorldCore) -> usize {
    world.render.body_buffer.clear();

    let mut movables: Vec<_> = world
        .physics
        .bodies()
        .iter()
        .filter(|b| b.category == BodyCategory::Movable)
        .collect();
    movables.sort_unstable_by_key(|b| b.id);

    for body in movables {
        world.render.body_buffer.extend_from_slice(&[
            body.id as f32,
            f32::from(body.category.code()),
            body.position.x,
            body.position.y,
            body.position.z,
            body.orientation.x,
            body.orientation.y,
            body.orientation.z,
        ]);
    }

    world.render.body_buffer.len() / BODY_STRIDE
}
