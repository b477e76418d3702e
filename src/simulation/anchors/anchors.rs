//! Anchor event application
//!
//! Each registry mutation is mirrored into the physics world so placed
//! cubes can land on detected surfaces: one kinematic Surface collider
//! per live anchor, tracked in the surface_colliders map.

use crate::domain::anchor::{AnchorId, SurfaceAnchor};
use crate::domain::category::BodyCategory;

use super::WorldCore;

pub(super) fn on_anchor_added(world: &mut WorldCore, anchor: &SurfaceAnchor) -> bool {
    let Some(model) = world.surfaces.on_anchor_added(anchor) else {
        return false;
    };
    let position = model.world_position;
    let half_extents = model.half_extents();

    let body_id = world
        .physics
        .insert_kinematic(BodyCategory::Surface, position, half_extents);
    world.surface_colliders.insert(anchor.id, body_id);
    true
}

pub(super) fn on_anchor_updated(world: &mut WorldCore, anchor: &SurfaceAnchor) -> bool {
    if !world.surfaces.on_anchor_updated(anchor) {
        return false;
    }

    // The model was rebuilt in place; move its collider to match
    let Some(model) = world.surfaces.get(anchor.id) else {
        return false;
    };
    let position = model.world_position;
    let half_extents = model.half_extents();

    if let Some(&body_id) = world.surface_colliders.get(&anchor.id) {
        world.physics.update_kinematic(body_id, position, half_extents);
    }
    true
}

pub(super) fn on_anchor_removed(world: &mut WorldCore, id: AnchorId) -> bool {
    let removed = world.surfaces.on_anchor_removed(id);
    if let Some(body_id) = world.surface_colliders.remove(&id) {
        world.physics.remove(body_id);
    }
    removed
}
