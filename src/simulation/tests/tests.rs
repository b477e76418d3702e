use super::*;

use crate::boundary::BoundaryFilter;
use crate::core::math::Vec3;
use crate::domain::anchor::SurfaceAnchor;
use crate::domain::category::{BodyCategory, CategorySet};
use crate::domain::settings::{BoundarySettings, ExplosionSettings, SpawnSettings};
use crate::explosion::ExplosionEngine;
use crate::physics::{ContactEvent, PhysicsWorld};

const DT: f32 = 1.0 / 60.0;

fn flat_anchor(id: u32, extent: f32) -> SurfaceAnchor {
    SurfaceAnchor::new(id, Vec3::zero(), Vec3::zero(), extent, extent)
}

#[test]
fn anchor_lifecycle_keeps_registry_and_colliders_in_sync() {
    let mut world = WorldCore::new();
    // Boundary body only
    assert_eq!(world.body_count(), 1);

    assert!(world.on_anchor_added(&flat_anchor(1, 1.0)));
    assert!(world.on_anchor_added(&flat_anchor(2, 0.5)));
    assert_eq!(world.surface_count(), 2);
    assert_eq!(world.body_count(), 3);

    // Duplicate add is a logged no-op
    assert!(!world.on_anchor_added(&flat_anchor(1, 2.0)));
    assert_eq!(world.surface_count(), 2);
    assert_eq!(world.body_count(), 3);

    // Update for an unknown id is silently ignored and creates nothing
    assert!(!world.on_anchor_updated(&flat_anchor(9, 1.0)));
    assert_eq!(world.surface_count(), 2);

    assert!(world.on_anchor_removed(2));
    assert_eq!(world.surface_count(), 1);
    assert_eq!(world.body_count(), 2);

    // Removing again is a no-op
    assert!(!world.on_anchor_removed(2));
    assert_eq!(world.surface_count(), 1);
}

#[test]
fn anchor_update_recomputes_geometry_in_place() {
    let mut world = WorldCore::new();
    let first = SurfaceAnchor::new(1, Vec3::zero(), Vec3::new(0.1, 0.0, 0.2), 1.0, 2.0);
    assert!(world.on_anchor_added(&first));

    let refined = SurfaceAnchor::new(1, Vec3::zero(), Vec3::new(0.5, 0.0, 0.5), 3.0, 4.0);
    assert!(world.on_anchor_updated(&refined));

    let model = world.surfaces.get(1).expect("model should exist");
    assert_eq!(model.id, 1);
    assert_eq!(model.width, 3.0);
    assert_eq!(model.depth, 4.0);
    // Position is rebuilt from the new center, half a thickness down
    let half_thickness = world.settings.surface.thickness * 0.5;
    assert_eq!(model.local_position.x, 0.5);
    assert_eq!(model.local_position.y, -half_thickness);
    assert_eq!(model.local_position.z, 0.5);
    assert_eq!(world.surface_count(), 1);
}

#[test]
fn anchor_remove_then_readd_builds_fresh_geometry() {
    let mut world = WorldCore::new();
    assert!(world.on_anchor_added(&flat_anchor(3, 2.0)));
    assert!(world.on_anchor_removed(3));
    assert!(world.on_anchor_added(&flat_anchor(3, 1.0)));

    let model = world.surfaces.get(3).expect("model should exist");
    assert_eq!(model.width, 1.0);
    assert_eq!(model.depth, 1.0);
}

#[test]
fn non_finite_anchors_are_rejected_at_the_boundary() {
    let mut world = WorldCore::new();

    let bad = SurfaceAnchor::new(1, Vec3::zero(), Vec3::new(f32::NAN, 0.0, 0.0), 1.0, 1.0);
    assert!(!world.on_anchor_added(&bad));
    assert_eq!(world.surface_count(), 0);

    assert!(world.on_anchor_added(&flat_anchor(1, 1.0)));
    let bad_update = SurfaceAnchor::new(1, Vec3::zero(), Vec3::zero(), f32::INFINITY, 1.0);
    assert!(!world.on_anchor_updated(&bad_update));
    let model = world.surfaces.get(1).expect("model should exist");
    assert_eq!(model.width, 1.0);
}

#[test]
fn tiny_extents_clamp_to_a_non_degenerate_slab() {
    let mut world = WorldCore::new();
    assert!(world.on_anchor_added(&flat_anchor(1, 0.0)));
    let model = world.surfaces.get(1).expect("model should exist");
    assert!(model.width > 0.0);
    assert!(model.depth > 0.0);
}

#[test]
fn hide_surfaces_is_sticky_for_the_session() {
    let mut world = WorldCore::new();
    assert!(world.on_anchor_added(&flat_anchor(1, 1.0)));
    assert!(world.surfaces.get(1).expect("model").visible);

    world.request_hide_surfaces();
    world.step(DT);

    assert!(world.detection_suspended());
    assert!(!world.surfaces.get(1).expect("model").visible);

    // Updates never re-show a hidden model
    assert!(world.on_anchor_updated(&flat_anchor(1, 2.0)));
    assert!(!world.surfaces.get(1).expect("model").visible);

    // A straggler anchor arriving after suspension starts hidden
    assert!(world.on_anchor_added(&flat_anchor(2, 1.0)));
    assert!(!world.surfaces.get(2).expect("model").visible);
}

#[test]
fn place_object_spawns_above_the_hit_point() {
    let mut world = WorldCore::new();
    let id = world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");
    assert_ne!(id, 0);
    assert_eq!(world.movable_count(), 1);

    let body = world.physics.body(id).expect("body should exist");
    let clearance = world.settings.spawn.clearance;
    assert_eq!(body.position.y, 1.0 + clearance);
    assert_eq!(body.category, BodyCategory::Movable);
    assert!(body.is_dynamic());
}

#[test]
fn place_object_rejects_non_finite_positions() {
    let mut world = WorldCore::new();
    assert!(world.place_object(Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
    assert!(world
        .place_object(Vec3::new(0.0, f32::INFINITY, 0.0))
        .is_none());
    assert_eq!(world.movable_count(), 0);
}

#[test]
fn stale_body_references_are_tolerated() {
    let mut world = WorldCore::new();
    let boundary_id = world.physics.boundary_id();

    // Impulse and removal against unknown ids must be quiet no-ops
    world
        .physics
        .apply_impulse(999, Vec3::new(0.0, 1.0, 0.0), Vec3::zero());
    assert!(!world.physics.remove(999));

    // The boundary body refuses removal
    assert!(!world.physics.remove(boundary_id));
    assert!(world.physics.body(boundary_id).is_some());
}

#[test]
fn explosion_kernel_matches_the_quadratic_falloff() {
    let engine = ExplosionEngine::new(ExplosionSettings::default());

    // Body 0.1 above the origin: (2 - 0.1)^2 * 2 = 7.22, straight up
    let impulse = engine
        .impulse_for(Vec3::new(0.0, 0.9, 0.0), Vec3::new(0.0, 1.0, 0.0))
        .expect("in range");
    assert!((impulse.length() - 7.22).abs() < 1e-3);
    assert!(impulse.y > 0.0);
    assert!(impulse.x.abs() < 1e-6);
    assert!(impulse.z.abs() < 1e-6);

    // At or beyond the radius nothing happens
    assert!(engine
        .impulse_for(Vec3::zero(), Vec3::new(2.0, 0.0, 0.0))
        .is_none());
    assert!(engine
        .impulse_for(Vec3::zero(), Vec3::new(0.0, -5.0, 0.0))
        .is_none());
}

#[test]
fn explosion_at_zero_distance_kicks_straight_up() {
    let engine = ExplosionEngine::new(ExplosionSettings::default());
    let origin = Vec3::new(0.3, 0.7, -0.2);

    let impulse = engine.impulse_for(origin, origin).expect("in range");
    // Maximum magnitude, no NaN, direction pinned to +y
    assert!((impulse.y - 8.0).abs() < 1e-4);
    assert_eq!(impulse.x, 0.0);
    assert_eq!(impulse.z, 0.0);
    assert!(impulse.is_finite());
}

#[test]
fn explosion_is_deterministic() {
    let engine = ExplosionEngine::new(ExplosionSettings::default());
    let origin = Vec3::new(0.1, 0.2, 0.3);
    let position = Vec3::new(0.4, 0.5, 0.6);

    let first = engine.impulse_for(origin, position).expect("in range");
    let second = engine.impulse_for(origin, position).expect("in range");
    assert_eq!(first, second);
}

#[test]
fn explosion_only_reaches_bodies_inside_the_radius() {
    let mut world = WorldCore::new();
    let near = world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");
    let far = world.place_object(Vec3::new(5.0, 1.0, 0.0)).expect("spawn");

    // Hit point 0.1 above the blast origin the core derives
    world.request_explosion(Vec3::new(0.0, 1.5, 0.0));
    world.step(DT);

    let near_body = world.physics.body(near).expect("near body");
    let far_body = world.physics.body(far).expect("far body");
    // Near cube got (2 - 0.1)^2 * 2 / mass upward, minus one gravity tick
    assert!(near_body.velocity.y > 3.0);
    // Far cube only felt gravity
    assert!(far_body.velocity.y < 0.0);
    assert_eq!(far_body.velocity.x, 0.0);
}

#[test]
fn off_center_impulses_impart_spin() {
    let mut world = WorldCore::new();
    let id = world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");

    world.request_explosion(Vec3::new(0.0, 1.5, 0.0));
    world.step(DT);

    let body = world.physics.body(id).expect("body");
    let spin = body.angular_velocity;
    assert!(spin.length() > 0.0);

    world.step(DT);
    let body = world.physics.body(id).expect("body");
    assert!(body.orientation.length() > 0.0);
}

#[test]
fn contact_is_reported_once_per_formed_pair() {
    // Dead cubes: no bounce, so the pair stays continuously in touch
    let spawn = SpawnSettings {
        restitution: 0.0,
        ..SpawnSettings::default()
    };
    let mut physics = PhysicsWorld::new(-9.81, spawn, &BoundarySettings::default());
    physics.spawn(Vec3::new(0.0, -9.0, 0.0)).expect("spawn");

    let mut boundary_contacts = 0;
    for _ in 0..120 {
        let events = physics.step(DT);
        boundary_contacts += events
            .iter()
            .filter(|e| e.is_pair(BodyCategory::Boundary, BodyCategory::Movable))
            .count();
    }
    assert_eq!(boundary_contacts, 1);
}

#[test]
fn fallen_bodies_are_removed_after_touching_the_boundary() {
    let mut world = WorldCore::new();
    let before = world.movable_count();

    // No surface anywhere below: the cube free-falls out of the world
    let id = world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");
    assert_eq!(world.movable_count(), before + 1);

    for _ in 0..300 {
        world.step(DT);
    }

    assert_eq!(world.movable_count(), before);
    assert_eq!(world.out_of_bounds_removed(), 1);
    assert!(world.physics.body(id).is_none());
    // The boundary survived its own filter
    assert!(world.physics.body(world.physics.boundary_id()).is_some());
}

#[test]
fn placed_cube_comes_to_rest_on_a_detected_surface() {
    let mut world = WorldCore::new();
    assert!(world.on_anchor_added(&flat_anchor(1, 1.0)));

    let id = world.place_object(Vec3::zero()).expect("spawn");
    for _ in 0..600 {
        world.step(DT);
    }

    // Still alive, resting just above the slab top instead of falling
    // through to the boundary
    assert_eq!(world.movable_count(), 1);
    assert_eq!(world.out_of_bounds_removed(), 0);
    let body = world.physics.body(id).expect("body");
    assert!(body.position.y > 0.0);
    assert!(body.position.y < 0.2);
}

#[test]
fn boundary_filter_ignores_other_category_pairs() {
    let mut world = WorldCore::new();
    let id = world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");

    let event = ContactEvent {
        body_a: id,
        body_b: 42,
        category_a: BodyCategory::Movable,
        category_b: BodyCategory::Surface,
    };
    let removed = BoundaryFilter::process(&[event], &mut world.physics);
    assert_eq!(removed, 0);
    assert!(world.physics.body(id).is_some());
}

#[test]
fn boundary_filter_removes_the_movable_half_in_either_order() {
    let mut world = WorldCore::new();
    let boundary_id = world.physics.boundary_id();

    let first = world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");
    let second = world.place_object(Vec3::new(1.0, 1.0, 0.0)).expect("spawn");

    let events = [
        ContactEvent {
            body_a: boundary_id,
            body_b: first,
            category_a: BodyCategory::Boundary,
            category_b: BodyCategory::Movable,
        },
        ContactEvent {
            body_a: second,
            body_b: boundary_id,
            category_a: BodyCategory::Movable,
            category_b: BodyCategory::Boundary,
        },
    ];
    let removed = BoundaryFilter::process(&events, &mut world.physics);
    assert_eq!(removed, 2);
    assert!(world.physics.body(first).is_none());
    assert!(world.physics.body(second).is_none());
    assert!(world.physics.body(boundary_id).is_some());
}

#[test]
fn reset_discards_the_session_but_keeps_settings() {
    let mut world = WorldCore::new();
    world.set_gravity(-3.0);
    assert!(world.on_anchor_added(&flat_anchor(1, 1.0)));
    world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");
    world.step(DT);

    world.reset();
    assert_eq!(world.frame(), 0);
    assert_eq!(world.surface_count(), 0);
    assert_eq!(world.movable_count(), 0);
    assert_eq!(world.settings.gravity_y, -3.0);
}

#[test]
fn non_positive_dt_is_a_no_op_step() {
    let mut world = WorldCore::new();
    let id = world.place_object(Vec3::new(0.0, 1.0, 0.0)).expect("spawn");
    let before = world.physics.body(id).expect("body").position;

    world.step(0.0);
    world.step(-1.0);
    world.step(f32::NAN);

    let after = world.physics.body(id).expect("body").position;
    assert_eq!(before, after);
}

#[test]
fn category_sets_intersect_by_membership() {
    let boundary_mask = CategorySet::of(&[BodyCategory::Movable]);
    assert!(boundary_mask.contains(BodyCategory::Movable));
    assert!(!boundary_mask.contains(BodyCategory::Surface));

    let movables = CategorySet::of(&[BodyCategory::Movable, BodyCategory::Surface]);
    assert!(boundary_mask.intersects(&movables));
    assert!(!boundary_mask.intersects(&CategorySet::of(&[BodyCategory::Boundary])));
    assert!(CategorySet::empty().is_empty());
}
