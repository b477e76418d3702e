use std::collections::HashSet;

use crate::core::math::Vec3;
use crate::core::utils::log;
use crate::domain::category::{BodyCategory, CategorySet};
use crate::domain::settings::{BoundarySettings, SpawnSettings};

use super::body::{BodyId, BodyKind, RigidBody};
use super::collision::{aabb_overlap, resolve_against_fixed, resolve_dynamic_pair};
use super::contact::{pair_key, ContactEvent};

/// Clamp to keep cost bounded and avoid tunneling
const MAX_SPEED: f32 = 20.0;
const MAX_SPIN: f32 = 50.0;

/// Owns every rigid body plus the single out-of-bounds boundary catcher.
///
/// All mutation happens on the update thread; stepping is a bounded,
/// synchronous sweep over the current body set (O(10-100) bodies, so the
/// naive pair scan is fine).
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    next_id: BodyId,
    boundary_id: BodyId,
    gravity_y: f32,
    spawn_settings: SpawnSettings,
    /// Pairs currently in contact, keyed (low id, high id); lets a
    /// contact be reported once when it forms instead of every frame
    touching: HashSet<(BodyId, BodyId)>,
}

impl PhysicsWorld {
    /// Create the world with its boundary body in place.
    ///
    /// The boundary sits far below anything the tracker will ever
    /// report and contact-tests only against Movable bodies: whatever
    /// touches it has fallen out of the world.
    pub fn new(gravity_y: f32, spawn_settings: SpawnSettings, boundary: &BoundarySettings) -> Self {
        let mut world = Self {
            bodies: Vec::new(),
            next_id: 1,
            boundary_id: 0,
            gravity_y,
            spawn_settings,
            touching: HashSet::new(),
        };

        let id = world.allocate_id();
        world.bodies.push(RigidBody::new_kinematic(
            id,
            BodyCategory::Boundary,
            Vec3::new(0.0, boundary.depth, 0.0),
            Vec3::new(
                boundary.half_extent_x,
                boundary.half_extent_y,
                boundary.half_extent_z,
            ),
            CategorySet::of(&[BodyCategory::Movable]),
        ));
        world.boundary_id = id;
        world
    }

    fn allocate_id(&mut self) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Spawn a dynamic Movable cube above `position`.
    ///
    /// The cube starts one clearance above the hit point and free-falls
    /// onto whatever is underneath. Non-finite positions are rejected.
    pub fn spawn(&mut self, position: Vec3) -> Option<BodyId> {
        if !position.is_finite() {
            log::warn("spawn dropped: non-finite position");
            return None;
        }

        let id = self.allocate_id();
        let start = position + Vec3::new(0.0, self.spawn_settings.clearance, 0.0);
        self.bodies.push(RigidBody::new_movable(
            id,
            start,
            self.spawn_settings.half_extent,
            self.spawn_settings.mass,
            self.spawn_settings.restitution,
        ));
        Some(id)
    }

    /// Insert a fixed contact source (used for detected-surface slabs)
    pub fn insert_kinematic(
        &mut self,
        category: BodyCategory,
        position: Vec3,
        half_extents: Vec3,
    ) -> BodyId {
        let id = self.allocate_id();
        self.bodies.push(RigidBody::new_kinematic(
            id,
            category,
            position,
            half_extents,
            CategorySet::empty(),
        ));
        id
    }

    /// Move/resize an existing kinematic body. No-op for unknown ids
    /// and for dynamic bodies.
    pub fn update_kinematic(&mut self, id: BodyId, position: Vec3, half_extents: Vec3) -> bool {
        match self.bodies.iter_mut().find(|b| b.id == id) {
            Some(body) if body.kind == BodyKind::Kinematic => {
                body.position = position;
                body.half_extents = half_extents;
                true
            }
            _ => false,
        }
    }

    /// Queue an instantaneous impulse on `id`, applied at a point
    /// `offset` from the body center (off-center imparts spin).
    ///
    /// Silently ignored when the body no longer exists; an explosion
    /// can race with out-of-bounds removal in the same tick.
    pub fn apply_impulse(&mut self, id: BodyId, impulse: Vec3, offset: Vec3) {
        if !impulse.is_finite() || !offset.is_finite() {
            return;
        }
        if let Some(body) = self.bodies.iter_mut().find(|b| b.id == id) {
            body.queue_impulse(impulse, offset);
        }
    }

    /// Remove a body. Unknown ids are a no-op; the boundary body is
    /// never removed.
    pub fn remove(&mut self, id: BodyId) -> bool {
        if id == self.boundary_id {
            return false;
        }
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.swap_remove(idx);
            self.touching.retain(|&(a, b)| a != id && b != id);
            return true;
        }
        false
    }

    /// Advance the simulation by `dt` seconds and report newly formed
    /// contacts.
    ///
    /// Overlap is sampled before penetration resolution, so a resting
    /// pair keeps counting as touching (it re-penetrates a little every
    /// frame under gravity) and its event fires only once.
    pub fn step(&mut self, dt: f32) -> Vec<ContactEvent> {
        if !dt.is_finite() || dt <= 0.0 {
            return Vec::new();
        }

        // Integrate dynamics
        for body in self.bodies.iter_mut() {
            body.flush_impulses();
            if body.kind != BodyKind::Dynamic {
                continue;
            }

            body.velocity.y += self.gravity_y * dt;
            body.velocity.x = body.velocity.x.clamp(-MAX_SPEED, MAX_SPEED);
            body.velocity.y = body.velocity.y.clamp(-MAX_SPEED, MAX_SPEED);
            body.velocity.z = body.velocity.z.clamp(-MAX_SPEED, MAX_SPEED);
            body.angular_velocity.x = body.angular_velocity.x.clamp(-MAX_SPIN, MAX_SPIN);
            body.angular_velocity.y = body.angular_velocity.y.clamp(-MAX_SPIN, MAX_SPIN);
            body.angular_velocity.z = body.angular_velocity.z.clamp(-MAX_SPIN, MAX_SPIN);

            body.position = body.position + body.velocity * dt;
            body.orientation = body.orientation + body.angular_velocity * dt;
        }

        // Collect overlapping pairs (skipping kinematic-kinematic)
        let mut overlaps: Vec<(usize, usize)> = Vec::new();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if self.bodies[i].kind == BodyKind::Kinematic
                    && self.bodies[j].kind == BodyKind::Kinematic
                {
                    continue;
                }
                if aabb_overlap(&self.bodies[i], &self.bodies[j]) {
                    overlaps.push((i, j));
                }
            }
        }

        // Report contacts that formed this step and pass the contact
        // mask of either side
        let mut events = Vec::new();
        let mut still_touching = HashSet::with_capacity(overlaps.len());
        for &(i, j) in &overlaps {
            let (a, b) = (&self.bodies[i], &self.bodies[j]);
            let key = pair_key(a.id, b.id);
            still_touching.insert(key);

            let wants = a.contact_mask.contains(b.category) || b.contact_mask.contains(a.category);
            if wants && !self.touching.contains(&key) {
                events.push(ContactEvent {
                    body_a: a.id,
                    body_b: b.id,
                    category_a: a.category,
                    category_b: b.category,
                });
            }
        }
        self.touching = still_touching;

        // Resolve penetrations
        for &(i, j) in &overlaps {
            let (left, right) = self.bodies.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];
            match (a.kind, b.kind) {
                (BodyKind::Dynamic, BodyKind::Kinematic) => resolve_against_fixed(a, b),
                (BodyKind::Kinematic, BodyKind::Dynamic) => resolve_against_fixed(b, a),
                (BodyKind::Dynamic, BodyKind::Dynamic) => resolve_dynamic_pair(a, b),
                (BodyKind::Kinematic, BodyKind::Kinematic) => {}
            }
        }

        events
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        if gravity_y.is_finite() {
            self.gravity_y = gravity_y;
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn boundary_id(&self) -> BodyId {
        self.boundary_id
    }

    /// Every body, boundary and surface colliders included
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Placed objects only
    pub fn movable_count(&self) -> usize {
        self.bodies
            .iter()
            .filter(|b| b.category == BodyCategory::Movable)
            .count()
    }

    /// Snapshot of (id, position) for every dynamic Movable body; the
    /// explosion engine iterates this while mutating the world through
    /// apply_impulse
    pub fn movable_positions(&self) -> Vec<(BodyId, Vec3)> {
        self.bodies
            .iter()
            .filter(|b| b.is_dynamic() && b.category == BodyCategory::Movable)
            .map(|b| (b.id, b.position))
            .collect()
    }
}
