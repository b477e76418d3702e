use crate::core::math::Vec3;
use crate::domain::category::{BodyCategory, CategorySet};

/// Unique ID for a body within one PhysicsWorld (0 is never allocated)
pub type BodyId = u32;

/// How a body participates in the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Integrated every step; affected by gravity, impulses and contacts
    Dynamic,
    /// Never moves on its own; only a contact source
    Kinematic,
}

/// A physically simulated axis-aligned box
#[derive(Clone, Debug)]
pub struct RigidBody {
    pub id: BodyId,
    pub category: BodyCategory,
    pub kind: BodyKind,
    /// Categories this body wants contact events against
    pub contact_mask: CategorySet,
    /// Mass in kg; meaningless for kinematic bodies
    pub mass: f32,
    pub half_extents: Vec3,
    /// World position (center of mass)
    pub position: Vec3,
    pub velocity: Vec3,
    /// Orientation as XYZ Euler angles (radians); visual spin only,
    /// collision stays axis-aligned
    pub orientation: Vec3,
    pub angular_velocity: Vec3,
    /// Scalar moment of inertia for the spin response to off-center
    /// impulses
    pub moment_of_inertia: f32,
    /// Impulse accumulated since the last step
    pub pending_impulse: Vec3,
    /// Torque impulse accumulated since the last step
    pub pending_torque: Vec3,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl RigidBody {
    /// Create a placed, fully simulated cube
    pub fn new_movable(
        id: BodyId,
        position: Vec3,
        half_extent: f32,
        mass: f32,
        restitution: f32,
    ) -> Self {
        // Box inertia about any axis: m * (e² + e²) / 12 for edge e
        let edge = half_extent * 2.0;
        let moment = (mass * (edge * edge + edge * edge) / 12.0).max(1e-4);

        Self {
            id,
            category: BodyCategory::Movable,
            kind: BodyKind::Dynamic,
            contact_mask: CategorySet::empty(),
            mass: mass.max(1e-4),
            half_extents: Vec3::new(half_extent, half_extent, half_extent),
            position,
            velocity: Vec3::zero(),
            orientation: Vec3::zero(),
            angular_velocity: Vec3::zero(),
            moment_of_inertia: moment,
            pending_impulse: Vec3::zero(),
            pending_torque: Vec3::zero(),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Create a fixed contact source (surface slab or boundary catcher)
    pub fn new_kinematic(
        id: BodyId,
        category: BodyCategory,
        position: Vec3,
        half_extents: Vec3,
        contact_mask: CategorySet,
    ) -> Self {
        Self {
            id,
            category,
            kind: BodyKind::Kinematic,
            contact_mask,
            mass: 0.0,
            half_extents,
            position,
            velocity: Vec3::zero(),
            orientation: Vec3::zero(),
            angular_velocity: Vec3::zero(),
            moment_of_inertia: 1.0,
            pending_impulse: Vec3::zero(),
            pending_torque: Vec3::zero(),
            restitution: 0.0,
        }
    }

    /// Queue an impulse applied at `offset` from the center.
    ///
    /// An off-center application point also queues the torque it
    /// produces, so the body picks up spin as well as translation.
    pub fn queue_impulse(&mut self, impulse: Vec3, offset: Vec3) {
        self.pending_impulse = self.pending_impulse + impulse;
        self.pending_torque = self.pending_torque + offset.cross(impulse);
    }

    /// Fold queued impulses into the velocities. Called once per step;
    /// kinematic bodies just discard whatever was queued on them.
    pub fn flush_impulses(&mut self) {
        if self.kind == BodyKind::Dynamic {
            self.velocity = self.velocity + self.pending_impulse * (1.0 / self.mass);
            self.angular_velocity =
                self.angular_velocity + self.pending_torque * (1.0 / self.moment_of_inertia);
        }
        self.pending_impulse = Vec3::zero();
        self.pending_torque = Vec3::zero();
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    pub fn aabb_min(&self) -> Vec3 {
        self.position - self.half_extents
    }

    pub fn aabb_max(&self) -> Vec3 {
        self.position + self.half_extents
    }
}
