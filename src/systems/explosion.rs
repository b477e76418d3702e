//! Distance-weighted explosion impulses
//!
//! The blast origin and each body's current position fully determine
//! the output; there is no hidden state, so a detonation is exactly
//! reproducible given the same inputs.

use crate::core::math::Vec3;
use crate::domain::settings::ExplosionSettings;
use crate::physics::PhysicsWorld;

/// Computes an impulse for every dynamic body near an origin and
/// queues it on the physics world.
pub struct ExplosionEngine {
    settings: ExplosionSettings,
}

impl ExplosionEngine {
    pub fn new(settings: ExplosionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExplosionSettings {
        &self.settings
    }

    /// Impulse for a single body at `position`, or None when the body
    /// is out of range.
    ///
    /// Falloff is quadratic in (max_radius - distance): a body right
    /// next to the origin is hit much harder than one near the edge of
    /// the radius.
    pub fn impulse_for(&self, origin: Vec3, position: Vec3) -> Option<Vec3> {
        let displacement = position - origin;
        let distance = displacement.length();
        if distance >= self.settings.max_radius {
            return None;
        }

        let falloff = self.settings.max_radius - distance;
        let magnitude = falloff * falloff * self.settings.force_scale;

        // A body sitting exactly on the origin has no direction to be
        // pushed in; kick it straight up instead of dividing by zero.
        let direction = if distance > f32::EPSILON {
            displacement * (1.0 / distance)
        } else {
            Vec3::new(0.0, 1.0, 0.0)
        };

        Some(direction * magnitude)
    }

    /// Apply the blast to every dynamic Movable body in range.
    ///
    /// Impulses land off-center so affected cubes tumble away instead
    /// of sliding. Returns how many bodies were affected.
    pub fn detonate(&self, origin: Vec3, world: &mut PhysicsWorld) -> usize {
        if !origin.is_finite() {
            return 0;
        }

        let spin = self.settings.spin_offset;
        let offset = Vec3::new(spin, spin, spin);

        let mut affected = 0;
        for (id, position) in world.movable_positions() {
            if let Some(impulse) = self.impulse_for(origin, position) {
                world.apply_impulse(id, impulse, offset);
                affected += 1;
            }
        }
        affected
    }
}
