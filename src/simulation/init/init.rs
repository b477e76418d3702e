use std::collections::HashMap;

use crate::domain::settings::SimSettings;
use crate::explosion::ExplosionEngine;
use crate::physics::PhysicsWorld;
use crate::surfaces::SurfaceRegistry;

use super::{RenderBuffers, WorldCore};

pub(super) fn create_world_core(settings: SimSettings) -> WorldCore {
    WorldCore {
        surfaces: SurfaceRegistry::new(settings.surface.clone()),
        physics: PhysicsWorld::new(
            settings.gravity_y,
            settings.spawn.clone(),
            &settings.boundary,
        ),
        explosion: ExplosionEngine::new(settings.explosion.clone()),
        surface_colliders: HashMap::new(),
        pending: Vec::new(),
        frame: 0,
        removed_out_of_bounds: 0,
        render: RenderBuffers {
            surface_buffer: Vec::new(),
            body_buffer: Vec::new(),
        },
        settings,
    }
}
