//! World core - single-threaded orchestration of tracking and physics
//!
//! Everything mutates on one logical update thread: the AR session
//! delivers anchor events directly, user interactions are queued as
//! commands and drained at the start of the next step, and the
//! renderer reads packed transfer buffers after each step. Because of
//! that single-writer discipline nothing here needs a lock.
//!
//! Surface lifecycle is in systems/surfaces, body simulation in
//! systems/physics, blast impulses in systems/explosion and
//! out-of-bounds cleanup in systems/boundary. This module only wires
//! them together.

use std::collections::HashMap;

use crate::core::math::Vec3;
use crate::domain::anchor::{AnchorId, SurfaceAnchor};
use crate::domain::settings::SimSettings;
use crate::explosion::ExplosionEngine;
use crate::physics::{BodyId, PhysicsWorld};
use crate::surfaces::SurfaceRegistry;

#[path = "anchors/anchors.rs"]
mod anchors;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::World;
pub use render_extract::{BODY_STRIDE, SURFACE_STRIDE};

use commands::Command;

pub(crate) struct RenderBuffers {
    pub(crate) surface_buffer: Vec<f32>,
    pub(crate) body_buffer: Vec<f32>,
}

/// The engine core: surface registry + physics world + pending commands
pub struct WorldCore {
    settings: SimSettings,
    surfaces: SurfaceRegistry,
    physics: PhysicsWorld,
    explosion: ExplosionEngine,
    /// anchor id -> kinematic collider mirroring that surface
    surface_colliders: HashMap<AnchorId, BodyId>,
    /// Interaction commands handed off by the UI layer, drained on the
    /// update thread at the start of each step
    pending: Vec<Command>,
    frame: u64,
    /// Movable bodies discarded by the boundary filter this session
    removed_out_of_bounds: u64,

    render: RenderBuffers,
}

impl WorldCore {
    /// Create a world with default tuning
    pub fn new() -> Self {
        init::create_world_core(SimSettings::default())
    }

    pub fn with_settings(settings: SimSettings) -> Self {
        init::create_world_core(settings)
    }

    /// Parse a settings bundle and rebuild the world around it.
    /// The running session is discarded, as on a content-bundle load.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    /// Echo the active settings as JSON (debug UI)
    pub fn settings_json(&self) -> String {
        settings::settings_json(self)
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        settings::set_gravity(self, gravity_y);
    }

    /// Throw the whole session away and start clean with the current
    /// settings
    pub fn reset(&mut self) {
        *self = init::create_world_core(self.settings.clone());
    }

    // === TRACKING EVENTS ===

    /// A new surface was detected
    pub fn on_anchor_added(&mut self, anchor: &SurfaceAnchor) -> bool {
        anchors::on_anchor_added(self, anchor)
    }

    /// An existing surface estimate was refined
    pub fn on_anchor_updated(&mut self, anchor: &SurfaceAnchor) -> bool {
        anchors::on_anchor_updated(self, anchor)
    }

    /// A surface was merged away or lost
    pub fn on_anchor_removed(&mut self, id: AnchorId) -> bool {
        anchors::on_anchor_removed(self, id)
    }

    // === INTERACTION ===

    /// Drop a cube onto the hit point. Runs immediately (the tap
    /// handler already lives on the update thread) and returns the new
    /// body id.
    pub fn place_object(&mut self, position: Vec3) -> Option<BodyId> {
        commands::place_object(self, position)
    }

    /// Queue an explosion at a hit point for the next step
    pub fn request_explosion(&mut self, hit: Vec3) -> bool {
        commands::request_explosion(self, hit)
    }

    /// Queue hiding every surface; detection stays suspended for the
    /// rest of the session
    pub fn request_hide_surfaces(&mut self) {
        commands::request_hide_surfaces(self);
    }

    /// Advance the world by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    // === QUERIES ===

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Placed cubes currently alive
    pub fn movable_count(&self) -> usize {
        self.physics.movable_count()
    }

    /// Every physics body, boundary and surface colliders included
    pub fn body_count(&self) -> usize {
        self.physics.body_count()
    }

    pub fn detection_suspended(&self) -> bool {
        self.surfaces.suspended()
    }

    pub fn out_of_bounds_removed(&self) -> u64 {
        self.removed_out_of_bounds
    }

    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    // === RENDER EXTRACT ===

    /// Refresh the surface transfer buffer; returns the entry count
    pub fn extract_surfaces(&mut self) -> usize {
        render_extract::extract_surfaces(self)
    }

    pub fn surface_buffer_ptr(&self) -> *const f32 {
        self.render.surface_buffer.as_ptr()
    }

    pub fn surface_buffer_len(&self) -> usize {
        self.render.surface_buffer.len()
    }

    /// Refresh the body transfer buffer; returns the entry count
    pub fn extract_bodies(&mut self) -> usize {
        render_extract::extract_bodies(self)
    }

    pub fn body_buffer_ptr(&self) -> *const f32 {
        self.render.body_buffer.as_ptr()
    }

    pub fn body_buffer_len(&self) -> usize {
        self.render.body_buffer.len()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
