use wasm_bindgen::prelude::*;

use crate::core::math::Vec3;
use crate::domain::anchor::SurfaceAnchor;

use super::{WorldCore, BODY_STRIDE, SURFACE_STRIDE};

/// Map a settings error string onto the facade's `JsValue` error channel.
/// On wasm the message is carried across to JS; on native test targets the
/// `JsValue` string constructor is unavailable, so we fall back to a plain
/// error marker (the `Err` outcome is what callers observe either way).
#[cfg(target_arch = "wasm32")]
fn settings_err(e: String) -> JsValue {
    JsValue::from_str(&e)
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_err(_e: String) -> JsValue {
    JsValue::UNDEFINED
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    /// Load a JSON settings bundle and rebuild the world around it
    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(settings_err)?;
        Ok(())
    }

    /// Echo the active settings as JSON (debug UI)
    pub fn get_settings_json(&self) -> String {
        self.core.settings_json()
    }

    pub fn set_gravity(&mut self, gravity_y: f32) {
        self.core.set_gravity(gravity_y);
    }

    /// Discard the session and start clean with the current settings
    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === TRACKING EVENTS ===

    /// A new plane anchor was detected
    #[allow(clippy::too_many_arguments)]
    pub fn anchor_added(
        &mut self,
        id: u32,
        origin_x: f32,
        origin_y: f32,
        origin_z: f32,
        center_x: f32,
        center_y: f32,
        center_z: f32,
        extent_x: f32,
        extent_z: f32,
    ) -> bool {
        let anchor = SurfaceAnchor::new(
            id,
            Vec3::new(origin_x, origin_y, origin_z),
            Vec3::new(center_x, center_y, center_z),
            extent_x,
            extent_z,
        );
        self.core.on_anchor_added(&anchor)
    }

    /// An existing plane anchor's estimate was refined
    #[allow(clippy::too_many_arguments)]
    pub fn anchor_updated(
        &mut self,
        id: u32,
        origin_x: f32,
        origin_y: f32,
        origin_z: f32,
        center_x: f32,
        center_y: f32,
        center_z: f32,
        extent_x: f32,
        extent_z: f32,
    ) -> bool {
        let anchor = SurfaceAnchor::new(
            id,
            Vec3::new(origin_x, origin_y, origin_z),
            Vec3::new(center_x, center_y, center_z),
            extent_x,
            extent_z,
        );
        self.core.on_anchor_updated(&anchor)
    }

    /// A plane anchor was merged away or lost
    pub fn anchor_removed(&mut self, id: u32) -> bool {
        self.core.on_anchor_removed(id)
    }

    // === INTERACTION ===

    /// Drop a cube onto a hit point
    /// Returns the new body id, or 0 if the position was rejected
    pub fn place_object(&mut self, x: f32, y: f32, z: f32) -> u32 {
        self.core.place_object(Vec3::new(x, y, z)).unwrap_or(0)
    }

    /// Queue an explosion at a hit point for the next step
    pub fn request_explosion(&mut self, x: f32, y: f32, z: f32) -> bool {
        self.core.request_explosion(Vec3::new(x, y, z))
    }

    /// Queue hiding every surface; detection stays suspended for the
    /// rest of the session
    pub fn request_hide_surfaces(&mut self) {
        self.core.request_hide_surfaces();
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    // === QUERIES ===

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn surface_count(&self) -> usize {
        self.core.surface_count()
    }

    /// Placed cubes currently alive
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.movable_count()
    }

    pub fn detection_suspended(&self) -> bool {
        self.core.detection_suspended()
    }

    /// Cubes discarded after falling out of the tracked volume
    pub fn out_of_bounds_removed(&self) -> u64 {
        self.core.out_of_bounds_removed()
    }

    pub fn body_exists(&self, id: u32) -> bool {
        self.core.physics().body(id).is_some()
    }

    /// Body position component; 0.0 for unknown ids
    pub fn get_body_x(&self, id: u32) -> f32 {
        self.core.physics().body(id).map_or(0.0, |b| b.position.x)
    }

    pub fn get_body_y(&self, id: u32) -> f32 {
        self.core.physics().body(id).map_or(0.0, |b| b.position.y)
    }

    pub fn get_body_z(&self, id: u32) -> f32 {
        self.core.physics().body(id).map_or(0.0, |b| b.position.z)
    }

    pub fn surface_exists(&self, id: u32) -> bool {
        self.core.surfaces().get(id).is_some()
    }

    /// Surface slab width; 0.0 for unknown ids
    pub fn get_surface_width(&self, id: u32) -> f32 {
        self.core.surfaces().get(id).map_or(0.0, |m| m.width)
    }

    pub fn get_surface_depth(&self, id: u32) -> f32 {
        self.core.surfaces().get(id).map_or(0.0, |m| m.depth)
    }

    pub fn surface_visible(&self, id: u32) -> bool {
        self.core.surfaces().get(id).is_some_and(|m| m.visible)
    }

    // === RENDER EXTRACT ===

    /// Refresh the surface transfer buffer; returns the entry count
    pub fn extract_surfaces(&mut self) -> usize {
        self.core.extract_surfaces()
    }

    /// Get pointer to the surface transfer buffer (for JS rendering)
    pub fn surfaces_ptr(&self) -> *const f32 {
        self.core.surface_buffer_ptr()
    }

    pub fn surfaces_len(&self) -> usize {
        self.core.surface_buffer_len()
    }

    pub fn surface_stride(&self) -> usize {
        SURFACE_STRIDE
    }

    /// Refresh the body transfer buffer; returns the entry count
    pub fn extract_bodies(&mut self) -> usize {
        self.core.extract_bodies()
    }

    /// Get pointer to the body transfer buffer (for JS rendering)
    pub fn bodies_ptr(&self) -> *const f32 {
        self.core.body_buffer_ptr()
    }

    pub fn bodies_len(&self) -> usize {
        self.core.body_buffer_len()
    }

    pub fn body_stride(&self) -> usize {
        BODY_STRIDE
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
