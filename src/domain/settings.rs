//! Simulation tuning, deserialized from a JSON settings bundle
//!
//! The JS host can ship a partial bundle; anything omitted keeps its
//! default. Loading a bundle rebuilds the world, so settings never
//! change under a live simulation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Gravity acceleration along world Y (negative = down)
    pub gravity_y: f32,
    pub spawn: SpawnSettings,
    pub explosion: ExplosionSettings,
    pub boundary: BoundarySettings,
    pub surface: SurfaceSettings,
}

/// Tuning for placed cubes
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Half edge length of a placed cube
    pub half_extent: f32,
    pub mass: f32,
    /// Cubes start this far above the hit point and free-fall onto the
    /// surface instead of spawning in contact with it
    pub clearance: f32,
    pub restitution: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionSettings {
    /// Bodies at or beyond this distance from the origin are unaffected
    pub max_radius: f32,
    /// Scale applied to the squared falloff
    pub force_scale: f32,
    /// How far the blast origin sits below the hit point, giving the
    /// impulses a net upward bias
    pub y_offset: f32,
    /// Impulses land this far off-center on each axis so cubes spin
    pub spin_offset: f32,
}

/// Geometry of the out-of-bounds catcher
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundarySettings {
    /// World Y of the catcher's center, well below any tracked surface
    pub depth: f32,
    pub half_extent_x: f32,
    pub half_extent_y: f32,
    pub half_extent_z: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Slab height of a surface model
    pub thickness: f32,
    /// Width/depth are clamped to at least this so box geometry never
    /// degenerates
    pub min_extent: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            gravity_y: -9.81,
            spawn: SpawnSettings::default(),
            explosion: ExplosionSettings::default(),
            boundary: BoundarySettings::default(),
            surface: SurfaceSettings::default(),
        }
    }
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            half_extent: 0.05,
            mass: 2.0,
            clearance: 0.5,
            restitution: 0.3,
        }
    }
}

impl Default for ExplosionSettings {
    fn default() -> Self {
        Self {
            max_radius: 2.0,
            force_scale: 2.0,
            y_offset: 0.1,
            spin_offset: 0.05,
        }
    }
}

impl Default for BoundarySettings {
    fn default() -> Self {
        Self {
            depth: -10.0,
            half_extent_x: 500.0,
            half_extent_y: 0.25,
            half_extent_z: 500.0,
        }
    }
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            thickness: 0.01,
            min_extent: 1e-4,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), String> {
        if !self.gravity_y.is_finite() {
            return Err("gravity_y must be finite".to_string());
        }
        if !(self.spawn.half_extent.is_finite() && self.spawn.half_extent > 0.0) {
            return Err("spawn.half_extent must be finite and positive".to_string());
        }
        if !(self.spawn.mass.is_finite() && self.spawn.mass > 0.0) {
            return Err("spawn.mass must be finite and positive".to_string());
        }
        if !(self.spawn.clearance.is_finite() && self.spawn.clearance >= 0.0) {
            return Err("spawn.clearance must be finite and non-negative".to_string());
        }
        if !(self.spawn.restitution.is_finite() && (0.0..=1.0).contains(&self.spawn.restitution)) {
            return Err("spawn.restitution must be within 0..=1".to_string());
        }
        if !(self.explosion.max_radius.is_finite() && self.explosion.max_radius > 0.0) {
            return Err("explosion.max_radius must be finite and positive".to_string());
        }
        if !(self.explosion.force_scale.is_finite() && self.explosion.force_scale >= 0.0) {
            return Err("explosion.force_scale must be finite and non-negative".to_string());
        }
        if !(self.explosion.y_offset.is_finite() && self.explosion.spin_offset.is_finite()) {
            return Err("explosion offsets must be finite".to_string());
        }
        if !self.boundary.depth.is_finite() {
            return Err("boundary.depth must be finite".to_string());
        }
        for (name, half) in [
            ("boundary.half_extent_x", self.boundary.half_extent_x),
            ("boundary.half_extent_y", self.boundary.half_extent_y),
            ("boundary.half_extent_z", self.boundary.half_extent_z),
        ] {
            if !(half.is_finite() && half > 0.0) {
                return Err(format!("{} must be finite and positive", name));
            }
        }
        if !(self.surface.thickness.is_finite() && self.surface.thickness > 0.0) {
            return Err("surface.thickness must be finite and positive".to_string());
        }
        if !(self.surface.min_extent.is_finite() && self.surface.min_extent > 0.0) {
            return Err("surface.min_extent must be finite and positive".to_string());
        }
        Ok(())
    }
}
