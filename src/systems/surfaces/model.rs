use crate::core::math::Vec3;
use crate::domain::anchor::{AnchorId, SurfaceAnchor};
use crate::domain::settings::SurfaceSettings;

/// Derived slab geometry for one tracked surface.
///
/// The slab is a thin box: width/depth track the anchor extent and the
/// position sits half a thickness below the anchor plane so the slab's
/// top face lines up with the tracked height.
#[derive(Clone, Debug)]
pub struct SurfaceModel {
    pub id: AnchorId,
    pub width: f32,
    pub depth: f32,
    /// Slab height, constant for the session
    pub thickness: f32,
    /// Slab center in the anchor's reference frame
    pub local_position: Vec3,
    /// Slab center in world space (anchor origin + local position)
    pub world_position: Vec3,
    pub visible: bool,
}

impl SurfaceModel {
    pub fn from_anchor(anchor: &SurfaceAnchor, settings: &SurfaceSettings, visible: bool) -> Self {
        let mut model = Self {
            id: anchor.id,
            width: 0.0,
            depth: 0.0,
            thickness: settings.thickness,
            local_position: Vec3::zero(),
            world_position: Vec3::zero(),
            visible,
        };
        model.sync_to_anchor(anchor, settings);
        model
    }

    /// Recompute geometry from the anchor's current estimate.
    ///
    /// Everything is rebuilt from the anchor each call, never adjusted
    /// incrementally, so repeated updates cannot accumulate drift.
    pub fn sync_to_anchor(&mut self, anchor: &SurfaceAnchor, settings: &SurfaceSettings) {
        self.width = anchor.extent_x.max(settings.min_extent);
        self.depth = anchor.extent_z.max(settings.min_extent);
        let drop = Vec3::new(0.0, -self.thickness * 0.5, 0.0);
        self.local_position = anchor.center + drop;
        self.world_position = anchor.world_center() + drop;
    }

    /// Collider half-extents matching the slab box
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width * 0.5, self.thickness * 0.5, self.depth * 0.5)
    }

    /// World Y of the slab's top face
    pub fn top(&self) -> f32 {
        self.world_position.y + self.thickness * 0.5
    }
}
