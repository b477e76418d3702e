//! Surface anchors - tracked plane estimates delivered by the AR session

use crate::core::math::Vec3;

/// Stable identifier of a tracked surface, assigned by the tracking layer
pub type AnchorId = u32;

/// One tracked planar surface estimate.
///
/// Produced and refined by the AR tracking layer; the engine only reads
/// it. `center` is expressed in the anchor's own reference frame and
/// `origin` is the world position of that frame, so the world-space
/// center of the detected region is `origin + center`.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceAnchor {
    pub id: AnchorId,
    /// World position of the anchor's reference frame
    pub origin: Vec3,
    /// Center of the detected region, local to the anchor frame
    pub center: Vec3,
    /// Horizontal extent along local X
    pub extent_x: f32,
    /// Horizontal extent along local Z
    pub extent_z: f32,
}

impl SurfaceAnchor {
    pub fn new(id: AnchorId, origin: Vec3, center: Vec3, extent_x: f32, extent_z: f32) -> Self {
        Self { id, origin, center, extent_x, extent_z }
    }

    /// Every component finite and extents non-negative.
    ///
    /// Anchors failing this are dropped at the engine boundary before
    /// they can corrupt surface or body state.
    pub fn is_valid(&self) -> bool {
        self.origin.is_finite()
            && self.center.is_finite()
            && self.extent_x.is_finite()
            && self.extent_z.is_finite()
            && self.extent_x >= 0.0
            && self.extent_z >= 0.0
    }

    /// World-space center of the detected region
    pub fn world_center(&self) -> Vec3 {
        self.origin + self.center
    }
}
