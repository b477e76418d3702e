//! Surface registry - lifecycle of detected planar surfaces
//!
//! The AR session reports plane anchors as they are detected, refined
//! and merged away. The registry owns one SurfaceModel per live anchor
//! id and keeps it in sync with the incoming events; renderers look
//! models up by id each frame instead of caching references across
//! ticks, so a removed model can never dangle.

mod model;
mod registry;

pub use model::SurfaceModel;
pub use registry::SurfaceRegistry;
