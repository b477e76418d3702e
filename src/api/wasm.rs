//! Public WASM surface re-exported for the JS host

pub use crate::simulation::World;
