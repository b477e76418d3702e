//! Tabletop Engine - AR surface tracking and physics core in WASM
//!
//! The JS host owns the AR session, gesture recognition and rendering;
//! the engine owns everything that has to stay consistent: the registry
//! of detected surfaces, the rigid bodies placed on them, explosion
//! impulses and out-of-bounds cleanup.
//!
//! Architecture:
//! - core/          - Math and small utilities
//! - domain/        - Anchors, collision categories, tuning settings
//! - systems/       - Surfaces, physics, explosion, boundary cleanup
//! - simulation/    - Orchestration only
//! - api/           - Public API

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

// Compatibility re-exports (keeps internal and external paths short)
pub use domain::anchor;
pub use domain::category;
pub use domain::settings;
pub use systems::boundary;
pub use systems::explosion;
pub use systems::physics;
pub use systems::surfaces;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Tabletop WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::World;
pub use domain::anchor::SurfaceAnchor;
pub use domain::category::BodyCategory;

// Export category codes for JS (same codes used in the body transfer buffer)
#[wasm_bindgen]
pub fn cat_boundary() -> u8 { domain::category::BodyCategory::Boundary.code() }
#[wasm_bindgen]
pub fn cat_movable() -> u8 { domain::category::BodyCategory::Movable.code() }
#[wasm_bindgen]
pub fn cat_surface() -> u8 { domain::category::BodyCategory::Surface.code() }
