use crate::domain::settings::SimSettings;

use super::{init, WorldCore};

pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let settings = SimSettings::from_json(json)?;
    *world = init::create_world_core(settings);
    Ok(())
}

pub(super) fn settings_json(world: &WorldCore) -> String {
    world.settings.to_json()
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity_y: f32) {
    if gravity_y.is_finite() {
        world.settings.gravity_y = gravity_y;
        world.physics.set_gravity(gravity_y);
    }
}
