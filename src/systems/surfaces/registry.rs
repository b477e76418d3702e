use std::collections::HashMap;

use crate::core::utils::log;
use crate::domain::anchor::{AnchorId, SurfaceAnchor};
use crate::domain::settings::SurfaceSettings;

use super::model::SurfaceModel;

/// Owns every SurfaceModel, keyed by anchor id.
///
/// All mutation happens on the update thread via the three anchor event
/// entry points; no internal locking is needed.
pub struct SurfaceRegistry {
    models: HashMap<AnchorId, SurfaceModel>,
    settings: SurfaceSettings,
    /// Latched by set_all_hidden; models created afterwards start hidden
    suspended: bool,
}

impl SurfaceRegistry {
    pub fn new(settings: SurfaceSettings) -> Self {
        Self {
            models: HashMap::new(),
            settings,
            suspended: false,
        }
    }

    /// Handle a newly detected anchor.
    ///
    /// Returns the created model, or None when the id is already
    /// tracked (logged; tracking should never report an id twice) or
    /// the anchor is malformed.
    pub fn on_anchor_added(&mut self, anchor: &SurfaceAnchor) -> Option<&SurfaceModel> {
        if !anchor.is_valid() {
            log::warn(&format!("anchor {} add dropped: non-finite geometry", anchor.id));
            return None;
        }
        if self.models.contains_key(&anchor.id) {
            log::warn(&format!("anchor {} added twice, ignoring", anchor.id));
            return None;
        }

        let model = SurfaceModel::from_anchor(anchor, &self.settings, !self.suspended);
        self.models.insert(anchor.id, model);
        self.models.get(&anchor.id)
    }

    /// Refresh an existing model in place as the tracking estimate
    /// improves.
    ///
    /// Unknown ids are silently ignored: anchor delivery can race with
    /// removal, and a stale update must not crash or resurrect a model.
    pub fn on_anchor_updated(&mut self, anchor: &SurfaceAnchor) -> bool {
        if !anchor.is_valid() {
            return false;
        }
        match self.models.get_mut(&anchor.id) {
            Some(model) => {
                model.sync_to_anchor(anchor, &self.settings);
                true
            }
            None => false,
        }
    }

    /// Drop the model for a merged-away or lost anchor. No-op when the
    /// id is unknown.
    pub fn on_anchor_removed(&mut self, id: AnchorId) -> bool {
        self.models.remove(&id).is_some()
    }

    /// Hide every model and keep any future model hidden.
    ///
    /// Used when surface detection is suspended for the rest of the
    /// session; there is no re-show path.
    pub fn set_all_hidden(&mut self) {
        self.suspended = true;
        for model in self.models.values_mut() {
            model.visible = false;
        }
    }

    pub fn suspended(&self) -> bool {
        self.suspended
    }

    pub fn get(&self, id: AnchorId) -> Option<&SurfaceModel> {
        self.models.get(&id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SurfaceModel> {
        self.models.values()
    }

    /// Live anchor ids in ascending order (stable render order)
    pub fn ids(&self) -> Vec<AnchorId> {
        let mut ids: Vec<AnchorId> = self.models.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
