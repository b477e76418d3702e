//! Out-of-bounds cleanup
//!
//! Anything that touches the boundary catcher has fallen out of the
//! tracked volume and is discarded.

use crate::domain::category::BodyCategory;
use crate::physics::{ContactEvent, PhysicsWorld};

/// Removes Movable bodies that contacted the Boundary body.
pub struct BoundaryFilter;

impl BoundaryFilter {
    /// Consume one step's contact events; returns how many bodies were
    /// removed.
    ///
    /// Only an exact {Boundary, Movable} pair counts, in either order.
    /// Every other combination is ignored so future categories keep
    /// working, and the Boundary body itself is never removed.
    pub fn process(events: &[ContactEvent], world: &mut PhysicsWorld) -> usize {
        let mut removed = 0;
        for event in events {
            if !event.is_pair(BodyCategory::Boundary, BodyCategory::Movable) {
                continue;
            }
            if let Some(id) = event.body_with_category(BodyCategory::Movable) {
                if world.remove(id) {
                    removed += 1;
                }
            }
        }
        removed
    }
}
