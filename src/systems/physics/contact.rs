use crate::domain::category::BodyCategory;

use super::body::BodyId;

/// Two bodies began touching during a simulation step.
///
/// Emitted once when the contact forms, not repeated while the pair
/// stays in touch. Consumed the same tick, never persisted.
#[derive(Clone, Copy, Debug)]
pub struct ContactEvent {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub category_a: BodyCategory,
    pub category_b: BodyCategory,
}

impl ContactEvent {
    /// True when the pair's categories are exactly {a, b}, in either
    /// order.
    pub fn is_pair(&self, a: BodyCategory, b: BodyCategory) -> bool {
        (self.category_a == a && self.category_b == b)
            || (self.category_a == b && self.category_b == a)
    }

    /// Id of whichever side has `category`, if either does
    pub fn body_with_category(&self, category: BodyCategory) -> Option<BodyId> {
        if self.category_a == category {
            Some(self.body_a)
        } else if self.category_b == category {
            Some(self.body_b)
        } else {
            None
        }
    }
}

/// Canonical ordered key for a contact pair
pub(super) fn pair_key(a: BodyId, b: BodyId) -> (BodyId, BodyId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
