//! AABB overlap tests and per-axis penetration resolution

use super::body::RigidBody;

/// Below this speed a reflected velocity component is zeroed so resting
/// bodies settle instead of micro-bouncing forever
const REST_SPEED: f32 = 0.05;

/// Per-axis penetration depths; the pair overlaps iff all are positive
fn penetrations(a: &RigidBody, b: &RigidBody) -> (f32, f32, f32) {
    let px = (a.half_extents.x + b.half_extents.x) - (a.position.x - b.position.x).abs();
    let py = (a.half_extents.y + b.half_extents.y) - (a.position.y - b.position.y).abs();
    let pz = (a.half_extents.z + b.half_extents.z) - (a.position.z - b.position.z).abs();
    (px, py, pz)
}

pub(super) fn aabb_overlap(a: &RigidBody, b: &RigidBody) -> bool {
    let (px, py, pz) = penetrations(a, b);
    px > 0.0 && py > 0.0 && pz > 0.0
}

/// Sign of d, treating exact 0 as positive (push out, never further in)
fn direction(d: f32) -> f32 {
    if d >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn settle(v: &mut f32) {
    if v.abs() < REST_SPEED {
        *v = 0.0;
    }
}

/// Push `body` out of `fixed` along the axis of least penetration and
/// reflect the velocity component on that axis, damped by restitution.
pub(super) fn resolve_against_fixed(body: &mut RigidBody, fixed: &RigidBody) {
    let (px, py, pz) = penetrations(body, fixed);
    if px <= 0.0 || py <= 0.0 || pz <= 0.0 {
        return;
    }

    if px <= py && px <= pz {
        let sign = direction(body.position.x - fixed.position.x);
        body.position.x += sign * px;
        if body.velocity.x * sign < 0.0 {
            body.velocity.x = -body.velocity.x * body.restitution;
            settle(&mut body.velocity.x);
        }
    } else if py <= pz {
        let sign = direction(body.position.y - fixed.position.y);
        body.position.y += sign * py;
        if body.velocity.y * sign < 0.0 {
            body.velocity.y = -body.velocity.y * body.restitution;
            settle(&mut body.velocity.y);
        }
    } else {
        let sign = direction(body.position.z - fixed.position.z);
        body.position.z += sign * pz;
        if body.velocity.z * sign < 0.0 {
            body.velocity.z = -body.velocity.z * body.restitution;
            settle(&mut body.velocity.z);
        }
    }
}

/// Separate two dynamic bodies, sharing the correction evenly and
/// swapping the approach velocity components (placed cubes all have the
/// same mass, so the equal-mass exchange is close enough).
pub(super) fn resolve_dynamic_pair(a: &mut RigidBody, b: &mut RigidBody) {
    let (px, py, pz) = penetrations(a, b);
    if px <= 0.0 || py <= 0.0 || pz <= 0.0 {
        return;
    }
    let restitution = a.restitution.min(b.restitution);

    if px <= py && px <= pz {
        let sign = direction(a.position.x - b.position.x);
        let shift = sign * px * 0.5;
        a.position.x += shift;
        b.position.x -= shift;
        let (va, vb) = (a.velocity.x, b.velocity.x);
        if (va - vb) * sign < 0.0 {
            a.velocity.x = vb * restitution;
            b.velocity.x = va * restitution;
        }
    } else if py <= pz {
        let sign = direction(a.position.y - b.position.y);
        let shift = sign * py * 0.5;
        a.position.y += shift;
        b.position.y -= shift;
        let (va, vb) = (a.velocity.y, b.velocity.y);
        if (va - vb) * sign < 0.0 {
            a.velocity.y = vb * restitution;
            b.velocity.y = va * restitution;
        }
    } else {
        let sign = direction(a.position.z - b.position.z);
        let shift = sign * pz * 0.5;
        a.position.z += shift;
        b.position.z -= shift;
        let (va, vb) = (a.velocity.z, b.velocity.z);
        if (va - vb) * sign < 0.0 {
            a.velocity.z = vb * restitution;
            b.velocity.z = va * restitution;
        }
    }
}
