use glam::{Quat, Vec3};

/// Number of compositions between forced renormalizations in [`add_quats`].
pub const RENORM_COUNT: u32 = 97;

/// Build the unit quaternion rotating by `phi` radians about `axis`.
///
/// The axis does not need to be normalized. A zero (or non-finite) axis
/// has no defined rotation and yields the identity.
pub fn axis_to_quat(axis: Vec3, phi: f32) -> Quat {
    let Some(axis) = axis.try_normalize() else {
        return Quat::IDENTITY;
    };

    let half = phi * 0.5;
    let v = axis * half.sin();
    Quat::from_xyzw(v.x, v.y, v.z, half.cos())
}

/// Combine two rotations into the single rotation "apply `q1`, then `q2`".
///
/// `renorm_count` is the caller's session counter. It is incremented on
/// every call; once it passes [`RENORM_COUNT`] the result is renormalized
/// and the returned counter drops back to zero.
pub fn add_quats(q1: Quat, q2: Quat, renorm_count: u32) -> (Quat, u32) {
    let v1 = q1.xyz();
    let v2 = q2.xyz();

    // Cross order is q2 × q1; swapping it flips the composition order.
    let v = v1 * q2.w + v2 * q1.w + v2.cross(v1);
    let w = q1.w * q2.w - v1.dot(v2);
    let result = Quat::from_xyzw(v.x, v.y, v.z, w);

    let count = renorm_count.saturating_add(1);
    if count > RENORM_COUNT {
        (result.normalize(), 0)
    } else {
        (result, count)
    }
}
