use std::f32::consts::FRAC_1_SQRT_2;

/// Project an (x, y) pair onto a sphere of the given radius, or onto a
/// hyperbolic sheet once the point leaves the disk inscribed at 45°.
///
/// Returns the z coordinate of the lifted point. Both surfaces meet at
/// `d = radius / √2`, so the depth is continuous across the boundary.
pub fn project_to_sphere(radius: f32, x: f32, y: f32) -> f32 {
    let d = (x * x + y * y).sqrt();

    if d < radius * FRAC_1_SQRT_2 {
        // Inside sphere
        (radius * radius - d * d).sqrt()
    } else if d > 0.0 {
        // On hyperbola
        let t = radius * FRAC_1_SQRT_2;
        t * t / d
    } else {
        // Only reachable with a non-positive radius
        radius
    }
}
