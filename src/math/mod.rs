mod quat;
mod sphere;

pub use quat::{add_quats, axis_to_quat, RENORM_COUNT};
pub use sphere::project_to_sphere;
