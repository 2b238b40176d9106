pub mod camera;
pub mod cli;
pub mod input;
pub mod loaders;
pub mod math;
pub mod trackball;
pub mod types;

pub use camera::TrackballCamera;
pub use math::{add_quats, axis_to_quat, project_to_sphere, RENORM_COUNT};
pub use trackball::{trackball, Trackball, TrackballError, TrackballSession, TRACKBALL_SIZE};
