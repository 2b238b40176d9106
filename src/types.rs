use glam::{Mat4, Quat};

/// Orientation uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OrientationUniform {
    pub rotation: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub quat: [f32; 4], // x, y, z, w
}

impl OrientationUniform {
    pub fn new(orientation: Quat, view: Mat4) -> Self {
        Self {
            rotation: Mat4::from_quat(orientation).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            quat: orientation.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_gpu_aligned() {
        assert_eq!(std::mem::size_of::<OrientationUniform>(), 144);
        assert_eq!(std::mem::size_of::<OrientationUniform>() % 16, 0);
    }

    #[test]
    fn test_uniform_bytes() {
        let uniform = OrientationUniform::new(Quat::IDENTITY, Mat4::IDENTITY);
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 144);
        assert_eq!(uniform.quat, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(uniform.rotation, Mat4::IDENTITY.to_cols_array_2d());
    }
}
