use crate::math::Matrix;

/// Apply sigmoid in place and return its derivative `h·(1−h)` as the
/// backward mask.
pub fn forward_matrix(m: &mut Matrix) -> Vec<f32> {
    let mut mask = vec![0.0; m.data.len()];
    for (i, v) in m.data.iter_mut().enumerate() {
        let h = 1.0 / (1.0 + (-*v).exp());
        *v = h;
        mask[i] = h * (1.0 - h);
    }
    mask
}
