use crate::math::Matrix;

/// Apply softplus `ln(1 + e^z)` in place and return its derivative
/// `sigmoid(z)` as the backward mask.
pub fn forward_matrix(m: &mut Matrix) -> Vec<f32> {
    let mut mask = vec![0.0; m.data.len()];
    for (i, v) in m.data.iter_mut().enumerate() {
        let z = *v;
        mask[i] = 1.0 / (1.0 + (-z).exp());
        // stable form: max(z, 0) + ln(1 + e^{-|z|})
        *v = z.max(0.0) + (-z.abs()).exp().ln_1p();
    }
    mask
}
