pub mod linear;
pub mod relu;
pub mod sigmoid;
pub mod softplus;

pub use linear::LinearT;

use crate::math::Matrix;

/// Hidden-layer transfer functions supported by the autoencoder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Activation {
    Softplus,
    Sigmoid,
    Relu,
}

impl Activation {
    /// Apply the activation in place and return the derivative mask consumed
    /// by [`Activation::backward`].
    pub fn forward(&self, m: &mut Matrix) -> Vec<f32> {
        match self {
            Activation::Softplus => softplus::forward_matrix(m),
            Activation::Sigmoid => sigmoid::forward_matrix(m),
            Activation::Relu => relu::forward_matrix(m),
        }
    }

    /// Multiply the gradient with the derivative mask from the forward pass.
    pub fn backward(&self, grad: &mut Matrix, mask: &[f32]) {
        for (g, &d) in grad.data.iter_mut().zip(mask.iter()) {
            *g *= d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softplus_is_positive_and_mask_is_sigmoid() {
        let mut m = Matrix::from_vec(1, 3, vec![-2.0, 0.0, 2.0]);
        let mask = Activation::Softplus.forward(&mut m);
        for &v in m.data.iter() {
            assert!(v > 0.0);
        }
        assert!((m.get(0, 1) - 2.0f32.ln()).abs() < 1e-6);
        assert!((mask[1] - 0.5).abs() < 1e-6);
        assert!(mask[0] < mask[1] && mask[1] < mask[2]);
    }

    #[test]
    fn relu_mask_matches_sign() {
        let mut m = Matrix::from_vec(1, 4, vec![-1.0, -0.5, 0.5, 1.0]);
        let mask = Activation::Relu.forward(&mut m);
        assert_eq!(mask, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(m.data, vec![0.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn sigmoid_backward_scales_gradient() {
        let mut m = Matrix::from_vec(1, 1, vec![0.0]);
        let mask = Activation::Sigmoid.forward(&mut m);
        let mut grad = Matrix::from_vec(1, 1, vec![2.0]);
        Activation::Sigmoid.backward(&mut grad, &mask);
        // sigmoid'(0) = 0.25
        assert!((grad.data[0] - 0.5).abs() < 1e-6);
    }
}
