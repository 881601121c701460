use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{Error, Result};
use crate::layers::{Activation, LinearT};
use crate::math::Matrix;
use crate::optim::Optimizer;
use crate::rng::rng_from_env;

/// Autoencoder with additive Gaussian input corruption.
///
/// The encoder weight is Xavier-initialized; the encoder bias, decoder
/// weight and decoder bias start at zero. The forward computation is
/// `hidden = activation((x + scale·ε) · W1 + b1)` followed by the linear
/// reconstruction `hidden · W2 + b2`, with the objective
/// `0.5 · Σ (reconstruction − x)²` over all elements of the batch. A fresh
/// noise vector ε of length `n_input` is sampled on every forward pass and
/// broadcast over the batch rows.
pub struct DenoisingAutoencoder {
    n_input: usize,
    n_hidden: usize,
    scale: f32,
    activation: Activation,
    pub enc: LinearT,
    pub dec: LinearT,
    optimizer: Box<dyn Optimizer>,
    rng: StdRng,
}

impl DenoisingAutoencoder {
    pub fn new(
        n_input: usize,
        n_hidden: usize,
        activation: Activation,
        optimizer: impl Optimizer + 'static,
        scale: f32,
    ) -> Self {
        Self {
            enc: LinearT::xavier(n_input, n_hidden),
            dec: LinearT::zeros(n_hidden, n_input),
            optimizer: Box::new(optimizer),
            rng: rng_from_env(),
            n_input,
            n_hidden,
            scale,
            activation,
        }
    }

    fn check_input(&self, x: &Matrix) -> Result<()> {
        if x.cols != self.n_input {
            return Err(Error::DimensionMismatch {
                expected: self.n_input,
                actual: x.cols,
            });
        }
        Ok(())
    }

    /// Add one freshly sampled noise vector, scaled, to every row of `x`.
    fn corrupt(&mut self, x: &Matrix) -> Matrix {
        let noise: Vec<f32> = (0..self.n_input)
            .map(|_| {
                let e: f32 = StandardNormal.sample(&mut self.rng);
                self.scale * e
            })
            .collect();
        let mut out = x.clone();
        for r in 0..out.rows {
            let start = r * out.cols;
            for c in 0..out.cols {
                out.data[start + c] += noise[c];
            }
        }
        out
    }

    fn forward(&mut self, x: &Matrix) -> Matrix {
        let noisy = self.corrupt(x);
        let mut hidden = self.enc.forward(&noisy);
        let _ = self.activation.forward(&mut hidden);
        self.dec.forward(&hidden)
    }

    /// Run one optimization step on `x` and return the batch cost.
    ///
    /// The returned cost is the one computed from the forward pass *before*
    /// the Adam update is applied. A batch whose feature width differs from
    /// `n_input` fails with a dimension mismatch before any parameter is
    /// touched.
    pub fn partial_fit(&mut self, x: &Matrix) -> Result<f32> {
        self.check_input(x)?;
        let noisy = self.corrupt(x);
        let mut hidden = self.enc.forward_train(&noisy);
        let mask = self.activation.forward(&mut hidden);
        let recon = self.dec.forward_train(&hidden);

        // cost and its gradient share the residual
        let mut grad = Matrix::zeros(recon.rows, recon.cols);
        let mut cost = 0.0f32;
        for i in 0..recon.data.len() {
            let d = recon.data[i] - x.data[i];
            grad.data[i] = d;
            cost += 0.5 * d * d;
        }

        self.enc.zero_grad();
        self.dec.zero_grad();
        let mut grad_hidden = self.dec.backward(&grad);
        self.activation.backward(&mut grad_hidden, &mask);
        self.enc.backward(&grad_hidden);
        self.optimizer.step(&mut [&mut self.enc, &mut self.dec]);
        Ok(cost)
    }

    /// Cost of one forward pass without updating any parameter.
    ///
    /// Noise is freshly sampled, so repeated calls on the same batch may
    /// return slightly different values.
    pub fn calc_total_cost(&mut self, x: &Matrix) -> Result<f32> {
        self.check_input(x)?;
        let recon = self.forward(x);
        let mut cost = 0.0f32;
        for (r, v) in recon.data.iter().zip(x.data.iter()) {
            let d = r - v;
            cost += 0.5 * d * d;
        }
        Ok(cost)
    }

    /// Hidden-layer encoding of `x`, noise included as in training.
    pub fn transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.check_input(x)?;
        let noisy = self.corrupt(x);
        let mut hidden = self.enc.forward(&noisy);
        let _ = self.activation.forward(&mut hidden);
        Ok(hidden)
    }

    /// Decode a batch of hidden vectors.
    ///
    /// Without a batch, a single standard-normal hidden vector of shape
    /// `(1, n_hidden)` is sampled.
    pub fn generate(&mut self, hidden: Option<&Matrix>) -> Result<Matrix> {
        let hidden = match hidden {
            Some(h) => {
                if h.cols != self.n_hidden {
                    return Err(Error::DimensionMismatch {
                        expected: self.n_hidden,
                        actual: h.cols,
                    });
                }
                h.clone()
            }
            None => {
                let data: Vec<f32> = (0..self.n_hidden)
                    .map(|_| StandardNormal.sample(&mut self.rng))
                    .collect();
                Matrix::from_vec(1, self.n_hidden, data)
            }
        };
        Ok(self.dec.forward(&hidden))
    }

    /// Full corrupt → encode → decode pass.
    pub fn reconstruct(&mut self, x: &Matrix) -> Result<Matrix> {
        self.check_input(x)?;
        Ok(self.forward(x))
    }

    /// Encoder weight matrix, shape `(n_input, n_hidden)`.
    pub fn weights(&self) -> &Matrix {
        &self.enc.w
    }

    /// Encoder bias vector, length `n_hidden`.
    pub fn biases(&self) -> &[f32] {
        &self.enc.b
    }
}
