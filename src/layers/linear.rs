use rand::Rng;

use crate::math::Matrix;
use crate::rng::rng_from_env;

// Dense layer with a weight matrix and bias vector. During training each
// forward pass stores the input so backward can accumulate gradients for the
// weight, the bias and the layer input. The layer also keeps its own Adam
// moment estimates so optimizer state persists across iterations.

pub struct LinearT {
    pub w: Matrix,
    pub b: Vec<f32>,
    grad_w: Matrix,
    grad_b: Vec<f32>,
    m_w: Matrix,
    v_w: Matrix,
    m_b: Vec<f32>,
    v_b: Vec<f32>,
    t: usize,
    last_x: Matrix,
}

impl LinearT {
    /// Xavier-uniform initialization: weight entries drawn uniformly from
    /// `± sqrt(6 / (in_dim + out_dim))`, bias at zero.
    pub fn xavier(in_dim: usize, out_dim: usize) -> Self {
        let bound = (6.0 / (in_dim + out_dim) as f32).sqrt();
        let mut rng = rng_from_env();
        let data = (0..in_dim * out_dim)
            .map(|_| rng.gen_range(-bound..bound))
            .collect();
        Self::from_weight(Matrix::from_vec(in_dim, out_dim, data))
    }

    /// All-zero weight and bias.
    pub fn zeros(in_dim: usize, out_dim: usize) -> Self {
        Self::from_weight(Matrix::zeros(in_dim, out_dim))
    }

    fn from_weight(w: Matrix) -> Self {
        let (r, c) = (w.rows, w.cols);
        Self {
            grad_w: Matrix::zeros(r, c),
            m_w: Matrix::zeros(r, c),
            v_w: Matrix::zeros(r, c),
            b: vec![0.0; c],
            grad_b: vec![0.0; c],
            m_b: vec![0.0; c],
            v_b: vec![0.0; c],
            t: 0,
            last_x: Matrix::zeros(0, 0),
            w,
        }
    }

    /// Forward pass without caching, for read-only evaluation.
    pub fn forward(&self, x: &Matrix) -> Matrix {
        Matrix::matmul(x, &self.w).add_row(&self.b)
    }

    /// Training forward storing the input for the backward pass.
    pub fn forward_train(&mut self, x: &Matrix) -> Matrix {
        self.last_x = x.clone();
        self.forward(x)
    }

    /// Accumulate weight and bias gradients from `grad_out` and return the
    /// gradient with respect to the layer input.
    pub fn backward(&mut self, grad_out: &Matrix) -> Matrix {
        let x_t = self.last_x.transpose();
        let grad_w = Matrix::matmul(&x_t, grad_out);
        self.grad_w = self.grad_w.add(&grad_w);
        for r in 0..grad_out.rows {
            for c in 0..grad_out.cols {
                self.grad_b[c] += grad_out.get(r, c);
            }
        }
        Matrix::matmul(grad_out, &self.w.transpose())
    }

    pub fn zero_grad(&mut self) {
        self.grad_w = Matrix::zeros(self.grad_w.rows, self.grad_w.cols);
        for g in self.grad_b.iter_mut() {
            *g = 0.0;
        }
    }

    /// One Adam update of the weight and bias from the accumulated
    /// gradients. Weight decay applies to the weight only.
    pub fn adam_step(&mut self, lr: f32, beta1: f32, beta2: f32, eps: f32, weight_decay: f32) {
        self.t += 1;
        let bc1 = 1.0 - beta1.powi(self.t as i32);
        let bc2 = 1.0 - beta2.powi(self.t as i32);
        for i in 0..self.grad_w.data.len() {
            let g = self.grad_w.data[i] + weight_decay * self.w.data[i];
            self.m_w.data[i] = beta1 * self.m_w.data[i] + (1.0 - beta1) * g;
            self.v_w.data[i] = beta2 * self.v_w.data[i] + (1.0 - beta2) * g * g;
            let m_hat = self.m_w.data[i] / bc1;
            let v_hat = self.v_w.data[i] / bc2;
            self.w.data[i] -= lr * m_hat / (v_hat.sqrt() + eps);
        }
        for i in 0..self.grad_b.len() {
            let g = self.grad_b[i];
            self.m_b[i] = beta1 * self.m_b[i] + (1.0 - beta1) * g;
            self.v_b[i] = beta2 * self.v_b[i] + (1.0 - beta2) * g * g;
            let m_hat = self.m_b[i] / bc1;
            let v_hat = self.v_b[i] / bc2;
            self.b[i] -= lr * m_hat / (v_hat.sqrt() + eps);
        }
    }
}
