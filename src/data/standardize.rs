use crate::math::Matrix;

/// Per-feature standardization fitted on one partition and applied with the
/// same statistics to any other.
pub struct Standardizer {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl Standardizer {
    /// Fit per-feature mean and standard deviation on `data`.
    ///
    /// Zero-variance features keep a unit divisor so they come out centered
    /// but unscaled.
    pub fn fit(data: &Matrix) -> Self {
        let n = data.rows.max(1) as f32;
        let mut mean = vec![0.0f32; data.cols];
        for r in 0..data.rows {
            for c in 0..data.cols {
                mean[c] += data.get(r, c);
            }
        }
        for m in mean.iter_mut() {
            *m /= n;
        }
        let mut var = vec![0.0f32; data.cols];
        for r in 0..data.rows {
            for c in 0..data.cols {
                let d = data.get(r, c) - mean[c];
                var[c] += d * d;
            }
        }
        let std = var
            .iter()
            .map(|&v| {
                let s = (v / n).sqrt();
                if s > 0.0 {
                    s
                } else {
                    1.0
                }
            })
            .collect();
        Self { mean, std }
    }

    /// Apply the fitted statistics to `data`.
    pub fn transform(&self, data: &Matrix) -> Matrix {
        assert_eq!(data.cols, self.mean.len());
        let mut out = data.clone();
        for r in 0..out.rows {
            let start = r * out.cols;
            for c in 0..out.cols {
                out.data[start + c] = (out.data[start + c] - self.mean[c]) / self.std[c];
            }
        }
        out
    }

    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    pub fn std(&self) -> &[f32] {
        &self.std
    }
}
