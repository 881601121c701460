use indicatif::ProgressBar;

use crate::config::TrainConfig;
use crate::data::random_block;
use crate::error::{Error, Result};
use crate::layers::Activation;
use crate::math::{self, Matrix};
use crate::models::DenoisingAutoencoder;
use crate::optim::Adam;
use crate::rng::rng_from_env;

/// Train a fresh autoencoder on the standardized `train` matrix.
///
/// Each epoch runs `train.rows / batch_size` updates on uniformly chosen
/// contiguous blocks. The per-epoch average cost accumulates
/// `cost / n_samples · batch_size` across all batches of the epoch and is
/// printed as `Epoch: NNNN cost= D.DDDDDDDDD` every `display_step` epochs.
///
/// Returns the trained model together with the per-epoch average costs.
pub fn run(cfg: &TrainConfig, train: &Matrix) -> Result<(DenoisingAutoencoder, Vec<f32>)> {
    if train.cols != cfg.n_input {
        return Err(Error::DimensionMismatch {
            expected: cfg.n_input,
            actual: train.cols,
        });
    }

    let mut model = DenoisingAutoencoder::new(
        cfg.n_input,
        cfg.n_hidden,
        Activation::Softplus,
        Adam::with_lr(cfg.learning_rate),
        cfg.scale,
    );
    let mut rng = rng_from_env();
    let n_samples = train.rows;
    let total_batch = n_samples / cfg.batch_size;
    let mut epoch_costs = Vec::with_capacity(cfg.epochs);

    math::reset_matrix_ops();
    let pb = ProgressBar::new(cfg.epochs as u64);
    for epoch in 0..cfg.epochs {
        let mut avg_cost = 0.0f32;
        for _ in 0..total_batch {
            let batch = random_block(train, cfg.batch_size, &mut rng);
            let cost = model.partial_fit(&batch)?;
            avg_cost += cost / n_samples as f32 * cfg.batch_size as f32;
        }
        if epoch % cfg.display_step == 0 {
            println!("Epoch: {:04} cost= {:.9}", epoch + 1, avg_cost);
        }
        pb.set_message(format!("epoch {} cost {avg_cost:.4}", epoch + 1));
        pb.inc(1);
        epoch_costs.push(avg_cost);
    }
    pb.finish_with_message("training done");
    crate::info!("total matrix ops: {}", math::matrix_ops_count());

    Ok((model, epoch_costs))
}
