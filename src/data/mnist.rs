use mnist::MnistBuilder;

use crate::math::Matrix;

const IMAGE_SIZE: usize = 28 * 28;

/// Train/test partitions of flattened images with pixels scaled to `[0, 1]`.
pub struct DataSplit {
    pub train: Matrix,
    pub test: Matrix,
}

/// Load the MNIST split, downloading the archives into `data/` on first use.
///
/// A missing or corrupt download aborts the process before any training
/// starts; there is no retry and nothing to resume.
pub fn load_split() -> DataSplit {
    let mnist = MnistBuilder::new()
        .label_format_digit()
        .training_set_length(60_000)
        .validation_set_length(0)
        .test_set_length(10_000)
        .download_and_extract()
        .finalize();
    DataSplit {
        train: images_to_matrix(&mnist.trn_img),
        test: images_to_matrix(&mnist.tst_img),
    }
}

fn images_to_matrix(pixels: &[u8]) -> Matrix {
    let rows = pixels.len() / IMAGE_SIZE;
    let data = pixels.iter().map(|&p| p as f32 / 255.0).collect();
    Matrix::from_vec(rows, IMAGE_SIZE, data)
}
