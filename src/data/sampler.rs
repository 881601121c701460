use rand::rngs::StdRng;
use rand::Rng;

use crate::math::Matrix;

/// Copy a uniformly chosen contiguous block of `batch_size` rows.
///
/// The start index is uniform in `[0, rows − batch_size)`; blocks are drawn
/// with replacement, so overlap across draws is expected. A dataset exactly
/// one batch long always yields the block starting at row zero.
pub fn random_block(data: &Matrix, batch_size: usize, rng: &mut StdRng) -> Matrix {
    assert!(batch_size <= data.rows);
    let span = data.rows - batch_size;
    let start = if span == 0 { 0 } else { rng.gen_range(0..span) };
    let begin = start * data.cols;
    let end = (start + batch_size) * data.cols;
    Matrix::from_vec(batch_size, data.cols, data.data[begin..end].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng_from_env;

    #[test]
    fn blocks_are_contiguous_rows_of_the_source() {
        let data = Matrix::from_vec(10, 2, (0..20).map(|i| i as f32).collect());
        let mut rng = rng_from_env();
        for _ in 0..50 {
            let block = random_block(&data, 3, &mut rng);
            assert_eq!((block.rows, block.cols), (3, 2));
            let first = block.data[0];
            for (i, &v) in block.data.iter().enumerate() {
                assert_eq!(v, first + i as f32);
            }
            assert!(first as usize / 2 <= 10 - 3);
        }
    }

    #[test]
    fn single_batch_dataset_always_starts_at_zero() {
        let data = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]);
        let mut rng = rng_from_env();
        let block = random_block(&data, 4, &mut rng);
        assert_eq!(block.data, data.data);
    }
}
