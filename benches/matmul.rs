use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use noisecoder::math::Matrix;

fn bench_matmul(c: &mut Criterion) {
    // encoder-sized product: one training batch against W1
    let mut rng = rand::thread_rng();
    let x_data: Vec<f32> = (0..128 * 784).map(|_| rng.gen()).collect();
    let w_data: Vec<f32> = (0..784 * 200).map(|_| rng.gen()).collect();
    let x = Matrix::from_vec(128, 784, x_data);
    let w = Matrix::from_vec(784, 200, w_data);

    c.bench_function("matmul_batch_encoder", |bencher| {
        bencher.iter(|| {
            let res = Matrix::matmul(black_box(&x), black_box(&w));
            black_box(res);
        });
    });
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
