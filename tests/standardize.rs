use noisecoder::data::Standardizer;
use noisecoder::math::Matrix;

#[test]
fn fitted_partition_has_zero_mean_unit_variance() {
    // three features: ramp, alternating, constant
    let rows = 50;
    let mut data = Vec::with_capacity(rows * 3);
    for r in 0..rows {
        data.push(r as f32);
        data.push(if r % 2 == 0 { 1.0 } else { -1.0 });
        data.push(4.2);
    }
    let m = Matrix::from_vec(rows, 3, data);
    let scaler = Standardizer::fit(&m);
    let out = scaler.transform(&m);

    for c in 0..2 {
        let mean: f32 = (0..rows).map(|r| out.get(r, c)).sum::<f32>() / rows as f32;
        let var: f32 =
            (0..rows).map(|r| (out.get(r, c) - mean).powi(2)).sum::<f32>() / rows as f32;
        assert!(mean.abs() < 1e-4, "feature {c} mean {mean}");
        assert!((var - 1.0).abs() < 1e-3, "feature {c} var {var}");
    }
    // zero-variance feature is centered but unscaled
    for r in 0..rows {
        assert_eq!(out.get(r, 2), 0.0);
    }
}

#[test]
fn same_statistics_apply_to_other_partitions() {
    let train = Matrix::from_vec(4, 2, vec![0.0, 10.0, 2.0, 10.0, 4.0, 10.0, 6.0, 10.0]);
    let test = Matrix::from_vec(1, 2, vec![3.0, 10.0]);
    let scaler = Standardizer::fit(&train);
    assert!((scaler.mean()[0] - 3.0).abs() < 1e-6);
    assert!((scaler.mean()[1] - 10.0).abs() < 1e-6);
    assert_eq!(scaler.std()[1], 1.0);

    let out = scaler.transform(&test);
    // 3.0 sits exactly on the training mean
    assert!(out.get(0, 0).abs() < 1e-6);
    assert!(out.get(0, 1).abs() < 1e-6);
}
