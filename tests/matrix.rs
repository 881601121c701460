use noisecoder::math::Matrix;

#[test]
fn matmul_matches_hand_computation() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    let c = Matrix::matmul(&a, &b);
    assert_eq!((c.rows, c.cols), (2, 2));
    assert_eq!(c.data, vec![58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn add_row_broadcasts_over_every_row() {
    let m = Matrix::from_vec(2, 3, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    let out = m.add_row(&[1.0, 2.0, 3.0]);
    assert_eq!(out.data, vec![1.0, 2.0, 3.0, 2.0, 3.0, 4.0]);
}

#[test]
fn transpose_round_trip() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = m.transpose();
    assert_eq!((t.rows, t.cols), (3, 2));
    assert_eq!(t.get(0, 1), 4.0);
    let back = t.transpose();
    assert_eq!(back.data, m.data);
}
