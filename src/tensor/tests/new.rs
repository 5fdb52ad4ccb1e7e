use crate::tensor::Tensor;
use ndarray::{Array, IxDyn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_new() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(
        tensor.data,
        Array::from_shape_vec(IxDyn(&[2, 3]), vec![1., 2., 3., 4., 5., 6.]).unwrap()
    );
    assert_eq!(tensor.dimension(), 2);
    assert_eq!(tensor.size(), 6);
    assert_eq!(tensor.batch_len(), 2);
    assert_eq!(tensor[[1, 2]], 6.);
}

#[test]
#[should_panic]
fn test_new_invalid_shape() {
    let _ = Tensor::new(&[1., 2.], &[1, 1, 1]);
}

#[test]
fn test_full_zeros_ones() {
    assert!(Tensor::zeros(&[2, 2]).to_vec().iter().all(|&x| x == 0.));
    assert!(Tensor::ones(&[3]).to_vec().iter().all(|&x| x == 1.));
    assert_eq!(Tensor::full(7., &[1, 2]).to_vec(), vec![7., 7.]);
}

#[test]
fn test_new_random_with_rng() {
    let mut rng = StdRng::seed_from_u64(42);
    let tensor = Tensor::new_random_with_rng(-1., 1., &[4, 5], &mut rng);
    assert_eq!(tensor.shape(), &[4, 5]);
    assert!(tensor.to_vec().iter().all(|x| (-1.0..=1.0).contains(x)));

    // 同一种子的结果应一致
    let mut rng1 = StdRng::seed_from_u64(7);
    let mut rng2 = StdRng::seed_from_u64(7);
    assert_eq!(
        Tensor::new_random_with_rng(0., 1., &[8], &mut rng1),
        Tensor::new_random_with_rng(0., 1., &[8], &mut rng2)
    );
}

#[test]
fn test_new_normal_with_rng() {
    let mut rng = StdRng::seed_from_u64(42);
    let tensor = Tensor::new_normal_with_rng(0., 1., &[2000], &mut rng);
    assert_eq!(tensor.size(), 2000);
    let mean = tensor.to_vec().iter().sum::<f32>() / 2000.;
    assert!(mean.abs() < 0.1, "均值偏离过大：{mean}");
    // 奇数长度
    let tensor = Tensor::new_normal_with_rng(1., 0.5, &[3, 3], &mut rng);
    assert_eq!(tensor.shape(), &[3, 3]);
}

#[test]
fn test_property() {
    let tensor = Tensor::new(&[3., -1., 2.], &[3]);
    assert_eq!(tensor.min_max(), Some((-1., 3.)));
    assert_eq!(Tensor::zeros(&[0]).min_max(), None);
    assert_eq!(tensor.batch_len(), 3);
    assert_eq!(Tensor::new(&[5.], &[]).batch_len(), 0);
}
