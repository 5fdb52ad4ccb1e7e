use crate::tensor::Tensor;

#[test]
fn test_add_and_mul_with_number() {
    let tensor = Tensor::new(&[-1., 0., 1.], &[3]);
    assert_eq!((&tensor + 1.).to_vec(), vec![0., 1., 2.]);
    assert_eq!((&tensor * 2.).to_vec(), vec![-2., 0., 2.]);
    // 按值运算不改变形状
    let shifted = Tensor::ones(&[2, 2]) + 1.;
    assert_eq!(shifted.shape(), &[2, 2]);
    assert_eq!((shifted * 0.5).to_vec(), vec![1.; 4]);
}
