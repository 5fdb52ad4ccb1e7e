use crate::assert_panic;
use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_reshape() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[1, 2, 3]);
    assert_eq!(tensor.reshape(&[3, 2]).shape(), &[3, 2]);

    let reshaped = tensor.clone().into_reshape(&[2, 3]);
    assert_eq!(reshaped.shape(), &[2, 3]);
    assert_eq!(reshaped.to_vec(), tensor.to_vec());

    let permuted = reshaped.permute(&[1, 0]).into_reshape(&[6]);
    assert_eq!(permuted.to_vec(), vec![1., 4., 2., 5., 3., 6.]);

    assert_panic!(tensor.reshape(&[4]), TensorError::IncompatibleShape);
    assert_panic!(tensor.into_reshape(&[4]), TensorError::IncompatibleShape);
}

#[test]
fn test_stack() {
    let a = Tensor::new(&[1., 2.], &[2]);
    let b = Tensor::new(&[3., 4.], &[2]);
    let stacked = Tensor::stack(&[&a, &b], true);
    assert_eq!(stacked.shape(), &[2, 2]);
    assert_eq!(stacked.to_vec(), vec![1., 2., 3., 4.]);

    let a = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let b = Tensor::new(&[5., 6.], &[1, 2]);
    let concat = Tensor::concat(&[&a, &b]);
    assert_eq!(concat.shape(), &[3, 2]);
    assert_eq!(concat.to_vec(), vec![1., 2., 3., 4., 5., 6.]);
}

#[test]
#[should_panic(expected = "张量形状不一致")]
fn test_stack_inconsistent() {
    let a = Tensor::new(&[1., 2.], &[1, 2]);
    let b = Tensor::new(&[3., 4., 5.], &[1, 3]);
    let _ = Tensor::concat(&[&a, &b]);
}

#[test]
fn test_permute() {
    // [2, 3] -> [3, 2]
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    let permuted = tensor.permute(&[1, 0]);
    assert_eq!(permuted.shape(), &[3, 2]);
    assert_eq!(permuted.to_vec(), vec![1., 4., 2., 5., 3., 6.]);
}

#[test]
fn test_select_take_item() {
    let batch = Tensor::new(&[0., 0., 1., 1., 2., 2.], &[3, 2]);

    let selected = batch.select(&[2, 0, 2]).unwrap();
    assert_eq!(selected.shape(), &[3, 2]);
    assert_eq!(selected.to_vec(), vec![2., 2., 0., 0., 2., 2.]);
    assert_eq!(
        batch.select(&[3]),
        Err(TensorError::BatchIndexOutOfBounds { index: 3, len: 3 })
    );

    assert_eq!(batch.take(2).shape(), &[2, 2]);
    // 不足时全部返回
    assert_eq!(batch.take(100).shape(), &[3, 2]);

    assert_eq!(batch.item(1).unwrap().to_vec(), vec![1., 1.]);
    assert!(batch.item(3).is_err());
}
