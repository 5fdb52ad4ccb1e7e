use crate::errors::TensorError;
use crate::tensor::Tensor;
use crate::vision::ImageType;

#[test]
fn test_image_type() {
    assert_eq!(Tensor::full(128., &[4, 5]).image_type(), Ok(ImageType::L8));
    assert_eq!(Tensor::full(1., &[4, 5, 1]).image_type(), Ok(ImageType::L8));
    assert_eq!(Tensor::full(1., &[4, 5, 3]).image_type(), Ok(ImageType::Rgb8));
    assert_eq!(Tensor::full(1., &[4, 5, 4]).image_type(), Ok(ImageType::Rgba8));
    // 取值范围不影响判断
    assert_eq!(Tensor::full(-3., &[4, 5]).image_type(), Ok(ImageType::L8));
    // 维度或通道数不对
    assert_eq!(
        Tensor::full(1., &[4]).image_type(),
        Err(TensorError::NotAnImage(vec![4]))
    );
    assert!(Tensor::full(1., &[4, 5, 2]).image_type().is_err());
    assert!(Tensor::full(1., &[1, 4, 5, 1]).image_type().is_err());
}

#[test]
fn test_as_image_cell() {
    // 展平的正方形
    assert_eq!(Tensor::zeros(&[784]).as_image_cell().unwrap().shape(), &[28, 28]);
    assert!(Tensor::zeros(&[10]).as_image_cell().is_err());
    // 通道在前
    assert_eq!(Tensor::zeros(&[1, 28, 28]).as_image_cell().unwrap().shape(), &[28, 28]);
    assert_eq!(Tensor::zeros(&[3, 4, 5]).as_image_cell().unwrap().shape(), &[4, 5, 3]);
    // 通道在后
    assert_eq!(Tensor::zeros(&[4, 5, 1]).as_image_cell().unwrap().shape(), &[4, 5]);
    assert_eq!(Tensor::zeros(&[4, 5, 3]).as_image_cell().unwrap().shape(), &[4, 5, 3]);
    assert_eq!(
        Tensor::zeros(&[2, 4, 5]).as_image_cell(),
        Err(TensorError::NotAnImage(vec![2, 4, 5]))
    );

    // 通道在前转为通道在后时，像素须对应
    let chw = Tensor::new(&(0..12).map(|x| x as f32).collect::<Vec<_>>(), &[3, 2, 2]);
    let hwc = chw.as_image_cell().unwrap();
    assert_eq!(hwc[[0, 1, 2]], chw[[2, 0, 1]]);
}

#[test]
fn test_batch_image() {
    let batch = Tensor::new(&(0..8).map(|x| x as f32).collect::<Vec<_>>(), &[2, 1, 2, 2]);
    let second = batch.batch_image(1).unwrap();
    assert_eq!(second.shape(), &[2, 2]);
    assert_eq!(second.to_vec(), vec![4., 5., 6., 7.]);
    assert!(batch.batch_image(2).is_err());
}

#[test]
fn test_to_pixel_range() {
    let tensor = Tensor::new(&[-1., 0., 1.], &[3]);
    assert_eq!(tensor.to_pixel_range().to_vec(), vec![0., 127.5, 255.]);
}
